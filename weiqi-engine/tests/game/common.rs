use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use weiqi_engine::{Engine, Goban, Point, Stone};

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A uniformly chosen legal point for the side to move, if any.
pub fn random_legal_move(engine: &mut Engine, rng: &mut StdRng) -> Option<Point> {
    let stone = engine.to_move();
    let points: Vec<Point> = engine.goban().points().collect();
    let legal: Vec<Point> = points
        .into_iter()
        .filter(|&p| engine.is_legal(p, stone))
        .collect();
    (!legal.is_empty()).then(|| legal[rng.random_range(0..legal.len())])
}

/// Play up to `moves` random legal moves, alternating colors. Returns the
/// moves actually played.
pub fn random_game(engine: &mut Engine, seed: u64, moves: usize) -> Vec<(Point, Stone)> {
    let mut rng = seeded(seed);
    let mut played = Vec::new();
    for _ in 0..moves {
        let stone = engine.to_move();
        let Some(p) = random_legal_move(engine, &mut rng) else {
            break;
        };
        engine.apply_move(p, stone);
        played.push((p, stone));
    }
    played
}

/// Every stone on the board belongs to a group with at least one liberty.
pub fn assert_all_groups_breathe(goban: &Goban) {
    for p in goban.points() {
        if let Some(stone) = goban.stone_at(p) {
            assert!(goban.has_liberty(p, stone), "group at {p:?} has no liberty");
        }
    }
}
