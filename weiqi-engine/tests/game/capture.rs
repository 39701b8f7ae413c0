use weiqi_engine::{Engine, GoError, Stone};

use crate::common::{assert_all_groups_breathe, random_game, random_legal_move, seeded};

/// Black (3,3) surrounded by four White stones is taken by the last one.
#[test]
fn single_stone_capture_scenario() {
    let mut engine = Engine::new(19);
    assert_eq!(engine.apply_move((3, 3), Stone::Black), 0);
    assert_eq!(engine.apply_move((3, 4), Stone::White), 0);
    assert_eq!(engine.apply_move((2, 3), Stone::White), 0);
    assert_eq!(engine.apply_move((4, 3), Stone::White), 0);
    assert_eq!(engine.apply_move((3, 2), Stone::White), 1);

    assert_eq!(engine.stone_captures(Stone::White), 1);
    assert_eq!(engine.stone_captures(Stone::Black), 0);
    assert_eq!(engine.stone_at((3, 3)), None);
}

#[test]
fn capture_count_matches_group_size() {
    let mut engine = Engine::new(9);
    // Black wall of three on the top edge, White surrounds it.
    for x in 2..5 {
        engine.apply_move((x, 0), Stone::Black);
    }
    for p in [(1, 0), (2, 1), (3, 1), (4, 1)] {
        engine.apply_move(p, Stone::White);
    }
    let captured = engine.apply_move((5, 0), Stone::White);

    assert_eq!(captured, 3);
    assert_eq!(engine.stone_captures(Stone::White), 3);
    for x in 2..5 {
        assert_eq!(engine.stone_at((x, 0)), None);
    }
}

#[test]
fn suicide_is_rejected() {
    let mut engine = Engine::new(9);
    engine.apply_move((1, 0), Stone::White);
    engine.apply_move((0, 1), Stone::White);

    assert!(!engine.is_legal((0, 0), Stone::Black));
    assert_eq!(engine.try_play((0, 0), Stone::Black), Err(GoError::Suicide));
    assert_eq!(engine.move_count(), 2);
}

#[test]
fn is_legal_never_changes_the_board() {
    let mut engine = Engine::new(7);
    random_game(&mut engine, 17, 30);
    let before = engine.game_state();
    for p in engine.goban().points().collect::<Vec<_>>() {
        engine.is_legal(p, Stone::Black);
        engine.is_legal(p, Stone::White);
    }
    assert_eq!(engine.game_state(), before);
}

#[test]
fn no_group_without_liberties_after_any_move() {
    for seed in 0..5 {
        let mut engine = Engine::new(5);
        let mut rng = seeded(seed);
        for _ in 0..60 {
            let stone = engine.to_move();
            let Some(p) = random_legal_move(&mut engine, &mut rng) else {
                break;
            };
            engine.apply_move(p, stone);
            assert_all_groups_breathe(engine.goban());
        }
    }
}
