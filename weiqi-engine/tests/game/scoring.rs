use weiqi_engine::{Engine, Stone};

#[test]
fn empty_board_goes_to_white_by_komi() {
    let engine = Engine::new(19);
    let score = engine.score();
    assert_eq!(score.black_total(), 0.0);
    assert_eq!(score.white_total(), 7.5);
    assert_eq!(score.winner(), Some(Stone::White));
    assert_eq!(score.margin(), 7.5);
}

#[test]
fn walled_board_splits_territory() {
    let mut engine = Engine::with_komi(9, 0.5);
    for y in 0..9 {
        engine.apply_move((3, y), Stone::Black);
        engine.apply_move((5, y), Stone::White);
    }
    let score = engine.score();
    assert_eq!(score.black.stones, 9);
    assert_eq!(score.black.territory, 27);
    assert_eq!(score.white.territory, 27);
    // column 4 touches both walls
    assert_eq!(score.black_total(), 36.0);
    assert_eq!(score.white_total(), 36.5);
    assert_eq!(score.result(), "W+0.5");
}
