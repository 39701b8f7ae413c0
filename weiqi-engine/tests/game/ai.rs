use weiqi_engine::{Difficulty, Engine, Stone};

#[test]
fn hard_move_on_empty_board_is_on_an_empty_point() {
    for seed in 0..10 {
        let mut engine = Engine::new(19).with_seed(seed);
        let p = engine.select_move(Stone::Black, Difficulty::Hard).unwrap();
        assert!(p.0 < 19 && p.1 < 19);
        assert_eq!(engine.stone_at(p), None);
    }
}

#[test]
fn self_play_keeps_the_board_consistent() {
    let mut engine = Engine::new(9).with_seed(2024);
    for _ in 0..120 {
        let stone = engine.to_move();
        let Some((p, _)) = engine.play_ai_turn(Difficulty::Easy) else {
            break;
        };
        assert_eq!(engine.stone_at(p), Some(stone));
        crate::common::assert_all_groups_breathe(engine.goban());
    }
    assert!(engine.move_count() > 0);
}

#[test]
fn seeded_engines_agree() {
    let mut a = Engine::new(9).with_seed(77);
    let mut b = Engine::new(9).with_seed(77);
    for _ in 0..20 {
        assert_eq!(a.play_ai_turn(Difficulty::Medium), b.play_ai_turn(Difficulty::Medium));
    }
    assert_eq!(a.game_state(), b.game_state());
}
