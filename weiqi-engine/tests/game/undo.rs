use weiqi_engine::{Captures, Engine, GoError, Stone};

use crate::common::{random_game, random_legal_move, seeded};

#[test]
fn undo_everything_restores_the_start() {
    let mut engine = Engine::new(9);
    let played = random_game(&mut engine, 7, 80);
    assert!(!played.is_empty());

    for _ in 0..played.len() {
        engine.undo().unwrap();
    }
    assert!(engine.goban().is_empty());
    assert_eq!(engine.captures(), &Captures::new());
    assert_eq!(engine.to_move(), Stone::Black);
    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.last_move(), None);
    assert_eq!(engine.undo(), Err(GoError::NoHistory));
}

#[test]
fn each_undo_steps_back_one_state() {
    let mut engine = Engine::new(7);
    let mut states = vec![engine.game_state()];
    let mut rng = seeded(23);
    for _ in 0..40 {
        let stone = engine.to_move();
        let Some(p) = random_legal_move(&mut engine, &mut rng) else {
            break;
        };
        engine.apply_move(p, stone);
        states.push(engine.game_state());
    }

    states.pop();
    while let Some(expected) = states.pop() {
        engine.undo().unwrap();
        assert_eq!(engine.game_state(), expected);
    }
}

#[test]
fn undo_recomputes_capture_totals() {
    let mut engine = Engine::new(9);
    engine.apply_move((0, 1), Stone::Black);
    engine.apply_move((0, 0), Stone::White);
    engine.apply_move((1, 0), Stone::Black);
    engine.apply_move((5, 5), Stone::White);
    assert_eq!(engine.stone_captures(Stone::Black), 1);

    engine.undo().unwrap();
    assert_eq!(engine.stone_captures(Stone::Black), 1);
    assert_eq!(engine.last_move(), Some((1, 0)));
    engine.undo().unwrap();
    assert_eq!(engine.stone_captures(Stone::Black), 0);
    assert_eq!(engine.stone_at((0, 0)), Some(Stone::White));
}
