use weiqi_engine::{Engine, GameState, SaveError, save};

use crate::common::random_game;

#[test]
fn save_and_load_then_undo_to_the_start() {
    let mut engine = Engine::new(9);
    random_game(&mut engine, 99, 60);

    let text = save::dump(&engine);
    let mut restored = save::load(&text, engine.komi()).unwrap();
    assert_eq!(restored.game_state(), engine.game_state());

    loop {
        match (engine.undo(), restored.undo()) {
            (Ok(()), Ok(())) => assert_eq!(restored.game_state(), engine.game_state()),
            (Err(a), Err(b)) => {
                assert_eq!(a, b);
                break;
            }
            other => panic!("undo diverged: {other:?}"),
        }
    }
    assert!(restored.goban().is_empty());
}

#[test]
fn json_state_round_trip() {
    let mut engine = Engine::new(9);
    random_game(&mut engine, 5, 25);

    let json = serde_json::to_string(&engine.game_state()).unwrap();
    let state: GameState = serde_json::from_str(&json).unwrap();
    let restored = Engine::from_game_state(state, engine.komi()).unwrap();
    assert_eq!(restored.game_state(), engine.game_state());
}

#[test]
fn tampered_save_is_rejected() {
    let mut engine = Engine::new(5);
    random_game(&mut engine, 1, 6);
    let text = save::dump(&engine);

    // Flip the color of the first recorded move.
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    let first_move = 1 + 5;
    let mut fields: Vec<&str> = lines[first_move].split(' ').collect();
    fields[2] = if fields[2] == "1" { "2" } else { "1" };
    lines[first_move] = fields.join(" ");
    let tampered = lines.join("\n") + "\n";

    assert!(matches!(
        save::load(&tampered, 7.5),
        Err(SaveError::BoardMismatch)
            | Err(SaveError::IllegalMove { .. })
            | Err(SaveError::CaptureMismatch { .. })
            | Err(SaveError::CapturesMismatch)
            | Err(SaveError::TurnMismatch { .. })
    ));
}
