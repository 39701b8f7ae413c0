mod error;
mod parser;
mod serialize;

pub use error::SaveError;
pub use parser::parse;
pub use serialize::serialize;

use crate::engine::Engine;

/// Restore a game from save text.
pub fn load(input: &str, komi: f64) -> Result<Engine, SaveError> {
    let state = parse(input)?;
    Engine::from_game_state(state, komi)
}

/// Save text for the current game.
pub fn dump(engine: &Engine) -> String {
    serialize(&engine.game_state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stone::Stone;

    #[test]
    fn round_trip_mid_game() {
        let mut engine = Engine::new(5);
        for (p, s) in [
            ((1, 0), Stone::Black),
            ((0, 0), Stone::White),
            ((2, 2), Stone::Black),
            ((4, 4), Stone::White),
            ((0, 1), Stone::Black),
        ] {
            engine.apply_move(p, s);
        }
        assert_eq!(engine.stone_captures(Stone::Black), 1);

        let text = dump(&engine);
        let restored = load(&text, engine.komi()).unwrap();
        assert_eq!(restored.game_state(), engine.game_state());
        assert_eq!(dump(&restored), text);
    }

    #[test]
    fn undo_after_load_matches_undo_before_save() {
        let mut engine = Engine::new(5);
        for (p, s) in [
            ((1, 0), Stone::Black),
            ((0, 0), Stone::White),
            ((0, 1), Stone::Black),
            ((3, 3), Stone::White),
        ] {
            engine.apply_move(p, s);
        }

        let mut restored = load(&dump(&engine), 7.5).unwrap();
        while engine.undo().is_ok() {
            restored.undo().unwrap();
            assert_eq!(restored.game_state(), engine.game_state());
        }
        assert!(restored.undo().is_err());
        assert!(restored.goban().is_empty());
    }

    #[test]
    fn load_rejects_inconsistent_history() {
        // history claims White captured a stone that replay never takes
        let text = "2 0 1 1 1\n1 0 \n0 0 \n0 0 1 1\n";
        assert!(matches!(
            load(text, 7.5),
            Err(SaveError::CaptureMismatch { index: 0, .. })
        ));
    }

    #[test]
    fn load_rejects_header_that_disagrees_with_log() {
        // one logged move but a move count of zero, and a captured black stone
        let text = "2 9 0 0 1\n1 2 0 \n2 0 0 \n0 0 0 \n2 2 1 0\n";
        assert_eq!(
            load(text, 7.5).err(),
            Some(SaveError::MoveCountMismatch {
                recorded: 1,
                move_count: 0
            })
        );
    }
}
