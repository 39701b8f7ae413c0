use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

/// A stone played on the board, with the number of opponent stones it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    pub pos: Point,
    pub stone: Stone,
    pub captured: u32,
}

impl Turn {
    pub fn play(stone: Stone, pos: Point) -> Self {
        Turn {
            pos,
            stone,
            captured: 0,
        }
    }

    pub fn with_captured(mut self, captured: u32) -> Self {
        self.captured = captured;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_starts_without_captures() {
        let t = Turn::play(Stone::Black, (3, 4));
        assert_eq!(t.stone, Stone::Black);
        assert_eq!(t.pos, (3, 4));
        assert_eq!(t.captured, 0);
    }

    #[test]
    fn equality() {
        let t1 = Turn::play(Stone::Black, (1, 1));
        let t2 = Turn::play(Stone::Black, (1, 1));
        let t3 = Turn::play(Stone::White, (1, 1));
        assert_eq!(t1, t2);
        assert_ne!(t1, t3);
        assert_ne!(t1, t2.with_captured(2));
    }

    #[test]
    fn json_shape() {
        let t = Turn::play(Stone::White, (2, 5)).with_captured(3);
        let json = serde_json::to_value(t).unwrap();
        assert_eq!(json["pos"], serde_json::json!([2, 5]));
        assert_eq!(json["stone"], 2);
        assert_eq!(json["captured"], 3);
    }
}
