use serde::Serialize;

use crate::goban::Goban;
use crate::history::Captures;
use crate::stone::Stone;

/// Default compensation awarded to White.
pub const DEFAULT_KOMI: f64 = 7.5;

/// Territory ownership for each point on the board.
///
/// Returns a flat array (same layout as `goban.board()`) where empty points
/// enclosed by a single color carry that color. Stones, neutral points and
/// regions bordering both colors are `None`.
pub fn ownership(goban: &Goban) -> Vec<Option<Stone>> {
    let mut owners = vec![None; goban.board().len()];
    for region in goban.regions() {
        if let Some(stone) = region.owner.stone() {
            for &p in &region.points {
                owners[goban.idx(p)] = Some(stone);
            }
        }
    }
    owners
}

/// Per-color score breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlayerPoints {
    pub stones: u32,
    pub territory: u32,
    pub captures: u32,
}

impl PlayerPoints {
    pub fn total(&self) -> u32 {
        self.stones + self.territory + self.captures
    }
}

/// Full score breakdown for both players.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameScore {
    pub black: PlayerPoints,
    pub white: PlayerPoints,
    pub komi: f64,
}

impl GameScore {
    pub fn black_total(&self) -> f64 {
        self.black.total() as f64
    }

    pub fn white_total(&self) -> f64 {
        self.white.total() as f64 + self.komi
    }

    /// The leading color, or `None` on an exact tie.
    pub fn winner(&self) -> Option<Stone> {
        let (b, w) = (self.black_total(), self.white_total());
        if b > w {
            Some(Stone::Black)
        } else if w > b {
            Some(Stone::White)
        } else {
            None
        }
    }

    pub fn margin(&self) -> f64 {
        (self.black_total() - self.white_total()).abs()
    }

    pub fn result(&self) -> String {
        format_result(self.black_total(), self.white_total())
    }
}

/// Count the score: stones on the board, plus empty regions bordered by a
/// single color, plus prisoners. White also receives `komi`.
///
/// Regions touching both colors count for nobody. Dead stones are not
/// recognised; they score for the side that owns them.
pub fn score(goban: &Goban, captures: &Captures, komi: f64) -> GameScore {
    let mut black_territory: u32 = 0;
    let mut white_territory: u32 = 0;

    for region in goban.regions() {
        match region.owner.stone() {
            Some(Stone::Black) => black_territory += region.size(),
            Some(Stone::White) => white_territory += region.size(),
            None => {}
        }
    }

    GameScore {
        black: PlayerPoints {
            stones: goban.count(Stone::Black),
            territory: black_territory,
            captures: captures.get(Stone::Black),
        },
        white: PlayerPoints {
            stones: goban.count(Stone::White),
            territory: white_territory,
            captures: captures.get(Stone::White),
        },
        komi,
    }
}

/// Format the game result string from final scores.
///
/// Returns "B+{diff}", "W+{diff}", or "Draw".
pub fn format_result(black_score: f64, white_score: f64) -> String {
    let diff = black_score - white_score;
    if diff > 0.0 {
        format!("B+{}", diff)
    } else if diff < 0.0 {
        format!("W+{}", -diff)
    } else {
        "Draw".to_string()
    }
}
