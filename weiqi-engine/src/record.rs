//! Plain-text game record export.

use std::fmt::Write;

use crate::Point;
use crate::config::GameConfig;
use crate::engine::Engine;
use crate::stone::Stone;

const RULE: &str = "=========================================";

/// Conventional board label for `point`: a column letter (skipping `I`)
/// followed by the row counted from the bottom.
///
/// Columns past `Z` are written as a 1-based number and a dash, e.g. `26-3`.
pub fn point_label(size: u8, (x, y): Point) -> String {
    let row = size as i32 - y as i32;
    if x >= 25 {
        return format!("{}-{row}", x as u32 + 1);
    }
    let offset = if x < 8 { x } else { x + 1 };
    let col = char::from(b'A' + offset);
    format!("{col}{row}")
}

/// Render the recorded moves of `engine` with player names and final
/// statistics.
pub fn export(engine: &Engine, config: &GameConfig) -> String {
    let mut buf = String::new();
    let turns: Vec<_> = engine.history().turns().collect();

    let _ = writeln!(buf, "{RULE}");
    let _ = writeln!(buf, "           Game Record");
    let _ = writeln!(buf, "{RULE}\n");
    let _ = writeln!(buf, "Black: {}", config.black_player);
    let _ = writeln!(buf, "White: {}", config.white_player);
    let _ = writeln!(buf, "Komi: {:.1}", engine.komi());
    let _ = writeln!(buf, "Total moves: {}", turns.len());
    let _ = writeln!(buf, "\n{RULE}");
    let _ = writeln!(buf, "Move  Color Point    Move  Color Point");
    let _ = writeln!(buf, "{RULE}");

    for (row, pair) in turns.chunks(2).enumerate() {
        let mut line = String::new();
        for (i, turn) in pair.iter().enumerate() {
            let _ = write!(
                line,
                "{:<6}{:<6}{:<9}",
                row * 2 + i + 1,
                turn.stone.letter(),
                point_label(engine.size(), turn.pos)
            );
        }
        let _ = writeln!(buf, "{}", line.trim_end());
    }

    let score = engine.score();
    let _ = writeln!(buf, "\n{RULE}");
    let _ = writeln!(buf, "Statistics");
    let _ = writeln!(buf, "{RULE}");
    let _ = writeln!(buf, "Black captures: {}", engine.stone_captures(Stone::Black));
    let _ = writeln!(buf, "White captures: {}", engine.stone_captures(Stone::White));
    let _ = writeln!(buf, "Black stones: {}", engine.goban().count(Stone::Black));
    let _ = writeln!(buf, "White stones: {}", engine.goban().count(Stone::White));
    let _ = writeln!(buf, "Result: {}", score.result());
    let _ = writeln!(buf, "{RULE}");
    buf
}
