use std::fmt::Write;

use crate::engine::GameState;

/// Serialize a `GameState` to save text.
pub fn serialize(state: &GameState) -> String {
    let mut buf = String::new();
    write_header(state, &mut buf);
    write_grid(state, &mut buf);
    for turn in &state.history {
        let (x, y) = turn.pos;
        let _ = writeln!(buf, "{x} {y} {} {}", turn.stone.code(), turn.captured);
    }
    buf
}

fn write_header(state: &GameState, buf: &mut String) {
    let _ = writeln!(
        buf,
        "{} {} {} {} {}",
        state.to_move.code(),
        state.captures.black,
        state.captures.white,
        state.move_count,
        state.history.len()
    );
}

// One line per column, every cell followed by a space.
fn write_grid(state: &GameState, buf: &mut String) {
    let n = state.size as usize;
    for x in 0..n {
        for y in 0..n {
            let _ = write!(buf, "{} ", state.board[y * n + x]);
        }
        buf.push('\n');
    }
}
