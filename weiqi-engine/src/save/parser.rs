use std::str::FromStr;

use crate::engine::GameState;
use crate::history::Captures;
use crate::stone::{EMPTY, Stone};
use crate::turn::Turn;

use super::error::SaveError;

/// Parse save text into a `GameState`.
///
/// The board size is taken from the number of cells on the first grid line.
/// Blank lines are ignored anywhere in the input.
pub fn parse(input: &str) -> Result<GameState, SaveError> {
    let mut p = Parser::new(input);

    // Header = ToMove BlackCaps WhiteCaps MoveCount HistoryLen
    let (line, fields) = p.fields(Some(5))?;
    let to_move = stone(line, number(line, fields[0])?)?;
    let captures = Captures {
        black: number(line, fields[1])?,
        white: number(line, fields[2])?,
    };
    let move_count: u32 = number(line, fields[3])?;
    let history_len: usize = number(line, fields[4])?;

    let (size, board) = p.grid()?;

    let mut history = Vec::with_capacity(history_len.min(crate::history::MAX_HISTORY));
    for _ in 0..history_len {
        history.push(p.turn(size)?);
    }

    if let Some((line, _)) = p.next_line() {
        tracing::warn!(line, "ignoring trailing save data");
    }

    tracing::debug!(size, move_count, history_len, "parsed save data");
    Ok(GameState {
        size,
        board,
        to_move,
        captures,
        move_count,
        history,
    })
}

struct Parser<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            lines: input.lines().enumerate(),
        }
    }

    /// Next non-blank line with its 1-based line number.
    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        self.lines
            .by_ref()
            .map(|(i, l)| (i + 1, l))
            .find(|(_, l)| !l.trim().is_empty())
    }

    fn fields(&mut self, expected: Option<usize>) -> Result<(usize, Vec<&'a str>), SaveError> {
        let (line, text) = self.next_line().ok_or(SaveError::UnexpectedEof)?;
        let fields: Vec<&str> = text.split_whitespace().collect();
        if let Some(expected) = expected
            && fields.len() != expected
        {
            return Err(SaveError::WrongFieldCount {
                line,
                expected,
                found: fields.len(),
            });
        }
        Ok((line, fields))
    }

    // Grid = Column{N}, Column = Cell{N}, column x holds y = 0..N
    fn grid(&mut self) -> Result<(u8, Vec<i8>), SaveError> {
        let (line, first) = self.fields(None)?;
        let n = first.len();
        if n == 0 {
            return Err(SaveError::InvalidBoard);
        }
        let size = u8::try_from(n).map_err(|_| SaveError::BoardTooLarge(n))?;

        let mut board = vec![EMPTY; n * n];
        let mut column = (line, first);
        for x in 0..n {
            if x > 0 {
                column = self.fields(Some(n))?;
            }
            let (line, cells) = &column;
            for (y, token) in cells.iter().enumerate() {
                board[y * n + x] = cell(*line, number(*line, token)?)?;
            }
        }
        Ok((size, board))
    }

    // Turn = X Y Color Captured
    fn turn(&mut self, size: u8) -> Result<Turn, SaveError> {
        let (line, fields) = self.fields(Some(4))?;
        let x: u64 = number(line, fields[0])?;
        let y: u64 = number(line, fields[1])?;
        if x >= size as u64 || y >= size as u64 {
            return Err(SaveError::InvalidCoordinate { line, x, y });
        }
        let stone = stone(line, number(line, fields[2])?)?;
        let captured = number(line, fields[3])?;
        Ok(Turn::play(stone, (x as u8, y as u8)).with_captured(captured))
    }
}

fn number<T: FromStr>(line: usize, token: &str) -> Result<T, SaveError> {
    token.parse().map_err(|_| SaveError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

fn stone(line: usize, value: i64) -> Result<Stone, SaveError> {
    i8::try_from(value)
        .ok()
        .and_then(Stone::from_code)
        .ok_or(SaveError::InvalidStone { line, value })
}

fn cell(line: usize, value: i64) -> Result<i8, SaveError> {
    if value == EMPTY as i64 {
        return Ok(EMPTY);
    }
    stone(line, value)
        .map(Stone::code)
        .map_err(|_| SaveError::InvalidCell { line, value })
}
