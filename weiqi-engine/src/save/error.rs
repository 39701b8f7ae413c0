use std::fmt;

use crate::Point;
use crate::error::GoError;
use crate::stone::Stone;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    UnexpectedEof,
    InvalidNumber {
        line: usize,
        token: String,
    },
    WrongFieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    InvalidCell {
        line: usize,
        value: i64,
    },
    InvalidStone {
        line: usize,
        value: i64,
    },
    InvalidCoordinate {
        line: usize,
        x: u64,
        y: u64,
    },
    BoardTooLarge(usize),
    InvalidBoard,
    HistoryTooLong {
        len: usize,
        limit: usize,
    },
    IllegalMove {
        index: usize,
        reason: GoError,
    },
    CaptureMismatch {
        index: usize,
        recorded: u32,
        replayed: u32,
    },
    BoardMismatch,
    /// Header capture totals differ from the sum over the log.
    CapturesMismatch,
    TurnMismatch {
        saved: Stone,
        expected: Stone,
    },
    /// The log is shorter than the move count but not full, or longer.
    MoveCountMismatch {
        recorded: usize,
        move_count: u32,
    },
    /// A stone on the saved board belongs to a group without liberties.
    DeadGroup(Point),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::UnexpectedEof => write!(f, "unexpected end of save data"),
            SaveError::InvalidNumber { line, token } => {
                write!(f, "line {line}: '{token}' is not a valid number")
            }
            SaveError::WrongFieldCount {
                line,
                expected,
                found,
            } => write!(f, "line {line}: expected {expected} fields, found {found}"),
            SaveError::InvalidCell { line, value } => {
                write!(f, "line {line}: invalid cell value {value}")
            }
            SaveError::InvalidStone { line, value } => {
                write!(f, "line {line}: invalid stone color {value}")
            }
            SaveError::InvalidCoordinate { line, x, y } => {
                write!(f, "line {line}: coordinate ({x}, {y}) is off the board")
            }
            SaveError::BoardTooLarge(n) => write!(f, "board size {n} is not supported"),
            SaveError::InvalidBoard => write!(f, "board grid is empty or malformed"),
            SaveError::HistoryTooLong { len, limit } => {
                write!(f, "history holds {len} moves, at most {limit} allowed")
            }
            SaveError::IllegalMove { index, reason } => {
                write!(f, "history move {index} cannot be replayed: {reason}")
            }
            SaveError::CaptureMismatch {
                index,
                recorded,
                replayed,
            } => write!(
                f,
                "history move {index} records {recorded} captures but replay gives {replayed}"
            ),
            SaveError::BoardMismatch => {
                write!(f, "saved board does not match the replayed history")
            }
            SaveError::CapturesMismatch => {
                write!(f, "saved capture totals do not match the history")
            }
            SaveError::TurnMismatch { saved, expected } => {
                write!(f, "saved side to move is {saved}, history says {expected}")
            }
            SaveError::MoveCountMismatch {
                recorded,
                move_count,
            } => write!(
                f,
                "history holds {recorded} moves but the game has {move_count}"
            ),
            SaveError::DeadGroup((x, y)) => {
                write!(f, "stone at ({x}, {y}) has no liberties")
            }
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::IllegalMove { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
