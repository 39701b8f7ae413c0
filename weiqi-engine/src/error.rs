use std::fmt;

/// Why a move or an undo was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    /// The point already holds a stone.
    Overwrite,
    /// The stone would have no liberty and captures nothing.
    Suicide,
    NotOnBoard,
    /// Undo was requested with nothing recorded.
    NoHistory,
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::Overwrite => write!(f, "point is already occupied"),
            GoError::Suicide => write!(f, "suicide is not allowed"),
            GoError::NotOnBoard => write!(f, "point is off the board"),
            GoError::NoHistory => write!(f, "no move to undo"),
        }
    }
}

impl std::error::Error for GoError {}
