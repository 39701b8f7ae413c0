pub mod ai;
pub mod config;
pub mod engine;
pub mod error;
pub mod goban;
pub mod history;
pub mod hoshi;
pub mod record;
pub mod save;
pub mod stone;
pub mod territory;
pub mod turn;

/// Board coordinate `(x, y)`, both in `0..size`.
pub type Point = (u8, u8);

pub use ai::Difficulty;
pub use config::{ConfigError, GameConfig};
pub use engine::{Engine, GameState};
pub use error::GoError;
pub use goban::Goban;
pub use history::{Captures, History, HistoryEntry};
pub use save::SaveError;
pub use stone::Stone;
pub use territory::GameScore;
pub use turn::Turn;
