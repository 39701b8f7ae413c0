//! Game settings stored as `Key=Value` lines.

use std::fmt::{self, Write as _};
use std::io;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ai::Difficulty;
use crate::goban::DEFAULT_SIZE;
use crate::territory::DEFAULT_KOMI;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_size: u8,
    pub komi: f64,
    /// Minutes per player. Kept for the caller's clock, never enforced.
    pub time_limit: u32,
    pub enable_sound: bool,
    pub enable_animation: bool,
    pub ai_difficulty: Difficulty,
    pub black_player: String,
    pub white_player: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_SIZE,
            komi: DEFAULT_KOMI,
            time_limit: 30,
            enable_sound: true,
            enable_animation: true,
            ai_difficulty: Difficulty::default(),
            black_player: "Black".to_string(),
            white_player: "White".to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    MissingSeparator {
        line: usize,
    },
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::MissingSeparator { line } => {
                write!(f, "line {line}: expected Key=Value")
            }
            ConfigError::InvalidValue { line, key, value } => {
                write!(f, "line {line}: invalid value '{value}' for {key}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl GameConfig {
    /// Parse configuration text. Keys that are absent keep their defaults;
    /// unknown keys are skipped.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let mut config = GameConfig::default();

        for (i, raw) in input.lines().enumerate() {
            let line = i + 1;
            let text = raw.trim_end_matches('\r');
            if text.trim().is_empty() {
                continue;
            }
            let (key, value) = text
                .split_once('=')
                .ok_or(ConfigError::MissingSeparator { line })?;
            let key = key.trim();

            match key {
                "BoardSize" => {
                    config.board_size = value_of(line, key, value)?;
                    if config.board_size == 0 {
                        return Err(invalid(line, key, value));
                    }
                }
                "Komi" => config.komi = value_of(line, key, value)?,
                "TimeLimit" => config.time_limit = value_of(line, key, value)?,
                "EnableSound" => config.enable_sound = flag(line, key, value)?,
                "EnableAnimation" => config.enable_animation = flag(line, key, value)?,
                "AIDifficulty" => {
                    config.ai_difficulty = Difficulty::from_level(value_of(line, key, value)?)
                        .ok_or_else(|| invalid(line, key, value))?;
                }
                "BlackPlayer" => config.black_player = value.to_string(),
                "WhitePlayer" => config.white_player = value.to_string(),
                _ => tracing::warn!(line, key, "unknown config key"),
            }
        }

        Ok(config)
    }

    pub fn to_text(&self) -> String {
        let mut buf = String::new();
        let _ = writeln!(buf, "BoardSize={}", self.board_size);
        let _ = writeln!(buf, "Komi={:.1}", self.komi);
        let _ = writeln!(buf, "TimeLimit={}", self.time_limit);
        let _ = writeln!(buf, "EnableSound={}", self.enable_sound as u8);
        let _ = writeln!(buf, "EnableAnimation={}", self.enable_animation as u8);
        let _ = writeln!(buf, "AIDifficulty={}", self.ai_difficulty.level());
        let _ = writeln!(buf, "BlackPlayer={}", self.black_player);
        let _ = writeln!(buf, "WhitePlayer={}", self.white_player);
        buf
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_text())?;
        Ok(())
    }

    /// Load `path`, or write the defaults there if it does not exist yet.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "writing default config");
                let config = GameConfig::default();
                config.save(path)?;
                Ok(config)
            }
            other => other,
        }
    }
}

fn invalid(line: usize, key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        line,
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn value_of<T: FromStr>(line: usize, key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| invalid(line, key, value))
}

// Any non-zero integer switches the option on.
fn flag(line: usize, key: &str, value: &str) -> Result<bool, ConfigError> {
    value_of::<i32>(line, key, value).map(|v| v != 0)
}
