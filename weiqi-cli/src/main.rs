//! Command-line front end for the weiqi engine.
//!
//! - `weiqi selfplay` - let the computer play both sides
//! - `weiqi score <SAVE>` - score a saved game
//! - `weiqi hint <SAVE>` - suggest a move for the side to play
//! - `weiqi undo <SAVE>` - take back moves in a saved game
//! - `weiqi record <SAVE>` - export a readable game record

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use weiqi_engine::record::{self, point_label};
use weiqi_engine::{Difficulty, Engine, GameConfig, GameScore, save};

#[derive(Parser)]
#[command(name = "weiqi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file, created with defaults if missing
    #[arg(long, global = true, default_value = "config.txt")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Let the computer play against itself
    Selfplay {
        /// Stop after this many moves
        #[arg(long, default_value_t = 200)]
        moves: u32,
        /// Difficulty 1-3, defaults to the configured level
        #[arg(long)]
        difficulty: Option<u8>,
        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
        /// Write the finished game to this save file
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Print the score of a saved game
    Score { save: PathBuf },
    /// Suggest a move for the side to play in a saved game
    Hint {
        save: PathBuf,
        #[arg(long)]
        difficulty: Option<u8>,
    },
    /// Take back moves and rewrite the save file
    Undo {
        save: PathBuf,
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Export a game record
    Record {
        save: PathBuf,
        /// Output file, stdout if omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weiqi=info,weiqi_engine=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load_or_create(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    match cli.command {
        Commands::Selfplay {
            moves,
            difficulty,
            seed,
            save,
        } => {
            let difficulty = difficulty_or(difficulty, &config)?;
            let mut engine = Engine::from_config(&config);
            if let Some(seed) = seed {
                engine = engine.with_seed(seed);
            }
            selfplay(&mut engine, moves, difficulty);
            println!("{}", engine.goban());
            print_score(&engine.score());
            if let Some(path) = save {
                write_save(&engine, &path)?;
            }
        }
        Commands::Score { save } => {
            let engine = read_save(&save, &config)?;
            print_score(&engine.score());
        }
        Commands::Hint { save, difficulty } => {
            let difficulty = difficulty_or(difficulty, &config)?;
            let mut engine = read_save(&save, &config)?;
            match engine.hint(difficulty) {
                Some(p) => println!("{} {}", engine.to_move(), point_label(engine.size(), p)),
                None => println!("{} has no legal move", engine.to_move()),
            }
        }
        Commands::Undo { save, count } => {
            let mut engine = read_save(&save, &config)?;
            for i in 0..count {
                engine
                    .undo()
                    .with_context(|| format!("undoing move {} of {count}", i + 1))?;
            }
            write_save(&engine, &save)?;
            println!("{}", engine.goban());
        }
        Commands::Record { save, out } => {
            let engine = read_save(&save, &config)?;
            let text = record::export(&engine, &config);
            match out {
                Some(path) => std::fs::write(&path, text)
                    .with_context(|| format!("writing record to {}", path.display()))?,
                None => print!("{text}"),
            }
        }
    }

    Ok(())
}

fn selfplay(engine: &mut Engine, moves: u32, difficulty: Difficulty) {
    for _ in 0..moves {
        let stone = engine.to_move();
        match engine.play_ai_turn(difficulty) {
            Some((p, captured)) => {
                tracing::debug!(%stone, point = %point_label(engine.size(), p), captured, "played");
            }
            None => {
                tracing::info!(%stone, "no legal move left");
                break;
            }
        }
    }
    tracing::info!(moves = engine.move_count(), "self-play finished");
}

fn difficulty_or(level: Option<u8>, config: &GameConfig) -> Result<Difficulty> {
    match level {
        None => Ok(config.ai_difficulty),
        Some(l) => match Difficulty::from_level(l) {
            Some(d) => Ok(d),
            None => bail!("difficulty must be 1, 2 or 3, got {l}"),
        },
    }
}

fn read_save(path: &Path, config: &GameConfig) -> Result<Engine> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading save file {}", path.display()))?;
    let engine = save::load(&text, config.komi)
        .with_context(|| format!("loading save file {}", path.display()))?;
    tracing::info!(path = %path.display(), moves = engine.move_count(), "game loaded");
    Ok(engine)
}

fn write_save(engine: &Engine, path: &Path) -> Result<()> {
    std::fs::write(path, save::dump(engine))
        .with_context(|| format!("writing save file {}", path.display()))?;
    tracing::info!(path = %path.display(), "game saved");
    Ok(())
}

fn print_score(score: &GameScore) {
    println!(
        "Black: {} stones + {} territory + {} captures = {}",
        score.black.stones,
        score.black.territory,
        score.black.captures,
        score.black_total()
    );
    println!(
        "White: {} stones + {} territory + {} captures + {} komi = {}",
        score.white.stones,
        score.white.territory,
        score.white.captures,
        score.komi,
        score.white_total()
    );
    println!("Result: {}", score.result());
}
