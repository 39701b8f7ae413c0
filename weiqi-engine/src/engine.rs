use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::ai::{self, Difficulty};
use crate::config::GameConfig;
use crate::error::GoError;
use crate::goban::{DEFAULT_SIZE, Goban};
use crate::history::{Captures, History, MAX_HISTORY};
use crate::save::SaveError;
use crate::stone::Stone;
use crate::territory::{self, DEFAULT_KOMI, GameScore};
use crate::turn::Turn;

/// Everything needed to rebuild an `Engine`: the live position plus the
/// recorded moves. This is what save files and JSON snapshots carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub size: u8,
    pub board: Vec<i8>,
    pub to_move: Stone,
    pub captures: Captures,
    pub move_count: u32,
    pub history: Vec<Turn>,
}

/// A game in progress: the board, whose turn it is, prisoners, and the
/// undo log.
#[derive(Debug)]
pub struct Engine {
    goban: Goban,
    to_move: Stone,
    captures: Captures,
    move_count: u32,
    last_move: Option<Point>,
    last_capture_count: u32,
    history: History,
    komi: f64,
    rng: StdRng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl Engine {
    pub fn new(size: u8) -> Self {
        Self::create(size, DEFAULT_KOMI)
    }

    pub fn with_komi(size: u8, komi: f64) -> Self {
        Self::create(size, komi)
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::create(config.board_size, config.komi)
    }

    /// Replace the random source used for move selection with a seeded one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    fn create(size: u8, komi: f64) -> Self {
        Engine {
            goban: Goban::with_size(size),
            to_move: Stone::Black,
            captures: Captures::new(),
            move_count: 0,
            last_move: None,
            last_capture_count: 0,
            history: History::new(),
            komi,
            rng: entropy_rng(),
        }
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.goban.size()
    }

    pub fn goban(&self) -> &Goban {
        &self.goban
    }

    pub fn board(&self) -> &[i8] {
        self.goban.board()
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.goban.stone_at(point)
    }

    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn stone_captures(&self, stone: Stone) -> u32 {
        self.captures.get(stone)
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn last_move(&self) -> Option<Point> {
        self.last_move
    }

    /// Stones taken by the most recent move.
    pub fn last_capture_count(&self) -> u32 {
        self.last_capture_count
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn komi(&self) -> f64 {
        self.komi
    }

    pub fn set_komi(&mut self, komi: f64) {
        self.komi = komi;
    }

    // -- Game actions --

    /// Whether `stone` may be played at `point`. The board is unchanged.
    pub fn is_legal(&mut self, point: Point, stone: Stone) -> bool {
        self.goban.is_legal(point, stone)
    }

    /// Play `stone` at `point` and return the number of stones it captured.
    /// An illegal move changes nothing and returns 0.
    pub fn apply_move(&mut self, point: Point, stone: Stone) -> u32 {
        match self.try_play(point, stone) {
            Ok(captured) => captured,
            Err(e) => {
                tracing::debug!(?point, %stone, "move rejected: {e}");
                0
            }
        }
    }

    /// Play `stone` at `point`, reporting why the move was refused if it was.
    pub fn try_play(&mut self, point: Point, stone: Stone) -> Result<u32, GoError> {
        let snapshot = self.goban.clone();
        let captured = self.goban.play(point, stone)?;

        self.history
            .record(Turn::play(stone, point).with_captured(captured), snapshot);
        self.captures.add(stone, captured);
        self.last_capture_count = captured;
        self.last_move = Some(point);
        self.move_count += 1;
        self.to_move = stone.opp();

        tracing::debug!(?point, %stone, captured, move_count = self.move_count, "move applied");
        Ok(captured)
    }

    /// Take back the most recent recorded move.
    pub fn undo(&mut self) -> Result<(), GoError> {
        let entry = self.history.pop().ok_or(GoError::NoHistory)?;

        self.goban = entry.snapshot;
        self.to_move = entry.turn.stone;
        self.move_count = self.move_count.saturating_sub(1);
        self.captures = self.history.captures();
        self.last_move = self.history.last().map(|e| e.turn().pos);
        self.last_capture_count = self.history.last().map_or(0, |e| e.turn().captured);

        tracing::debug!(undone = ?entry.turn.pos, move_count = self.move_count, "move undone");
        Ok(())
    }

    /// Score the current position.
    pub fn score(&self) -> GameScore {
        territory::score(&self.goban, &self.captures, self.komi)
    }

    pub fn ownership(&self) -> Vec<Option<Stone>> {
        territory::ownership(&self.goban)
    }

    /// Pick a move for `stone` without playing it.
    pub fn select_move(&mut self, stone: Stone, difficulty: Difficulty) -> Option<Point> {
        ai::select_move(&mut self.goban, stone, difficulty, &mut self.rng)
    }

    /// Suggest a move for the side to play.
    pub fn hint(&mut self, difficulty: Difficulty) -> Option<Point> {
        self.select_move(self.to_move, difficulty)
    }

    /// Let the computer play for the side to move. Returns the point played
    /// and the stones it captured, or `None` if there is no legal move.
    pub fn play_ai_turn(&mut self, difficulty: Difficulty) -> Option<(Point, u32)> {
        let stone = self.to_move;
        let point = self.select_move(stone, difficulty)?;
        self.try_play(point, stone).ok().map(|captured| (point, captured))
    }

    // -- Serialization --

    pub fn game_state(&self) -> GameState {
        GameState {
            size: self.goban.size(),
            board: self.goban.board().to_vec(),
            to_move: self.to_move,
            captures: self.captures.clone(),
            move_count: self.move_count,
            history: self.history.turns().copied().collect(),
        }
    }

    /// Rebuild an engine from a saved state.
    ///
    /// The undo snapshots are regenerated by replaying the recorded moves on
    /// an empty board; every move must be legal and capture what was
    /// recorded. A log covering the whole game must end on the saved board
    /// and agree with the saved captures and turn. A shorter log is only
    /// accepted when it is full. No group on the saved board may be without
    /// a liberty.
    pub fn from_game_state(state: GameState, komi: f64) -> Result<Self, SaveError> {
        Self::restore(state, komi, MAX_HISTORY)
    }

    fn restore(state: GameState, komi: f64, limit: usize) -> Result<Self, SaveError> {
        let mut history = History::with_limit(limit);
        let recorded = state.history.len();
        if recorded > limit {
            return Err(SaveError::HistoryTooLong {
                len: recorded,
                limit,
            });
        }

        let mut replay = Goban::with_size(state.size);
        for (index, turn) in state.history.iter().enumerate() {
            let snapshot = replay.clone();
            let captured = replay
                .play(turn.pos, turn.stone)
                .map_err(|reason| SaveError::IllegalMove { index, reason })?;
            if captured != turn.captured {
                return Err(SaveError::CaptureMismatch {
                    index,
                    recorded: turn.captured,
                    replayed: captured,
                });
            }
            history.record(*turn, snapshot);
        }

        let goban = Goban::from_cells(state.size, state.board).ok_or(SaveError::InvalidBoard)?;
        let last = state.history.last();

        if recorded as u64 == state.move_count as u64 {
            if goban != replay {
                return Err(SaveError::BoardMismatch);
            }
            if state.captures != history.captures() {
                return Err(SaveError::CapturesMismatch);
            }
            let expected = last.map_or(Stone::Black, |t| t.stone.opp());
            if state.to_move != expected {
                return Err(SaveError::TurnMismatch {
                    saved: state.to_move,
                    expected,
                });
            }
        } else if recorded != limit || (state.move_count as u64) < limit as u64 {
            return Err(SaveError::MoveCountMismatch {
                recorded,
                move_count: state.move_count,
            });
        }

        if let Some(point) = goban
            .points()
            .find(|&p| goban.stone_at(p).is_some_and(|s| !goban.has_liberty(p, s)))
        {
            return Err(SaveError::DeadGroup(point));
        }

        tracing::debug!(
            size = state.size,
            moves = state.move_count,
            recorded,
            "game state restored"
        );

        Ok(Engine {
            goban,
            to_move: state.to_move,
            captures: state.captures,
            move_count: state.move_count,
            last_move: last.map(|t| t.pos),
            last_capture_count: last.map_or(0, |t| t.captured),
            history,
            komi,
            rng: entropy_rng(),
        })
    }
}

fn entropy_rng() -> StdRng {
    StdRng::seed_from_u64(rand::rng().random())
}
