use serde::{Deserialize, Serialize};

use crate::goban::Goban;
use crate::stone::Stone;
use crate::turn::Turn;

/// Maximum number of undo points kept for one game.
pub const MAX_HISTORY: usize = 500;

/// Captures indexed by stone color.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    pub(crate) fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// One undo point: the move that was played and the board as it stood
/// just before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub(crate) turn: Turn,
    pub(crate) snapshot: Goban,
}

impl HistoryEntry {
    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    pub fn snapshot(&self) -> &Goban {
        &self.snapshot
    }
}

/// Bounded, append-only log of played moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_limit(MAX_HISTORY)
    }

    pub fn with_limit(limit: usize) -> Self {
        History {
            entries: Vec::new(),
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.limit
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn turns(&self) -> impl Iterator<Item = &Turn> {
        self.entries.iter().map(|e| &e.turn)
    }

    /// Capture totals summed over every recorded move.
    pub fn captures(&self) -> Captures {
        let mut captures = Captures::new();
        for turn in self.turns() {
            captures.add(turn.stone, turn.captured);
        }
        captures
    }

    /// Append an undo point. Returns `false` once the log is full; play
    /// continues but the move cannot be undone.
    pub(crate) fn record(&mut self, turn: Turn, snapshot: Goban) -> bool {
        if self.is_full() {
            tracing::warn!(limit = self.limit, "history full, move not recorded");
            return false;
        }
        self.entries.push(HistoryEntry { turn, snapshot });
        true
    }

    pub(crate) fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_get_by_color() {
        let mut c = Captures::new();
        c.add(Stone::Black, 2);
        c.add(Stone::White, 1);
        c.add(Stone::Black, 3);
        assert_eq!(c.get(Stone::Black), 5);
        assert_eq!(c.get(Stone::White), 1);
    }

    #[test]
    fn records_and_pops() {
        let mut h = History::new();
        assert!(h.is_empty());
        assert!(h.record(Turn::play(Stone::Black, (0, 0)), Goban::with_size(3)));
        assert_eq!(h.len(), 1);
        let entry = h.pop().unwrap();
        assert_eq!(entry.turn().pos, (0, 0));
        assert!(entry.snapshot().is_empty());
        assert!(h.pop().is_none());
    }

    #[test]
    fn stops_recording_at_limit() {
        let mut h = History::with_limit(2);
        assert!(h.record(Turn::play(Stone::Black, (0, 0)), Goban::with_size(3)));
        assert!(h.record(Turn::play(Stone::White, (1, 0)), Goban::with_size(3)));
        assert!(h.is_full());
        assert!(!h.record(Turn::play(Stone::Black, (2, 0)), Goban::with_size(3)));
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn captures_are_summed_per_color() {
        let mut h = History::new();
        h.record(Turn::play(Stone::Black, (0, 0)).with_captured(2), Goban::with_size(3));
        h.record(Turn::play(Stone::White, (1, 0)).with_captured(1), Goban::with_size(3));
        h.record(Turn::play(Stone::Black, (2, 0)).with_captured(4), Goban::with_size(3));
        let c = h.captures();
        assert_eq!(c.black, 6);
        assert_eq!(c.white, 1);
    }
}
