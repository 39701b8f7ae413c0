use std::fmt;
use std::ops::Deref;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::GoError;
use crate::stone::{EMPTY, Stone};

pub const DEFAULT_SIZE: u8 = 19;

/// Which color, if any, borders an empty region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    /// No bordering stone seen (only possible on a board without stones).
    Undetermined,
    Black,
    White,
    /// Borders stones of both colors.
    Mixed,
}

impl Owner {
    fn observe(self, stone: Stone) -> Self {
        match (self, stone) {
            (Owner::Undetermined, Stone::Black) => Owner::Black,
            (Owner::Undetermined, Stone::White) => Owner::White,
            (Owner::Black, Stone::Black) | (Owner::White, Stone::White) => self,
            _ => Owner::Mixed,
        }
    }

    pub fn stone(self) -> Option<Stone> {
        match self {
            Owner::Black => Some(Stone::Black),
            Owner::White => Some(Stone::White),
            Owner::Undetermined | Owner::Mixed => None,
        }
    }
}

/// A maximal 4-connected set of empty points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub points: Vec<Point>,
    pub owner: Owner,
}

impl Region {
    pub fn size(&self) -> u32 {
        self.points.len() as u32
    }
}

/// The Go board stored as a flat array of cell codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goban {
    board: Vec<i8>,
    size: u8,
}

impl Goban {
    /// Create a goban from an existing board matrix, indexed `board[y][x]`.
    pub fn new(board: Vec<Vec<i8>>) -> Self {
        let rows = board.len();
        let size = u8::try_from(rows)
            .unwrap_or_else(|_| panic!("board matrix has {rows} rows, at most 255 supported"));

        assert!(
            board.iter().all(|row| row.len() == size as usize),
            "malformed board matrix"
        );

        Goban {
            board: board.into_iter().flatten().collect(),
            size,
        }
    }

    /// Create an empty board of `size` x `size` points.
    pub fn with_size(size: u8) -> Self {
        Goban {
            board: vec![EMPTY; size as usize * size as usize],
            size,
        }
    }

    /// Restore a goban from its flat cell array. Returns `None` when the
    /// array length does not match or a cell code is not a stone or empty.
    pub fn from_cells(size: u8, board: Vec<i8>) -> Option<Self> {
        let valid = board.len() == size as usize * size as usize
            && board.iter().all(|&c| c == EMPTY || Stone::from_code(c).is_some());
        valid.then_some(Goban { board, size })
    }

    // -- Accessors --

    pub fn board(&self) -> &[i8] {
        &self.board
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_code(self.board[self.idx(point)])
        } else {
            None
        }
    }

    pub fn on_board(&self, (x, y): Point) -> bool {
        x < self.size && y < self.size
    }

    pub fn is_empty(&self) -> bool {
        self.board.iter().all(|&s| s == EMPTY)
    }

    pub fn count(&self, stone: Stone) -> u32 {
        self.board.iter().filter(|&&c| c == stone.code()).count() as u32
    }

    /// Every point on the board, column by column.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let size = self.size;
        (0..size).flat_map(move |x| (0..size).map(move |y| (x, y)))
    }

    // -- Move legality and capture resolution --

    /// Whether `stone` may be played at `point`. Leaves the board untouched.
    pub fn is_legal(&mut self, point: Point, stone: Stone) -> bool {
        if !self.on_board(point) || self.stone_at(point).is_some() {
            return false;
        }

        let placed = self.provisional(point, stone);
        for n in placed.neighbors(point) {
            if placed.stone_at(n) == Some(stone.opp()) && !placed.has_liberty(n, stone.opp()) {
                return true;
            }
        }
        placed.has_liberty(point, stone)
    }

    /// Play a stone and remove the opponent groups it leaves without
    /// liberties. Returns the number of stones captured.
    pub fn play(&mut self, point: Point, stone: Stone) -> Result<u32, GoError> {
        if !self.on_board(point) {
            return Err(GoError::NotOnBoard);
        }
        if self.stone_at(point).is_some() {
            return Err(GoError::Overwrite);
        }
        if !self.is_legal(point, stone) {
            return Err(GoError::Suicide);
        }

        self.set_stone(point, stone);

        let mut captured = 0;
        for n in self.neighbors(point) {
            if let Some(group) = self.dead_group(n, stone.opp()) {
                for &p in &group {
                    self.clear_stone(p);
                }
                captured += group.len() as u32;
            }
        }

        Ok(captured)
    }

    /// Temporarily place `stone` on an empty point. The point is restored
    /// when the returned guard is dropped.
    pub(crate) fn provisional(&mut self, point: Point, stone: Stone) -> Provisional<'_> {
        let i = self.idx(point);
        let previous = self.board[i];
        self.board[i] = stone.code();
        Provisional {
            goban: self,
            index: i,
            previous,
        }
    }

    // -- Graph algorithms --

    /// Get the 4-connected neighbors that are on the board.
    pub fn neighbors(&self, (x, y): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if x > 0 {
            result.push((x - 1, y));
        }
        if x + 1 < self.size {
            result.push((x + 1, y));
        }
        if y > 0 {
            result.push((x, y - 1));
        }
        if y + 1 < self.size {
            result.push((x, y + 1));
        }
        result
    }

    /// Get the 8-connected neighbors (orthogonal and diagonal) on the board.
    pub fn surrounding(&self, (x, y): Point) -> ArrayVec<Point, 8> {
        let mut result = ArrayVec::new();
        for dx in -1i16..=1 {
            for dy in -1i16..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i16 + dx;
                let ny = y as i16 + dy;
                if (0..self.size as i16).contains(&nx) && (0..self.size as i16).contains(&ny) {
                    result.push((nx as u8, ny as u8));
                }
            }
        }
        result
    }

    /// Flood-fill connected group of same-colored stones.
    pub fn chain(&self, point: Point) -> Vec<Point> {
        let stone = match self.stone_at(point) {
            Some(s) => s,
            None => return Vec::new(),
        };

        let mut visited = vec![false; self.board.len()];
        let mut result = Vec::new();
        let mut stack = vec![point];

        while let Some(p) = stack.pop() {
            let vi = self.idx(p);
            if visited[vi] {
                continue;
            }
            visited[vi] = true;
            result.push(p);
            for n in self.neighbors(p) {
                if self.stone_at(n) == Some(stone) && !visited[self.idx(n)] {
                    stack.push(n);
                }
            }
        }

        result
    }

    /// Does the `stone` group containing `origin` touch an empty point?
    ///
    /// An empty `origin` counts as its own liberty.
    pub fn has_liberty(&self, origin: Point, stone: Stone) -> bool {
        if self.on_board(origin) && self.board[self.idx(origin)] == EMPTY {
            return true;
        }
        self.dead_group(origin, stone).is_none()
    }

    /// The group of `stone` containing `origin`, if that group has no
    /// liberties. The search stops at the first liberty it finds.
    pub fn dead_group(&self, origin: Point, stone: Stone) -> Option<Vec<Point>> {
        if self.stone_at(origin) != Some(stone) {
            return None;
        }

        let mut visited = vec![false; self.board.len()];
        let mut group = Vec::new();
        let mut stack = vec![origin];

        while let Some(p) = stack.pop() {
            let vi = self.idx(p);
            if visited[vi] {
                continue;
            }
            visited[vi] = true;
            group.push(p);
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if self.board[ni] == EMPTY {
                    return None;
                }
                if self.board[ni] == stone.code() && !visited[ni] {
                    stack.push(n);
                }
            }
        }

        Some(group)
    }

    /// Flood-fill the empty region containing `origin`, marking its points
    /// in `visited` and recording which colors border it.
    pub fn flood_region(&self, origin: Point, visited: &mut [bool]) -> Region {
        let mut points = Vec::new();
        let mut owner = Owner::Undetermined;
        let mut stack = vec![origin];

        while let Some(p) = stack.pop() {
            let pi = self.idx(p);
            if visited[pi] {
                continue;
            }
            visited[pi] = true;
            points.push(p);

            for n in self.neighbors(p) {
                match self.stone_at(n) {
                    Some(stone) => owner = owner.observe(stone),
                    None if !visited[self.idx(n)] => stack.push(n),
                    None => {}
                }
            }
        }

        Region { points, owner }
    }

    /// Every empty region on the board.
    pub fn regions(&self) -> Vec<Region> {
        let mut visited = vec![false; self.board.len()];
        let mut regions = Vec::new();
        for p in self.points() {
            if visited[self.idx(p)] || self.stone_at(p).is_some() {
                continue;
            }
            regions.push(self.flood_region(p, &mut visited));
        }
        regions
    }

    // -- Internal helpers --

    #[inline]
    pub(crate) fn idx(&self, (x, y): Point) -> usize {
        y as usize * self.size as usize + x as usize
    }

    fn set_stone(&mut self, point: Point, stone: Stone) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.board[i] = stone.code();
        }
    }

    fn clear_stone(&mut self, point: Point) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.board[i] = EMPTY;
        }
    }
}

impl fmt::Display for Goban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let c = self.stone_at((x, y)).map_or('.', Stone::glyph);
                write!(f, "{c}")?;
                if x + 1 < self.size {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A stone placed for inspection only; dropping the guard removes it.
pub(crate) struct Provisional<'a> {
    goban: &'a mut Goban,
    index: usize,
    previous: i8,
}

impl Deref for Provisional<'_> {
    type Target = Goban;

    fn deref(&self) -> &Goban {
        &*self.goban
    }
}

impl Drop for Provisional<'_> {
    fn drop(&mut self) {
        self.goban.board[self.index] = self.previous;
    }
}
