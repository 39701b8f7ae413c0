//! Heuristic move selection.
//!
//! Every legal point is scored by position (corner, side, center, star
//! point), by its neighbors, by the stones it would capture and by the
//! liberties it would have. A move is then drawn at random from the points
//! scoring close to the best; higher difficulty narrows that window.

use std::fmt;

use rand::RngExt;
use rand::rngs::StdRng;
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::Point;
use crate::goban::Goban;
use crate::hoshi;
use crate::stone::Stone;

/// Lines counted as "near the edge" for the corner and side bonuses.
const EDGE_BAND: u8 = 3;

const CORNER_BONUS: i32 = 25;
const SIDE_BONUS: i32 = 15;
const CENTER_BONUS: i32 = 10;
const STAR_POINT_BONUS: i32 = 10;
const FRIEND_BONUS: i32 = 5;
const ENEMY_BONUS: i32 = 3;
const CAPTURE_BONUS: i32 = 40;
const LIBERTY_BONUS: i32 = 3;
const EASY_NOISE: i32 = 20;
const HARD_SHAPE_WEIGHT: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Difficulty {
    Easy = 1,
    #[default]
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }

    /// How far below the best score a point may fall and still be picked.
    pub fn margin(self) -> i32 {
        10 - 3 * self.level() as i32
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Score `point` as a move for `stone`.
///
/// Returns `None` if the point is off the board or occupied. The board is
/// left exactly as it was.
pub fn evaluate(
    goban: &mut Goban,
    point: Point,
    stone: Stone,
    difficulty: Difficulty,
    rng: &mut StdRng,
) -> Option<i32> {
    if !goban.on_board(point) || goban.stone_at(point).is_some() {
        return None;
    }

    let mut score = zone_bonus(goban.size(), point);
    if hoshi::is_star_point(goban.size(), point) {
        score += STAR_POINT_BONUS;
    }

    let mut friends = 0;
    let mut enemies = 0;
    for n in goban.surrounding(point) {
        match goban.stone_at(n) {
            Some(s) if s == stone => {
                friends += 1;
                score += FRIEND_BONUS;
            }
            Some(_) => {
                enemies += 1;
                score += ENEMY_BONUS;
            }
            None => {}
        }
    }

    {
        let placed = goban.provisional(point, stone);

        let mut taken = vec![false; placed.board().len()];
        for n in placed.neighbors(point) {
            if taken[placed.idx(n)] {
                continue;
            }
            if let Some(group) = placed.dead_group(n, stone.opp()) {
                for &p in &group {
                    taken[placed.idx(p)] = true;
                }
                score += CAPTURE_BONUS * group.len() as i32;
            }
        }

        let liberties = placed
            .neighbors(point)
            .iter()
            .filter(|&&n| placed.stone_at(n).is_none())
            .count() as i32;
        score += liberties * LIBERTY_BONUS;
    }

    match difficulty {
        Difficulty::Easy => score += rng.random_range(0..EASY_NOISE),
        Difficulty::Medium => {}
        Difficulty::Hard => score += (friends - enemies) * HARD_SHAPE_WEIGHT,
    }

    Some(score)
}

/// Choose a move for `stone`, or `None` if it has no legal point.
pub fn select_move(
    goban: &mut Goban,
    stone: Stone,
    difficulty: Difficulty,
    rng: &mut StdRng,
) -> Option<Point> {
    let mut candidates = Vec::new();
    let mut best: Option<i32> = None;

    for p in goban.points() {
        if !goban.is_legal(p, stone) {
            continue;
        }
        if let Some(score) = evaluate(goban, p, stone, difficulty, rng) {
            best = Some(best.map_or(score, |b| b.max(score)));
            candidates.push((p, score));
        }
    }

    let best = best?;
    let threshold = best - difficulty.margin();
    let good: Vec<Point> = candidates
        .into_iter()
        .filter(|&(_, score)| score >= threshold)
        .map(|(p, _)| p)
        .collect();

    let choice = (!good.is_empty()).then(|| good[rng.random_range(0..good.len())]);
    tracing::debug!(%stone, %difficulty, best, ?choice, "selected move");
    choice
}

fn zone_bonus(size: u8, (x, y): Point) -> i32 {
    let far = size.saturating_sub(1 + EDGE_BAND);
    let near_x = x <= EDGE_BAND || x >= far;
    let near_y = y <= EDGE_BAND || y >= far;

    if near_x && near_y {
        CORNER_BONUS
    } else if near_x || near_y {
        SIDE_BONUS
    } else {
        let center = (size / 2) as i32;
        let dist = (x as i32 - center).abs() + (y as i32 - center).abs();
        CENTER_BONUS - dist / 2
    }
}
