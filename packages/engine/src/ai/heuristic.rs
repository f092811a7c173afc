//! Heuristic - the default computer opponent.
//!
//! Move selection, in priority order:
//! 1. Win now: first empty cell (row-major) that completes five in a row.
//! 2. Block: first empty cell that would let the opponent win next.
//! 3. Positional score over every empty cell, then a uniform pick among the
//!    top candidates so play stays non-repetitive between matches.
//!
//! The score favors staying near the center and clustering: each own stone
//! in the 8-neighborhood outweighs each opponent stone there, which makes
//! the policy build lines first and shadow the opponent second.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, MovePolicy};
use crate::domain::{find_winning_move, Board, Point, Side};

/// Center cell, the positional anchor and the full-board fallback.
const CENTER: Point = Point::new(7, 7);

/// Candidates kept for the randomized tie-break.
const TOP_CANDIDATES: usize = 5;

/// Scored, randomized-tie-break policy.
pub struct HeuristicPolicy {
    rng: Mutex<StdRng>,
}

impl HeuristicPolicy {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    /// Create a new `HeuristicPolicy`.
    ///
    /// The seed only drives the tie-break among top candidates; steps 1 and
    /// 2 are deterministic regardless.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            StdRng::seed_from_u64(s)
        } else {
            StdRng::from_os_rng()
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Positional desirability of `at` for `side`. Higher is better.
    fn positional_score(board: &Board, at: Point, side: Side) -> i32 {
        let center_pull = 14
            - (at.x as i32 - CENTER.x as i32).abs()
            - (at.y as i32 - CENTER.y as i32).abs();
        let own = board.neighbor_count(at, side) as i32;
        let opponent = board.neighbor_count(at, side.opponent()) as i32;
        center_pull + 10 * opponent + 12 * own
    }

    /// The tie-break pool: empty cells with the highest positional scores,
    /// at most [`TOP_CANDIDATES`] of them, best first. Ties keep row-major
    /// order via the stable sort.
    fn top_candidates(board: &Board, side: Side) -> Vec<Point> {
        let mut scored: Vec<(Point, i32)> = board
            .empty_points()
            .into_iter()
            .map(|at| (at, Self::positional_score(board, at, side)))
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored
            .into_iter()
            .take(TOP_CANDIDATES)
            .map(|(at, _)| at)
            .collect()
    }
}

impl MovePolicy for HeuristicPolicy {
    fn choose_move(&self, board: &Board, side: Side) -> Result<Point, AiError> {
        if let Some(at) = find_winning_move(board, side) {
            return Ok(at);
        }
        if let Some(at) = find_winning_move(board, side.opponent()) {
            return Ok(at);
        }

        let candidates = Self::top_candidates(board, side);
        if candidates.is_empty() {
            // The session treats a full board as a draw before asking; this
            // keeps the policy total anyway.
            return Ok(CENTER);
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        candidates
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("failed to choose a candidate".into()))
    }
}
