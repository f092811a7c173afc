//! Random policy - places on a uniformly random empty cell.
//!
//! This module provides [`RandomPolicy`], the reference implementation of
//! the [`MovePolicy`](super::MovePolicy) trait. It demonstrates the
//! patterns custom policies should follow:
//! - Thread-safe interior mutability using [`std::sync::Mutex`]
//! - Deterministic behavior via optional seeding
//! - Proper error handling without panics

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, MovePolicy};
use crate::domain::{Board, Point, Side};

/// Policy that plays a random legal placement.
///
/// Chooses uniformly among the board's empty cells. Useful as a baseline
/// opponent in simulations and as the weakest conformance fixture.
pub struct RandomPolicy {
    /// Wrapped in `Mutex` for interior mutability since [`MovePolicy`]
    /// methods take `&self` but the RNG needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomPolicy {
    pub const NAME: &'static str = "RandomPolicy";
    pub const VERSION: &'static str = "1.0.0";

    /// Create a new `RandomPolicy`.
    ///
    /// * `Some(seed)` - reproducible move sequence, for tests
    /// * `None` - system entropy
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
}

impl MovePolicy for RandomPolicy {
    fn choose_move(&self, board: &Board, side: Side) -> Result<Point, AiError> {
        let _ = side;
        let spots = board.empty_points();
        if spots.is_empty() {
            return Err(AiError::BoardFull);
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        spots
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("failed to choose a random cell".into()))
    }
}
