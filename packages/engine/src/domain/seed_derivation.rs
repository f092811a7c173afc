//! RNG seed derivation for deterministic match behavior.
//!
//! A match has one base seed; every randomized context derives its own seed
//! from it so that the same base seed reproduces the same match while
//! different contexts never share a random stream.

use crate::domain::board::Side;

/// Seed for one side's skill deal.
///
/// Unique per (match, side): both sides deal independently, but a fixed
/// match seed fixes both deals.
pub fn derive_deal_seed(match_seed: u64, side: Side) -> u64 {
    match_seed
        .wrapping_add((side.index() as u64 + 1).wrapping_mul(1_000_000))
        .wrapping_add(1)
}

/// Seed for the in-match random stream (skill targeting, pacing).
pub fn derive_effect_seed(match_seed: u64) -> u64 {
    match_seed.wrapping_add(2)
}
