//! Computer opponent module - handles automated move decisions.
//!
//! This module provides:
//! - `MovePolicy` trait for pluggable opponents
//! - `RandomPolicy`: uniform legal placements (seedable for tests)
//! - `HeuristicPolicy`: win/block detection plus positional scoring
//! - a static registry for lookup by name

mod heuristic;
mod random;
pub mod registry;
mod trait_def;

pub use heuristic::HeuristicPolicy;
pub use random::RandomPolicy;
pub use registry::{by_name, registered_policies, PolicyFactory};
pub use trait_def::{AiError, MovePolicy};
