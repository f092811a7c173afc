//! Shared types for the arena.

use clap::ValueEnum;

use engine::{HeuristicPolicy, RandomPolicy};

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    Json,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum MetricsLevel {
    Basic,
    Detailed,
}

/// Which registered move policy a seat plays.
#[derive(Debug, Clone, ValueEnum)]
pub enum PolicyChoice {
    Heuristic,
    Random,
}

impl PolicyChoice {
    /// Name as registered in the policy factory list.
    pub fn registry_name(&self) -> &'static str {
        match self {
            PolicyChoice::Heuristic => HeuristicPolicy::NAME,
            PolicyChoice::Random => RandomPolicy::NAME,
        }
    }
}
