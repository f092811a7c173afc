#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod commentary;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod telemetry;


// Re-exports for public API
pub use ai::{AiError, HeuristicPolicy, MovePolicy, RandomPolicy};
pub use commentary::{
    commentator_from_env, CannedCommentator, Commentator, GeminiCommentator, MoveContext,
};
pub use config::CommentaryConfig;
pub use domain::{
    Board, MatchSnapshot, MatchState, MatchStatus, Point, Side, SkillKind, BOARD_SIZE,
};
pub use error::AppError;
pub use services::{MatchSession, SessionConfig, SessionEvent, COMPUTER, HUMAN};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
