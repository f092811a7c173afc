//! Move policy trait definition.

use std::fmt;

use crate::domain::{Board, Point, Side};
use crate::error::AppError;

/// Errors that can occur while a policy picks a move.
#[derive(Debug)]
pub enum AiError {
    /// No empty cell left to choose from.
    BoardFull,
    /// Policy encountered an internal error.
    Internal(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::BoardFull => write!(f, "no empty cell to play"),
            AiError::Internal(msg) => write!(f, "policy internal error: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(format!("AI error: {err}"))
    }
}

/// Trait for computer move policies.
///
/// Implementations receive the current board and the side to move and must
/// return an empty, in-bounds cell. Skill usage is decided by the session,
/// not the policy; a policy only places stones.
pub trait MovePolicy: Send + Sync {
    /// Choose the next placement for `side`.
    fn choose_move(&self, board: &Board, side: Side) -> Result<Point, AiError>;
}
