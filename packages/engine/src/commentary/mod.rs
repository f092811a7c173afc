//! Narrative commentary boundary.
//!
//! Purely cosmetic: nothing returned here feeds back into match state.
//! Both operations resolve to a usable string no matter what fails
//! underneath, so callers never retry and never propagate.

mod canned;
mod gemini;
mod prompt;

pub use canned::CannedCommentator;
pub use gemini::GeminiCommentator;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::config::CommentaryConfig;
use crate::domain::{Point, Side};

/// Shown when the remark request errors out.
pub const REMARK_ERROR_FALLBACK: &str = "（系统繁忙，解说员去吃盒饭了...）";
/// Shown when the remark response carries no text.
pub const REMARK_EMPTY_FALLBACK: &str = "......";
/// Shown when the opening response carries no text.
pub const OPENING_EMPTY_FALLBACK: &str = "来者何人？报上名来！";
/// Shown when the opening request errors out.
pub const OPENING_ERROR_FALLBACK: &str = "准备好了吗？";

/// Everything the commentator may look at for one move.
#[derive(Debug, Clone)]
pub struct MoveContext {
    pub at: Point,
    pub side: Side,
    /// 5x5 window around the move, from [`crate::domain::Board::excerpt`].
    pub excerpt: String,
    /// Whether the move ended the game.
    pub win: bool,
}

/// Source of narrative text.
///
/// Implementations swallow their own failures and return a fallback
/// string instead; the session posts whatever comes back.
#[async_trait]
pub trait Commentator: Send + Sync {
    /// Greeting posted when a new game starts.
    async fn opening(&self) -> String;

    /// One-liner about the move that was just played.
    async fn remark(&self, context: &MoveContext) -> String;
}

/// Build the commentator for a session from the environment.
///
/// With `GEMINI_API_KEY` set the remote client is used; otherwise, or when
/// the client cannot be constructed, the canned one takes over.
pub fn commentator_from_env() -> Arc<dyn Commentator> {
    let Some(config) = CommentaryConfig::from_env() else {
        return Arc::new(CannedCommentator::default());
    };
    match GeminiCommentator::new(config) {
        Ok(remote) => Arc::new(remote),
        Err(err) => {
            warn!(error = %err, "remote commentator unavailable, using canned lines");
            Arc::new(CannedCommentator::default())
        }
    }
}
