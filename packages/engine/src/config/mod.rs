//! Environment-driven configuration.

pub mod commentary;

pub use commentary::CommentaryConfig;
