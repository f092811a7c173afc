//! Commentary client configuration.
//!
//! Loaded from the environment:
//! - `GEMINI_API_KEY` - required; absent or blank disables the remote client
//! - `GEMINI_MODEL` - optional model override
//! - `GEMINI_BASE_URL` - optional endpoint override, mainly for tests

use std::env;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Connection settings for the remote commentator.
#[derive(Debug, Clone)]
pub struct CommentaryConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl CommentaryConfig {
    /// Load from the environment.
    ///
    /// Returns `None` when no API key is set; the session then runs with
    /// the canned commentator instead of the remote one.
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("GEMINI_API_KEY").ok()?;
        let api_key = api_key.trim().to_string();
        if api_key.is_empty() {
            return None;
        }

        Some(Self {
            api_key,
            model: var_or("GEMINI_MODEL", DEFAULT_MODEL),
            base_url: var_or("GEMINI_BASE_URL", DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}
