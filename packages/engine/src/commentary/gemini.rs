//! Remote commentator backed by the Gemini generateContent API.
//!
//! Failures never leave this module as errors: every call resolves to
//! either model text or the fixed fallback for that operation.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    prompt, Commentator, MoveContext, OPENING_EMPTY_FALLBACK, OPENING_ERROR_FALLBACK,
    REMARK_EMPTY_FALLBACK, REMARK_ERROR_FALLBACK,
};
use crate::config::CommentaryConfig;
use crate::error::AppError;

/// A stuck commentary request must not outlive the turn by much.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Commentator that calls the configured Gemini model over HTTP.
pub struct GeminiCommentator {
    http: reqwest::Client,
    config: CommentaryConfig,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// First non-blank text part across candidates.
    fn first_text(&self) -> Option<String> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.text.as_deref())
            .map(str::trim)
            .find(|text| !text.is_empty())
            .map(str::to_string)
    }
}

impl GeminiCommentator {
    pub fn new(config: CommentaryConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::config(format!("commentary client: {e}")))?;
        Ok(Self { http, config })
    }

    async fn generate(&self, prompt_text: &str) -> Result<Option<String>, AppError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt_text }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let parsed: GenerateResponse = response.json().await?;
        Ok(parsed.first_text())
    }
}

#[async_trait]
impl Commentator for GeminiCommentator {
    async fn opening(&self) -> String {
        match self.generate(&prompt::opening_prompt()).await {
            Ok(Some(text)) => text,
            Ok(None) => OPENING_EMPTY_FALLBACK.to_string(),
            Err(err) => {
                warn!(error = %err, "commentary opening request failed");
                OPENING_ERROR_FALLBACK.to_string()
            }
        }
    }

    async fn remark(&self, context: &MoveContext) -> String {
        match self.generate(&prompt::remark_prompt(context)).await {
            Ok(Some(text)) => text,
            Ok(None) => REMARK_EMPTY_FALLBACK.to_string(),
            Err(err) => {
                warn!(error = %err, "commentary remark request failed");
                REMARK_ERROR_FALLBACK.to_string()
            }
        }
    }
}
