use thiserror::Error;

use crate::domain::DomainError;

/// Application-level error for everything above the pure domain.
///
/// Domain rejections keep their machine-readable code so observers can show
/// a stable message per case; infrastructure failures collapse into the
/// internal/config/commentary buckets.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Commentary error: {detail}")]
    Commentary { detail: String },
}

impl AppError {
    /// Stable error code for logs and observers.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. } => code,
            AppError::Internal { .. } => "INTERNAL",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Commentary { .. } => "COMMENTARY_ERROR",
        }
    }

    pub fn invalid(code: &'static str, detail: String) -> Self {
        Self::Validation { code, detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn commentary(detail: String) -> Self {
        Self::Commentary { detail }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let code = match &err {
            DomainError::NotPlaying => "NOT_PLAYING",
            DomainError::OutOfTurn => "OUT_OF_TURN",
            DomainError::OutOfBounds { .. } => "OUT_OF_BOUNDS",
            DomainError::CellOccupied { .. } => "CELL_OCCUPIED",
            DomainError::SkillNotHeld => "SKILL_NOT_HELD",
            DomainError::SkillOnCooldown { .. } => "SKILL_ON_COOLDOWN",
            DomainError::Other(_) => return AppError::internal(err.to_string()),
        };
        AppError::invalid(code, err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::commentary(format!("http client error: {e}"))
    }
}
