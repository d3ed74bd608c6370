//! Completion client error types

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while requesting a completion
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No completion client configured")]
    NotConfigured,
}

impl LlmError {
    /// Whether the remote service was reached and answered.
    pub fn is_api_error(&self) -> bool {
        matches!(self, LlmError::ApiError { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
