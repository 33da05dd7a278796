/*
[INPUT]:  Error sources (HTTP transport, API rejections, schema decoding)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the taskpick adapter
#[derive(Error, Debug)]
pub enum TaskpickError {
    /// HTTP request failed (connection, timeout, non-HTTP failure)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server rejected the request with an application-level error message
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected schema
    /// (missing field, wrong type, non-JSON payload)
    #[error("Response schema mismatch: {0}")]
    Decode(String),

    /// Request body serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TaskpickError {
    /// Check whether this is an application-level rejection
    /// (the server answered, but refused the request)
    pub fn is_rejection(&self) -> bool {
        matches!(self, TaskpickError::Api { .. })
    }

    /// The server's error message, for rejection errors
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            TaskpickError::Api { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        TaskpickError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for taskpick operations
pub type Result<T> = std::result::Result<T, TaskpickError>;
