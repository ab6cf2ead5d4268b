//! Error types for the Dugout API client.

use thiserror::Error;

/// Result type for Dugout client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Dugout API client errors.
///
/// Every way a request can fail — timeout, refused connection, non-2xx
/// status, malformed body — surfaces through this one type, so callers
/// handle a single error class.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network error (connection failed, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API error (non-2xx response, with the server's detail when present)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response shape)
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// HTTP status of a rejected response, when one was received at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            ApiError::Parse(_) => None,
        }
    }
}
