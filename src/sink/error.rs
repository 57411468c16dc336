//! Error types for decision submission
//!
//! Sink failures stay inside the sink: they are logged, never handed back
//! to the gesture core.

use thiserror::Error;

/// Errors that can occur while talking to the rating service
#[derive(Error, Debug)]
pub enum SinkError {
    /// Transport failure from reqwest (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Server returned {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body did not match any known shape
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SinkError {
    /// True for authentication failures the surrounding app should handle
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

/// Result type alias for sink operations
pub type SinkResult<T> = Result<T, SinkError>;
