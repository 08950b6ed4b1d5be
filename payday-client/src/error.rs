//! Client error types

use thiserror::Error;

/// Client error type
///
/// Everything is "request failed" from the caller's point of view; the two
/// variants only preserve whether a status code exists to report.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure, or the response body was not valid JSON
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("request failed: status {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// HTTP status code, when the server got far enough to send one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            ApiError::Status { status, .. } => Some(*status),
        }
    }
}

/// Result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;
