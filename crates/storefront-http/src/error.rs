//! Internal error types for catalog HTTP operations.
//!
//! These errors are internal to `storefront-http` and are mapped to core
//! port errors at the boundary.

use thiserror::Error;

/// Result type alias for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors from talking to the items backend.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The backend answered with a non-success status.
    #[error("request to {url} failed with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl HttpError {
    /// Whether the backend reported the resource as missing.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}
