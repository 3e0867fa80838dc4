//! Error types for catalog port operations.

use thiserror::Error;

use crate::domain::ItemId;

/// Errors from catalog backend operations.
///
/// These are domain-level errors that the stores can record.
/// Implementation-specific errors (HTTP, JSON) are mapped to these by the
/// adapter. The display text is what ends up in `CatalogState` on rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered 404 for an item.
    #[error("Item not found")]
    NotFound {
        /// The item ID that wasn't found
        id: ItemId,
    },

    /// The backend answered with a non-success status other than 404.
    #[error("Request failed with status code {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// The request never produced a response.
    #[error("{message}")]
    Network {
        /// Description of the transport failure
        message: String,
    },

    /// The request did not complete within the transport timeout.
    #[error("timeout of {timeout_ms}ms exceeded")]
    Timeout {
        /// Configured timeout in milliseconds
        timeout_ms: u64,
    },

    /// The backend answered with a body we could not decode.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The client is misconfigured (bad base URL, ...).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl ApiError {
    /// Shorthand for a transport failure.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Whether this is the distinct "Item not found" case.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for catalog port operations.
pub type ApiResult<T> = Result<T, ApiError>;
