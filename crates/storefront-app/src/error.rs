//! Semantic error types for storefront operations.
//!
//! Front-ends map `AppError` to whatever they show the user.

use std::fmt;

use storefront_core::{ApiError, CheckoutError, FormErrors, ItemField, ItemId, Settlement};

/// Semantic errors for storefront operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The item is neither in the loaded catalog nor on the server.
    NotFound {
        /// Identifier that was not found.
        id: ItemId,
    },

    /// Form input failed validation; nothing was sent.
    ValidationFailed(String),

    /// Checkout attempted with an empty cart.
    EmptyCart,

    /// A backend operation was rejected. Carries the message the catalog
    /// recorded.
    Rejected(String),

    /// The backend failed outside the catalog lifecycle.
    Backend(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { .. } => f.write_str("Item not found"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::EmptyCart => f.write_str("No items to checkout"),
            Self::Rejected(msg) | Self::Backend(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Turn a settlement into a result.
    pub fn from_settlement(settlement: Settlement) -> Result<(), Self> {
        match settlement {
            Settlement::Fulfilled => Ok(()),
            Settlement::Rejected { message } => Err(Self::Rejected(message)),
        }
    }
}

// ============================================================================
// Conversions from core errors
// ============================================================================

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound { id } => Self::NotFound { id },
            other => Self::Backend(other.to_string()),
        }
    }
}

impl From<FormErrors<ItemField>> for AppError {
    fn from(errors: FormErrors<ItemField>) -> Self {
        Self::ValidationFailed(errors.to_string())
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::EmptyCart => Self::EmptyCart,
            CheckoutError::InvalidDetails(errors) => Self::ValidationFailed(errors.to_string()),
        }
    }
}
