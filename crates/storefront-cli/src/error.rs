//! CLI-specific error types and mappings.
//!
//! This module maps `AppError` to exit codes and user-facing messages.

use storefront_app::AppError;
use storefront_core::ApiError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Storefront operation failed.
    #[error("{0}")]
    App(String),

    /// Invalid input (arguments or form fields).
    #[error("Invalid input: {0}")]
    Arguments(String),

    /// The items API could not serve the request.
    #[error("{0}")]
    Backend(String),

    /// IO error (reading stdin, writing stdout).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::App(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Backend(_) => 69,  // EX_UNAVAILABLE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<AppError> for CliError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::ValidationFailed(msg) => Self::Arguments(msg),
            AppError::Rejected(msg) | AppError::Backend(msg) => Self::Backend(msg),
            other @ (AppError::NotFound { .. } | AppError::EmptyCart) => {
                Self::App(other.to_string())
            }
        }
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Configuration { message } => Self::Config(message),
            other => Self::Backend(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::App("x".into()).exit_code(), 1);
        assert_eq!(CliError::Arguments("x".into()).exit_code(), 2);
        assert_eq!(CliError::Backend("x".into()).exit_code(), 69);
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
    }

    #[test]
    fn test_app_error_mapping() {
        let err = CliError::from(AppError::Rejected("Item not found".into()));
        assert_eq!(err.to_string(), "Item not found");
        assert_eq!(err.exit_code(), 69);

        let err = CliError::from(AppError::ValidationFailed("name: Item name is required".into()));
        assert_eq!(err.exit_code(), 2);

        let err = CliError::from(AppError::EmptyCart);
        assert_eq!(err.to_string(), "No items to checkout");
    }

    #[test]
    fn test_configuration_error_mapping() {
        let err = CliError::from(ApiError::Configuration {
            message: "relative URL without a base".into(),
        });
        assert_eq!(err.exit_code(), 78);
    }
}
