//! Public configuration for the catalog client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

use url::Url;

use crate::error::HttpResult;

/// Default backend address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the catalog client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use storefront_http::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_base_url("http://shop.internal:8080")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the items API
    pub(crate) base_url: String,
    /// Base URL images are served from; falls back to `base_url`
    pub(crate) static_files_url: Option<String>,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            static_files_url: None,
            user_agent: concat!("storefront-http/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the items API.
    ///
    /// Defaults to `http://localhost:3000`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the base URL for item images.
    #[must_use]
    pub fn with_static_files_url(mut self, url: impl Into<String>) -> Self {
        self.static_files_url = Some(url.into());
        self
    }

    /// Set an optional static files URL.
    #[must_use]
    pub fn with_optional_static_files_url(mut self, url: Option<String>) -> Self {
        self.static_files_url = url;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL images are resolved against.
    #[must_use]
    pub fn static_files_url(&self) -> &str {
        self.static_files_url.as_deref().unwrap_or(&self.base_url)
    }

    /// Validate and convert into the internal configuration.
    pub(crate) fn resolve(&self) -> HttpResult<ResolvedConfig> {
        Ok(ResolvedConfig {
            base_url: Url::parse(&self.base_url)?,
            static_files_url: self.static_files_url().trim_end_matches('/').to_string(),
            user_agent: self.user_agent.clone(),
            timeout: self.timeout,
        })
    }
}

/// Validated configuration used by the client and backend.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
    pub base_url: Url,
    pub static_files_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl ResolvedConfig {
    #[allow(clippy::cast_possible_truncation)] // Timeouts never approach u64::MAX ms
    pub const fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }
}
