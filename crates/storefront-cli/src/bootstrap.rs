//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI: the HTTP catalog client is built here and injected into
//! the `Storefront` facade. Command handlers receive the composed context.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use storefront_app::{Storefront, StorefrontDeps};
use storefront_http::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DefaultCatalogClient};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Base URL of the items API.
    pub api_url: String,
    /// Base URL for item images; `None` means the API URL.
    pub static_url: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            static_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CliConfig {
    /// Build config from parsed arguments (flags already merged with env).
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            api_url: cli.api_url.clone().unwrap_or(defaults.api_url),
            static_url: cli.static_url.clone(),
            timeout: cli
                .timeout_secs
                .map_or(defaults.timeout, Duration::from_secs),
        }
    }

    fn client_config(&self) -> ClientConfig {
        ClientConfig::new()
            .with_base_url(&self.api_url)
            .with_optional_static_files_url(self.static_url.clone())
            .with_timeout(self.timeout)
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The storefront facade.
    pub storefront: Storefront,
    /// Base URL item images are resolved against.
    pub static_files_url: String,
}

impl CliContext {
    /// Access the storefront.
    pub const fn storefront(&self) -> &Storefront {
        &self.storefront
    }

    /// Full URL of an item image, or a placeholder for an empty path.
    pub fn image_url(&self, img: &str) -> String {
        storefront_http::image_url_with_fallback(&self.static_files_url, img, None)
    }
}

/// Bootstrap the CLI application.
///
/// Creates the HTTP client and assembles the storefront around it. No
/// request is sent here; the catalog starts empty.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let client_config = config.client_config();
    let client = DefaultCatalogClient::new(&client_config).map_err(CliError::from)?;
    tracing::debug!(api_url = %config.api_url, "catalog client ready");

    let static_files_url = client.static_files_url().to_string();
    let storefront = Storefront::new(StorefrontDeps::new(Arc::new(client)));

    Ok(CliContext {
        storefront,
        static_files_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_defaults() {
        let cli = Cli::parse_from(["storefront", "--api-url", DEFAULT_BASE_URL, "list"]);
        let config = CliConfig::from_cli(&cli);
        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_overrides() {
        let cli = Cli::parse_from([
            "storefront",
            "--api-url",
            "http://shop.test",
            "--static-url",
            "http://cdn.test",
            "--timeout",
            "3",
            "list",
        ]);
        let config = CliConfig::from_cli(&cli);
        assert_eq!(config.api_url, "http://shop.test");
        assert_eq!(config.static_url.as_deref(), Some("http://cdn.test"));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_bootstrap_resolves_image_urls() {
        let config = CliConfig {
            static_url: Some("http://cdn.test/".to_string()),
            ..CliConfig::default()
        };
        let ctx = bootstrap(&config).unwrap();
        assert_eq!(ctx.image_url("img/bed.jpg"), "http://cdn.test/img/bed.jpg");
        assert!(ctx.image_url("").starts_with("https://placehold.co/"));
    }

    #[test]
    fn test_bootstrap_rejects_bad_url() {
        let config = CliConfig {
            api_url: "not a url".to_string(),
            ..CliConfig::default()
        };
        assert!(bootstrap(&config).is_err());
    }
}
