//! Catalog client for the items REST API.
//!
//! The client is generic over an HTTP backend so tests can swap in a fake.
//! External code sees `DefaultCatalogClient` through the `CatalogApi` port.

use storefront_core::{ApiError, ApiResult, Item, ItemDraft, ItemId};

use crate::config::{ClientConfig, ResolvedConfig};
use crate::error::HttpResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::url::{build_item_url, build_items_url};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default catalog client using the reqwest HTTP backend.
pub type DefaultCatalogClient = CatalogClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the items API.
///
/// The generic parameter `B` is an implementation detail; use
/// `DefaultCatalogClient::new()`.
pub struct CatalogClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ResolvedConfig,
}

impl DefaultCatalogClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails with `ApiError::Configuration` when the base URL does not
    /// parse or the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let build = || -> HttpResult<Self> {
            let resolved = config.resolve()?;
            let backend = ReqwestBackend::new(&resolved)?;
            Ok(Self {
                backend,
                config: resolved,
            })
        };
        build().map_err(|err| ApiError::Configuration {
            message: err.to_string(),
        })
    }
}

impl<B: HttpBackend> CatalogClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ResolvedConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Base URL item images are resolved against.
    pub fn static_files_url(&self) -> &str {
        &self.config.static_files_url
    }

    pub(crate) async fn fetch_items(&self) -> HttpResult<Vec<Item>> {
        let url = build_items_url(&self.config.base_url);
        self.backend.get_json(&url).await
    }

    pub(crate) async fn fetch_item(&self, id: ItemId) -> HttpResult<Item> {
        let url = build_item_url(&self.config.base_url, id);
        self.backend.get_json(&url).await
    }

    pub(crate) async fn post_item(&self, draft: &ItemDraft) -> HttpResult<Item> {
        let url = build_items_url(&self.config.base_url);
        self.backend.post_json(&url, draft).await
    }

    pub(crate) async fn remove_item(&self, id: ItemId) -> HttpResult<()> {
        let url = build_item_url(&self.config.base_url, id);
        self.backend.delete(&url).await
    }
}
