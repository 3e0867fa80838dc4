//! Dependency injection for `Storefront`.

use std::sync::Arc;

use storefront_core::{CartStore, CatalogApi, CatalogService};
use tokio::sync::RwLock;

/// Dependencies required to construct a `Storefront`.
///
/// Fields are private to enforce construction via `StorefrontDeps::new()`.
///
/// # Example
///
/// ```ignore
/// let deps = StorefrontDeps::new(Arc::new(client));
/// let storefront = Storefront::new(deps);
/// ```
pub struct StorefrontDeps {
    /// Catalog state plus the backend it talks to.
    pub(crate) catalog: CatalogService,
    /// Cart lines for this session.
    pub(crate) cart: Arc<RwLock<CartStore>>,
}

impl StorefrontDeps {
    /// Build the dependencies around a backend implementation.
    ///
    /// The cart starts empty and the catalog starts idle.
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            catalog: CatalogService::new(api),
            cart: Arc::new(RwLock::new(CartStore::new())),
        }
    }

    /// Access the catalog service.
    pub const fn catalog(&self) -> &CatalogService {
        &self.catalog
    }
}
