//! Storefront - the application context facade.
//!
//! Front-ends construct one `Storefront` at start-up and route every user
//! action through it. Operations are delegated to the ops modules.

use storefront_core::{Item, ItemForm, ItemId, OrderReceipt, ShippingDetails};

use crate::cart::CartOps;
use crate::catalog::CatalogOps;
use crate::checkout::CheckoutOps;
use crate::deps::StorefrontDeps;
use crate::error::AppError;
use crate::types::{CartView, CatalogView, ItemView};

/// Unified storefront facade.
///
/// # Construction
///
/// ```ignore
/// let deps = StorefrontDeps::new(Arc::new(client));
/// let storefront = Storefront::new(deps);
/// ```
pub struct Storefront {
    deps: StorefrontDeps,
}

impl Storefront {
    /// Create a storefront with the provided dependencies.
    pub const fn new(deps: StorefrontDeps) -> Self {
        Self { deps }
    }

    // Accessors for ops modules
    const fn catalog_ops(&self) -> CatalogOps<'_> {
        CatalogOps::new(&self.deps)
    }

    const fn cart_ops(&self) -> CartOps<'_> {
        CartOps::new(&self.deps)
    }

    const fn checkout_ops(&self) -> CheckoutOps<'_> {
        CheckoutOps::new(&self.deps)
    }

    // =========================================================================
    // Catalog operations
    // =========================================================================

    /// Current catalog without contacting the backend.
    pub async fn catalog(&self) -> CatalogView {
        self.catalog_ops().view().await
    }

    /// Reload items from the backend.
    pub async fn refresh_catalog(&self) -> Result<CatalogView, AppError> {
        self.catalog_ops().refresh().await
    }

    /// Catalog filtered by name or price.
    pub async fn search(&self, term: &str) -> CatalogView {
        self.catalog_ops().search(term).await
    }

    /// Fetch one item from the backend.
    pub async fn get_item(&self, id: ItemId) -> Result<ItemView, AppError> {
        self.catalog_ops().get(id).await
    }

    /// Submit the add-item form.
    pub async fn create_item(&self, form: &mut ItemForm) -> Result<(), AppError> {
        self.catalog_ops().create(form).await
    }

    /// Delete an item.
    pub async fn delete_item(&self, id: ItemId) -> Result<(), AppError> {
        self.catalog_ops().delete(id).await
    }

    /// Dismiss the catalog error.
    pub async fn clear_catalog_error(&self) {
        self.catalog_ops().clear_error().await;
    }

    // =========================================================================
    // Cart operations
    // =========================================================================

    pub async fn cart(&self) -> CartView {
        self.cart_ops().view().await
    }

    /// Add a loaded catalog item to the cart.
    pub async fn add_to_cart(&self, id: ItemId) -> Result<CartView, AppError> {
        self.cart_ops().add_by_id(id).await
    }

    /// Add an item the caller already holds.
    pub async fn add_item_to_cart(&self, item: Item) -> CartView {
        self.cart_ops().add(item).await
    }

    pub async fn update_quantity(&self, id: ItemId, quantity: i64) -> CartView {
        self.cart_ops().set_quantity(id, quantity).await
    }

    pub async fn increment_quantity(&self, id: ItemId) -> CartView {
        self.cart_ops().increment(id).await
    }

    pub async fn decrement_quantity(&self, id: ItemId) -> CartView {
        self.cart_ops().decrement(id).await
    }

    pub async fn remove_from_cart(&self, id: ItemId) -> CartView {
        self.cart_ops().remove(id).await
    }

    pub async fn clear_cart(&self) -> CartView {
        self.cart_ops().clear().await
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Place an order for the cart contents.
    pub async fn checkout(&self, details: &ShippingDetails) -> Result<OrderReceipt, AppError> {
        self.checkout_ops().place_order(details).await
    }
}
