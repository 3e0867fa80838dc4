//! Cart operations for the storefront facade.
//!
//! Cart operations never fail once the item is known; they return the
//! updated view.

use storefront_core::{Item, ItemId};

use crate::deps::StorefrontDeps;
use crate::error::AppError;
use crate::types::CartView;

/// Cart operations handler.
pub struct CartOps<'a> {
    deps: &'a StorefrontDeps,
}

impl<'a> CartOps<'a> {
    pub const fn new(deps: &'a StorefrontDeps) -> Self {
        Self { deps }
    }

    /// Current cart with totals.
    pub async fn view(&self) -> CartView {
        CartView::from_store(&*self.deps.cart.read().await)
    }

    /// Add a catalog item by ID.
    ///
    /// The item is looked up in the loaded catalog; the cart keeps a
    /// snapshot of it.
    pub async fn add_by_id(&self, id: ItemId) -> Result<CartView, AppError> {
        let item = self
            .deps
            .catalog()
            .item(id)
            .await
            .ok_or(AppError::NotFound { id })?;
        Ok(self.add(item).await)
    }

    /// Add one unit of `item`.
    pub async fn add(&self, item: Item) -> CartView {
        let mut cart = self.deps.cart.write().await;
        cart.add_to_cart(item);
        CartView::from_store(&cart)
    }

    /// Set a line's quantity. Values below 1 leave the cart unchanged.
    pub async fn set_quantity(&self, id: ItemId, quantity: i64) -> CartView {
        let mut cart = self.deps.cart.write().await;
        cart.update_quantity(id, quantity);
        CartView::from_store(&cart)
    }

    pub async fn increment(&self, id: ItemId) -> CartView {
        let mut cart = self.deps.cart.write().await;
        cart.increment(id);
        CartView::from_store(&cart)
    }

    pub async fn decrement(&self, id: ItemId) -> CartView {
        let mut cart = self.deps.cart.write().await;
        cart.decrement(id);
        CartView::from_store(&cart)
    }

    /// Drop a line from the cart.
    pub async fn remove(&self, id: ItemId) -> CartView {
        let mut cart = self.deps.cart.write().await;
        cart.remove_item(id);
        CartView::from_store(&cart)
    }

    /// Empty the cart.
    pub async fn clear(&self) -> CartView {
        let mut cart = self.deps.cart.write().await;
        cart.clear_cart();
        CartView::from_store(&cart)
    }
}
