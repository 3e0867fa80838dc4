//! Checkout operations for the storefront facade.

use storefront_core::{OrderReceipt, ShippingDetails, checkout};

use crate::deps::StorefrontDeps;
use crate::error::AppError;

/// Checkout operations handler.
pub struct CheckoutOps<'a> {
    deps: &'a StorefrontDeps,
}

impl<'a> CheckoutOps<'a> {
    pub const fn new(deps: &'a StorefrontDeps) -> Self {
        Self { deps }
    }

    /// Place the order. The cart is cleared only on success.
    pub async fn place_order(&self, details: &ShippingDetails) -> Result<OrderReceipt, AppError> {
        let mut cart = self.deps.cart.write().await;
        Ok(checkout(&mut cart, details)?)
    }
}
