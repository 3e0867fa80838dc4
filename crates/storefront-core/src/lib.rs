//! Core domain types, stores and port definitions for the storefront.
//!
//! The crate holds the client-side state core: the cart store, the catalog
//! store with its pending/fulfilled/rejected lifecycle, and the aggregates
//! derived from cart state. It performs no I/O of its own; the backend is
//! reached through the [`CatalogApi`] port.
//!
//! # Layout
//!
//! ```text
//! domain/    Item, CartLine, drafts, form records
//! ports/     CatalogApi trait + ApiError
//! store/     CartStore, CatalogState transitions
//! services/  CatalogService (async lifecycle), checkout
//! pricing    line totals, subtotal, shipping, total, item count
//! search     catalog filtering
//! ```

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod pricing;
pub mod search;
pub mod services;
pub mod store;

// Re-export commonly used types for convenience
pub use domain::{
    CartLine, FormErrors, Item, ItemDraft, ItemField, ItemForm, ItemId, ShippingDetails,
    ShippingField,
};
pub use ports::{ApiError, ApiResult, CatalogApi};
pub use pricing::{
    CartSummary, SHIPPING_COST, format_money, item_count, line_total, shipping_cost, subtotal,
    total,
};
pub use search::{SearchResults, filter_items};
pub use services::{CatalogService, CheckoutError, OrderReceipt, checkout};
pub use store::{
    CartStore, CatalogChange, CatalogOp, CatalogState, CatalogStatus, InvalidCart, Settlement,
};

// Silence unused dev-dependency warnings
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tokio_test as _;
