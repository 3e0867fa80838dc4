//! Application context for storefront front-ends.
//!
//! This crate provides `Storefront`, the object a UI constructs once at
//! start-up. It owns the cart store and the catalog service and exposes
//! view DTOs that are ready to render.
//!
//! # Architecture
//!
//! ```text
//! Front-ends:    storefront-cli   (other UIs)
//!                      ↓              ↓
//! Facade:              └─ storefront-app ─┘
//!                          Storefront
//!                              ↓
//! Core:                 storefront-core  ←  storefront-http
//! ```
//!
//! # Rules
//!
//! 1. **No adapter dependencies** - the backend arrives as `Arc<dyn CatalogApi>`
//! 2. **Pure orchestration** - all deps injected via `StorefrontDeps`
//! 3. **Semantic errors** - returns `AppError`, front-ends decide how to show it

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use tokio_test as _;

mod backend;
mod deps;
mod error;

mod cart;
mod catalog;
mod checkout;
pub mod types;

// Primary exports
pub use backend::Storefront;
pub use deps::StorefrontDeps;
pub use error::AppError;

// Re-export operation modules for direct access if needed
pub use cart::CartOps;
pub use catalog::CatalogOps;
pub use checkout::CheckoutOps;

// Re-export commonly used types from storefront-core for convenience
pub use storefront_core::{
    ItemField, ItemForm, OrderReceipt, Settlement, ShippingDetails, ShippingField,
};
