//! Services that orchestrate the stores and the backend port.

mod catalog_service;
mod checkout;

pub use catalog_service::CatalogService;
pub use checkout::{CheckoutError, OrderReceipt, checkout};
