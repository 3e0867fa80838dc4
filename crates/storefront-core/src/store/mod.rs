//! Client-side stores.
//!
//! `CartStore` is purely local. `CatalogState` mirrors the backend and is
//! driven through `CatalogService`.

pub mod cart;
pub mod catalog;

pub use cart::{CartStore, InvalidCart};
pub use catalog::{CatalogChange, CatalogOp, CatalogState, CatalogStatus, Settlement};
