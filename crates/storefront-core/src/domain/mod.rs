//! Domain types for the storefront.
//!
//! These types represent catalog items, cart lines and the form records
//! the UI fills in, independent of any transport concerns.

pub mod cart;
pub mod forms;
pub mod item;

pub use cart::CartLine;
pub use forms::{FormErrors, ItemField, ItemForm, ShippingDetails, ShippingField};
pub use item::{Item, ItemDraft, ItemId};
