//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms. Totals and parsed
//! prices arrive precomputed in the view DTOs.

pub mod cart_display;
pub mod item_display;
pub mod tables;

// Re-export commonly used items
pub use cart_display::{print_cart, print_receipt};
pub use item_display::{print_item_detail, print_item_table};
pub use tables::{print_separator, truncate_string};
