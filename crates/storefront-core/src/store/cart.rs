//! Cart store - client-side cart lines.
//!
//! Every operation is total: there is no error channel and no backend call.
//! Invariants held after any sequence of operations:
//!
//! - at most one line per item ID
//! - every line has `quantity >= 1`
//! - lines keep insertion order

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::domain::{CartLine, Item, ItemId};
use crate::pricing::CartSummary;

/// A serialized cart whose lines break the store invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCart {
    #[error("cart line for item {id} has quantity 0")]
    ZeroQuantity { id: ItemId },

    #[error("cart holds more than one line for item {id}")]
    DuplicateLine { id: ItemId },
}

/// Owner of the cart lines for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl<'de> Deserialize<'de> for CartStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Lines {
            lines: Vec<CartLine>,
        }

        let Lines { lines } = Lines::deserialize(deserializer)?;
        Self::from_lines(lines).map_err(serde::de::Error::custom)
    }
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from saved lines, keeping their order.
    pub fn from_lines(lines: Vec<CartLine>) -> Result<Self, InvalidCart> {
        let mut seen = HashSet::with_capacity(lines.len());
        for line in &lines {
            if line.quantity == 0 {
                return Err(InvalidCart::ZeroQuantity { id: line.id() });
            }
            if !seen.insert(line.id()) {
                return Err(InvalidCart::DuplicateLine { id: line.id() });
            }
        }
        Ok(Self { lines })
    }

    /// Add one unit of `item`.
    ///
    /// If a line for `item.id` exists its quantity grows by 1, otherwise a
    /// new line with quantity 1 is appended.
    pub fn add_to_cart(&mut self, item: Item) {
        if let Some(line) = self.line_mut(item.id) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::debug!(id = item.id, quantity = line.quantity, "cart line incremented");
        } else {
            tracing::debug!(id = item.id, "cart line added");
            self.lines.push(CartLine::new(item));
        }
    }

    /// Set the quantity of an existing line.
    ///
    /// Quantities below 1 or above `u32::MAX` are ignored; use
    /// [`Self::remove_item`] to drop a line. Unknown IDs are ignored.
    pub fn update_quantity(&mut self, id: ItemId, quantity: i64) {
        let Ok(quantity @ 1..) = u32::try_from(quantity) else {
            tracing::debug!(id, quantity, "ignoring out-of-range quantity");
            return;
        };
        if let Some(line) = self.line_mut(id) {
            line.quantity = quantity;
        }
    }

    /// Raise a line's quantity by one (the `+` control).
    pub fn increment(&mut self, id: ItemId) {
        if let Some(line) = self.line_mut(id) {
            line.quantity = line.quantity.saturating_add(1);
        }
    }

    /// Lower a line's quantity by one (the `-` control). Never drops below 1.
    pub fn decrement(&mut self, id: ItemId) {
        if let Some(current) = self.line(id).map(|line| line.quantity) {
            self.update_quantity(id, i64::from(current) - 1);
        }
    }

    /// Delete the line for `id`, if present.
    pub fn remove_item(&mut self, id: ItemId) {
        self.lines.retain(|line| line.id() != id);
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    fn line_mut(&mut self, id: ItemId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id() == id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Aggregates derived from the current lines.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary::from_lines(&self.lines)
    }
}
