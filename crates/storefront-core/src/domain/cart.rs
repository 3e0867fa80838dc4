//! Cart line domain type.

use serde::{Deserialize, Serialize};

use super::item::{Item, ItemId};

/// One (item, quantity) pairing held client-side.
///
/// The item is a snapshot taken when it was first added; later catalog
/// changes do not reach it. `quantity` is never below 1 once the line is
/// owned by a `CartStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: Item,
    pub quantity: u32,
}

impl CartLine {
    /// Start a new line with quantity 1.
    #[must_use]
    pub const fn new(item: Item) -> Self {
        Self { item, quantity: 1 }
    }

    /// ID of the item this line holds.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.item.id
    }
}
