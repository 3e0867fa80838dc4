//! Catalog item domain types.

use serde::{Deserialize, Serialize};

/// Server-assigned item identifier.
pub type ItemId = i64;

// ─────────────────────────────────────────────────────────────────────────────
// Item Types
// ─────────────────────────────────────────────────────────────────────────────

/// An item that exists in the catalog with a server-assigned ID.
///
/// Use `ItemDraft` for items that haven't been created yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned ID, unique within the catalog.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price as a decimal string (e.g. `"19.99"`).
    pub price: String,
    /// Image path relative to the static files root (e.g. `"img/bed.jpg"`).
    pub img: String,
}

impl Item {
    /// Create a new item.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        price: impl Into<String>,
        img: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price: price.into(),
            img: img.into(),
        }
    }

    /// Parse the price string into a number.
    ///
    /// Returns `None` when the string is not a finite number.
    #[must_use]
    pub fn unit_price(&self) -> Option<f64> {
        parse_price(&self.price)
    }
}

/// An item to be created on the server (no ID yet).
///
/// This is the body of `POST /items/`. The server answers with an `Item`
/// carrying the assigned ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub price: String,
    pub img: String,
}

impl ItemDraft {
    /// Create a new draft.
    pub fn new(name: impl Into<String>, price: impl Into<String>, img: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            img: img.into(),
        }
    }

    /// Attach a server-assigned ID, producing the stored item.
    #[must_use]
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            price: self.price,
            img: self.img,
        }
    }
}

/// Parse a decimal price string, tolerating surrounding whitespace.
pub(crate) fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
