//! Catalog state and its three-phase transitions.
//!
//! Each backend operation moves the state through
//! `pending -> fulfilled | rejected`. The transitions here are synchronous
//! and pure; `CatalogService` applies them around the awaited port call.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Item, ItemId};
use crate::ports::ApiError;

/// Status of the catalog collection.
///
/// The error message only exists in the `Failed` variant, so "message set
/// iff status is error" holds by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "error", rename_all = "lowercase")]
pub enum CatalogStatus {
    #[default]
    Idle,
    Loading,
    #[serde(rename = "error")]
    Failed(String),
}

/// The backend operation a transition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOp {
    Fetch,
    Create,
    Delete(ItemId),
}

impl CatalogOp {
    /// Message recorded when a rejection carries no text of its own.
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::Fetch => "Failed to fetch items",
            Self::Create => "Failed to create item",
            Self::Delete(_) => "Failed to delete item",
        }
    }

    /// Text stored in the state when this operation is rejected with `err`.
    #[must_use]
    pub fn rejection_message(self, err: &ApiError) -> String {
        let message = err.to_string();
        if message.trim().is_empty() {
            self.fallback_message().to_string()
        } else {
            message
        }
    }
}

impl fmt::Display for CatalogOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => f.write_str("fetch items"),
            Self::Create => f.write_str("create item"),
            Self::Delete(id) => write!(f, "delete item {id}"),
        }
    }
}

/// Effect of a fulfilled operation on the item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogChange {
    /// Fetch: replace the list wholesale, server order, no merge.
    Replaced(Vec<Item>),
    /// Create: append the server-returned item.
    Appended(Item),
    /// Delete: drop the item with this ID.
    Removed(ItemId),
}

/// How an operation settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Fulfilled,
    Rejected { message: String },
}

impl Settlement {
    #[must_use]
    pub const fn is_fulfilled(&self) -> bool {
        matches!(self, Self::Fulfilled)
    }

    /// Rejection message, if rejected.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Fulfilled => None,
            Self::Rejected { message } => Some(message),
        }
    }
}

/// Items fetched from the backend plus the collection-level status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogState {
    items: Vec<Item>,
    #[serde(flatten)]
    status: CatalogStatus,
}

impl CatalogState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in server order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub const fn status(&self) -> &CatalogStatus {
        &self.status
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, CatalogStatus::Loading)
    }

    /// Message of the last rejection, if the catalog is in the error state.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            CatalogStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Pending phase: mark loading and drop the previous error.
    pub fn begin(&mut self, op: CatalogOp) {
        tracing::debug!(%op, "catalog operation pending");
        self.status = CatalogStatus::Loading;
    }

    /// Fulfilled phase: apply the change and leave the loading state.
    pub fn fulfill(&mut self, change: CatalogChange) {
        match change {
            CatalogChange::Replaced(items) => self.items = items,
            CatalogChange::Appended(item) => self.items.push(item),
            CatalogChange::Removed(id) => self.items.retain(|item| item.id != id),
        }
        self.status = CatalogStatus::Idle;
    }

    /// Rejected phase: record the message, keep the items as they are.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.status = CatalogStatus::Failed(message.into());
    }

    /// Drop the recorded error without touching the items.
    ///
    /// An in-flight operation keeps its `Loading` status.
    pub fn clear_error(&mut self) {
        if matches!(self.status, CatalogStatus::Failed(_)) {
            self.status = CatalogStatus::Idle;
        }
    }
}
