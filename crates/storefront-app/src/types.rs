//! View DTOs for front-ends.
//!
//! They map domain state into render-ready values: parsed prices, totals,
//! and the catalog status flattened into `loading` / `error`.

use serde::Serialize;
use storefront_core::{
    CartLine, CartStore, CartSummary, CatalogState, Item, ItemId, SearchResults, format_money,
    line_total,
};

// ============================================================================
// Catalog Types
// ============================================================================

/// One catalog item as shown in listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    /// Price string as the backend sent it.
    pub price: String,
    /// Parsed price, `None` when the string is not a number.
    pub unit_price: Option<f64>,
    pub img: String,
}

impl ItemView {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price.clone(),
            unit_price: item.unit_price(),
            img: item.img.clone(),
        }
    }

    /// Price for display, `"-"` when unparseable.
    pub fn display_price(&self) -> String {
        self.unit_price.map_or_else(|| "-".to_string(), format_money)
    }
}

/// The catalog as a listing page sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub items: Vec<ItemView>,
    /// Size of the unfiltered catalog.
    pub total: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl CatalogView {
    pub fn from_state(state: &CatalogState) -> Self {
        Self {
            items: state.items().iter().map(ItemView::from_item).collect(),
            total: state.items().len(),
            loading: state.is_loading(),
            error: state.error().map(str::to_string),
        }
    }

    /// A view restricted to search matches.
    pub fn from_search(state: &CatalogState, results: &SearchResults<'_>) -> Self {
        Self {
            items: results.matches.iter().copied().map(ItemView::from_item).collect(),
            total: results.total,
            loading: state.is_loading(),
            error: state.error().map(str::to_string),
        }
    }

    /// Number of items in this view.
    pub fn shown(&self) -> usize {
        self.items.len()
    }
}

// ============================================================================
// Cart Types
// ============================================================================

/// One cart line with its computed total.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub id: ItemId,
    pub name: String,
    pub img: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

impl CartLineView {
    pub fn from_line(line: &CartLine) -> Self {
        Self {
            id: line.id(),
            name: line.item.name.clone(),
            img: line.item.img.clone(),
            unit_price: line.item.unit_price().unwrap_or(0.0),
            quantity: line.quantity,
            line_total: line_total(line),
        }
    }
}

/// The cart page: lines plus the order summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub summary: CartSummary,
}

impl CartView {
    pub fn from_store(cart: &CartStore) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineView::from_line).collect(),
            summary: cart.summary(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{CatalogChange, CatalogOp};

    #[test]
    fn test_item_view_display_price() {
        let view = ItemView::from_item(&Item::new(1, "Bed", "300", "img/bed.jpg"));
        assert_eq!(view.display_price(), "300.00");

        let broken = ItemView::from_item(&Item::new(2, "Odd", "n/a", ""));
        assert_eq!(broken.unit_price, None);
        assert_eq!(broken.display_price(), "-");
    }

    #[test]
    fn test_catalog_view_flattens_status() {
        let mut state = CatalogState::new();
        state.begin(CatalogOp::Fetch);
        state.fulfill(CatalogChange::Replaced(vec![Item::new(1, "Bed", "300", "")]));
        state.reject("Network Error");

        let view = CatalogView::from_state(&state);
        assert_eq!(view.shown(), 1);
        assert!(!view.loading);
        assert_eq!(view.error.as_deref(), Some("Network Error"));
    }

    #[test]
    fn test_cart_view_serializes_camel_case() {
        let mut cart = CartStore::new();
        cart.add_to_cart(Item::new(1, "Bed", "300", "img/bed.jpg"));
        cart.add_to_cart(Item::new(1, "Bed", "300", "img/bed.jpg"));

        let view = CartView::from_store(&cart);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["lines"][0]["lineTotal"], 600.0);
        assert_eq!(json["lines"][0]["unitPrice"], 300.0);
        assert_eq!(json["summary"]["total"], 610.0);
        assert_eq!(json["summary"]["itemCount"], 2);
    }
}
