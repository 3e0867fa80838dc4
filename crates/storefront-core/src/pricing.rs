//! Aggregates derived from cart lines.
//!
//! These are pure functions of the lines and are recomputed on every read.
//! Values stay unrounded; rounding happens only in [`format_money`].

use serde::{Deserialize, Serialize};

use crate::domain::CartLine;

/// Flat shipping charge applied to every order.
pub const SHIPPING_COST: f64 = 10.0;

/// `unit price × quantity`. An unparseable price counts as 0.
#[must_use]
pub fn line_total(line: &CartLine) -> f64 {
    line.item.unit_price().unwrap_or(0.0) * f64::from(line.quantity)
}

/// Sum of all line totals.
#[must_use]
pub fn subtotal(lines: &[CartLine]) -> f64 {
    lines.iter().map(line_total).sum()
}

/// Shipping for the given lines. Currently flat, independent of contents.
#[must_use]
pub const fn shipping_cost(_lines: &[CartLine]) -> f64 {
    SHIPPING_COST
}

/// `subtotal + shipping`.
#[must_use]
pub fn total(lines: &[CartLine]) -> f64 {
    subtotal(lines) + shipping_cost(lines)
}

/// Number of units across all lines.
#[must_use]
pub fn item_count(lines: &[CartLine]) -> u64 {
    lines.iter().map(|line| u64::from(line.quantity)).sum()
}

/// Render a monetary amount with two decimals.
#[must_use]
pub fn format_money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// All cart aggregates computed at once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub item_count: u64,
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
}

impl CartSummary {
    #[must_use]
    pub fn from_lines(lines: &[CartLine]) -> Self {
        let subtotal = subtotal(lines);
        let shipping = shipping_cost(lines);
        Self {
            item_count: item_count(lines),
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}
