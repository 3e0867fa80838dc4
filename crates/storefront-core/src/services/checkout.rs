//! Checkout - turns a filled cart and valid shipping details into a receipt.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{CartLine, FormErrors, ShippingDetails, ShippingField};
use crate::pricing::CartSummary;
use crate::store::CartStore;

/// Why an order could not be placed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("No items to checkout")]
    EmptyCart,

    #[error("Invalid shipping details: {0}")]
    InvalidDetails(FormErrors<ShippingField>),
}

/// Record of a placed order.
///
/// There is no order endpoint on the backend; the receipt is the result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub lines: Vec<CartLine>,
    pub summary: CartSummary,
    pub shipping: ShippingDetails,
    pub placed_at: DateTime<Utc>,
}

/// Place an order for the cart contents.
///
/// Details are validated before the cart is inspected. On success the cart
/// is cleared; on failure it is left untouched.
///
/// # Errors
///
/// Returns `InvalidDetails` when the shipping form has errors and
/// `EmptyCart` when there is nothing to order.
pub fn checkout(
    cart: &mut CartStore,
    details: &ShippingDetails,
) -> Result<OrderReceipt, CheckoutError> {
    details.validate().map_err(CheckoutError::InvalidDetails)?;
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let receipt = OrderReceipt {
        order_id: Uuid::new_v4(),
        lines: cart.lines().to_vec(),
        summary: cart.summary(),
        shipping: details.clone(),
        placed_at: Utc::now(),
    };
    cart.clear_cart();

    tracing::info!(
        order_id = %receipt.order_id,
        items = receipt.summary.item_count,
        total = receipt.summary.total,
        "order placed"
    );
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;

    fn details() -> ShippingDetails {
        let mut details = ShippingDetails::new();
        details.set(ShippingField::FirstName, "Ada");
        details.set(ShippingField::Email, "ada@example.com");
        details.set(ShippingField::Address, "1 Analytical Way");
        details.set(ShippingField::City, "London");
        details.set(ShippingField::ZipCode, "N1 9GU");
        details.set(ShippingField::Country, "UK");
        details
    }

    fn filled_cart() -> CartStore {
        let mut cart = CartStore::new();
        cart.add_to_cart(Item::new(1, "Bed", "300", "img/bed.jpg"));
        cart.add_to_cart(Item::new(2, "Lamp", "80", "img/lamp.jpg"));
        cart.add_to_cart(Item::new(2, "Lamp", "80", "img/lamp.jpg"));
        cart
    }

    #[test]
    fn test_checkout_builds_receipt_and_clears_cart() {
        let mut cart = filled_cart();
        let receipt = checkout(&mut cart, &details()).unwrap();

        assert!(cart.is_empty());
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.summary.item_count, 3);
        assert!((receipt.summary.subtotal - 460.0).abs() < 1e-9);
        assert!((receipt.summary.total - 470.0).abs() < 1e-9);
        assert_eq!(receipt.shipping.first_name, "Ada");
    }

    #[test]
    fn test_empty_cart_is_refused() {
        let mut cart = CartStore::new();
        assert_eq!(checkout(&mut cart, &details()), Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_invalid_details_leave_cart_untouched() {
        let mut cart = filled_cart();
        let before = cart.clone();
        let mut bad = details();
        bad.set(ShippingField::Email, "not-an-email");

        let err = checkout(&mut cart, &bad).unwrap_err();

        match err {
            CheckoutError::InvalidDetails(errors) => {
                assert_eq!(
                    errors.get(ShippingField::Email),
                    Some("Please enter a valid email")
                );
            }
            CheckoutError::EmptyCart => panic!("expected invalid details"),
        }
        assert_eq!(cart, before);
    }

    #[test]
    fn test_receipt_serializes_camel_case() {
        let mut cart = filled_cart();
        let receipt = checkout(&mut cart, &details()).unwrap();
        let json = serde_json::to_value(&receipt).unwrap();
        assert!(json.get("orderId").is_some());
        assert!(json.get("placedAt").is_some());
        assert_eq!(json["shipping"]["zipCode"], "N1 9GU");
        assert_eq!(json["summary"]["itemCount"], 3);
    }
}
