//! Cart and receipt rendering.

use storefront_app::types::CartView;
use storefront_core::{CartSummary, OrderReceipt, format_money, line_total};

use super::tables::{print_separator, truncate_string};

fn print_summary(summary: &CartSummary) {
    println!("{:<40} {:>10}", "Items", summary.item_count);
    println!("{:<40} {:>10}", "Subtotal", format_money(summary.subtotal));
    println!("{:<40} {:>10}", "Shipping", format_money(summary.shipping));
    print_separator(51);
    println!("{:<40} {:>10}", "Total", format_money(summary.total));
}

/// Print the cart lines followed by the order summary.
pub fn print_cart(cart: &CartView) {
    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    println!("{:<5} {:<24} {:>8} {:>4} {:>10}", "ID", "Item", "Price", "Qty", "Total");
    print_separator(55);
    for line in &cart.lines {
        println!(
            "{:<5} {:<24} {:>8} {:>4} {:>10}",
            line.id,
            truncate_string(&line.name, 23),
            format_money(line.unit_price),
            line.quantity,
            format_money(line.line_total)
        );
    }
    println!();
    print_summary(&cart.summary);
}

/// Print a placed order.
pub fn print_receipt(receipt: &OrderReceipt) {
    println!("Order {} placed.", receipt.order_id);
    println!(
        "Shipping to {} {}, {}, {} {}, {}",
        receipt.shipping.first_name,
        receipt.shipping.last_name,
        receipt.shipping.address,
        receipt.shipping.zip_code,
        receipt.shipping.city,
        receipt.shipping.country
    );
    println!("Confirmation sent to {}", receipt.shipping.email);
    println!();
    for line in &receipt.lines {
        println!(
            "{:>3} x {:<30} {:>10}",
            line.quantity,
            truncate_string(&line.item.name, 29),
            format_money(line_total(line))
        );
    }
    print_separator(51);
    print_summary(&receipt.summary);
}
