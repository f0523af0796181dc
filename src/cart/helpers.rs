//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart identifiers and
//! formatting.

use crate::catalog::helpers::format_price;
use crate::catalog::Product;
use uuid::Uuid;

/// Returns the provided `cart_id` or creates a new UUID string when `None`.
///
/// This guarantees that every cart carries a non-empty identifier.
pub fn get_or_create_cart_id(cart_id: Option<String>) -> String {
    cart_id.unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Produces the cart display line for a single item.
///
/// Example output: `"- Phone - $500"`.
pub fn format_cart_line(product: &Product) -> String {
    format!("- {} - {}", product.name, format_price(product.price))
}

/// Produces a human-readable one-line summary for a list of cart items,
/// grouping repeated products while keeping first-seen order.
///
/// Example output: `"2x Phone, 1x Laptop"`.
pub fn format_item_summary(items: &[Product]) -> String {
    let mut counts: Vec<(&str, u32)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(name, _)| *name == item.name) {
            Some((_, quantity)) => *quantity += 1,
            None => counts.push((item.name.as_str(), 1)),
        }
    }

    counts
        .iter()
        .map(|(name, quantity)| format!("{}x {}", quantity, name))
        .collect::<Vec<_>>()
        .join(", ")
}
