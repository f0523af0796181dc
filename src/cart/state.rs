//! Shopping Cart State Management
//!
//! This module holds the ordered list of products the user picked.

use super::helpers::{format_cart_line, get_or_create_cart_id};
use super::models::Receipt;
use crate::catalog::helpers::format_price;
use crate::catalog::Product;

// =============================================================================
// Shopping Cart
// =============================================================================

/// Ordered sequence of product copies, in the order they were added.
///
/// No deduplication: adding the same product twice stores it twice.
#[derive(Debug, Clone)]
pub struct ShoppingCart {
    cart_id: String,
    items: Vec<Product>,
}

impl Default for ShoppingCart {
    fn default() -> Self {
        Self::new()
    }
}

impl ShoppingCart {
    /// Creates an empty cart with a freshly generated id
    pub fn new() -> Self {
        Self::with_id(None)
    }

    /// Creates an empty cart, generating an id when none is given
    pub fn with_id(cart_id: Option<String>) -> Self {
        Self {
            cart_id: get_or_create_cart_id(cart_id),
            items: Vec::new(),
        }
    }

    /// Identifier used to correlate log events and the receipt
    pub fn cart_id(&self) -> &str {
        &self.cart_id
    }

    /// Appends a copy of `product` to the end of the cart.
    pub fn add_product(&mut self, product: Product) {
        tracing::debug!(
            event_name = "cart.item.added",
            cart_id = %self.cart_id,
            product_id = product.id,
            "product appended to cart"
        );
        self.items.push(product);
    }

    /// Sum of all item prices, `0.0` for an empty cart.
    pub fn calculate_total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Renders the cart contents followed by the total.
    pub fn display_cart(&self) -> String {
        if self.items.is_empty() {
            return "Your cart is empty.\n".to_string();
        }

        let mut display = String::from("Items in Cart:\n");
        for item in &self.items {
            display.push_str(&format_cart_line(item));
            display.push('\n');
        }
        display.push_str(&format!("Total: {}\n", format_price(self.calculate_total())));
        display
    }

    /// Snapshot of the cart for checkout
    pub fn receipt(&self) -> Receipt {
        Receipt {
            cart_id: self.cart_id.clone(),
            items: self.items.clone(),
            total: self.calculate_total(),
        }
    }

    /// Items in the order they were added
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of entries, counting repeats
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True until the first product is added
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
