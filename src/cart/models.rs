//! Shopping Cart Domain Models
//!
//! This module contains the data structures produced by the cart.

use crate::catalog::Product;
use serde::Serialize;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Summary of a cart at checkout time
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Cart identifier
    pub cart_id: String,

    /// Purchased products, in the order they were added
    pub items: Vec<Product>,

    /// Sum of all item prices
    pub total: f64,
}
