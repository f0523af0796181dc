//! Catalog Domain Models
//!
//! This module contains the product entity shared by the catalog and the
//! cart.

use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// Identifier of a product in the catalog
pub type ProductId = u32;

/// Represents a purchasable product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Catalog key of the product
    pub id: ProductId,

    /// Display name of the product
    pub name: String,

    /// Unit price, printed with a leading `$`
    pub price: f64,
}

impl Product {
    /// Creates a product
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}
