//! Product Catalog Domain Module
//!
//! This module contains everything about the purchasable products:
//! - Domain models (Product)
//! - Formatting helpers (price and listing lines)
//! - Catalog state (id to product mapping)

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::{Product, ProductId};
pub use state::ProductCatalog;
