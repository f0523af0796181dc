//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (Receipt)
//! - Business logic helpers (cart ids, formatting)
//! - Cart state (ordered item list and totals)

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::Receipt;
pub use state::ShoppingCart;
