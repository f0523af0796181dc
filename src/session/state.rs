//! Session State
//!
//! The catalog and the cart, owned together for the lifetime of one
//! interactive session.

use crate::cart::ShoppingCart;
use crate::catalog::ProductCatalog;
use crate::config::ShopConfig;

/// State of one shopping session
#[derive(Debug, Clone)]
pub struct Session {
    /// Heading printed above the menu
    pub title: String,

    pub catalog: ProductCatalog,

    /// Starts empty; discarded when the session ends
    pub cart: ShoppingCart,
}

impl Session {
    /// Creates a session over `catalog` with an empty cart
    pub fn new(title: impl Into<String>, catalog: ProductCatalog) -> Self {
        Self {
            title: title.into(),
            catalog,
            cart: ShoppingCart::new(),
        }
    }

    /// Creates a session seeded from the shop configuration
    pub fn from_config(config: &ShopConfig) -> Self {
        Self::new(config.title.clone(), config.catalog())
    }
}
