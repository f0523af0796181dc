//! Online Shopping Library
//!
//! This library provides an in-memory product catalog, a shopping cart,
//! and the interactive text menu that binds them together.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod session;

// Infrastructure
pub mod config;
pub mod error;

pub use error::{ShopError, ShopResult};
