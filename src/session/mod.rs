//! Shopping Session Module
//!
//! This module binds the catalog and the cart to the text menu:
//! - Menu constants, commands and replies
//! - Input parsing helpers
//! - Session state (catalog + cart)
//! - Pure command dispatch
//! - The blocking console loop

pub mod console;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use console::Console;
pub use handlers::dispatch;
pub use models::{Command, Flow, MenuChoice, Reply, SessionEnd};
pub use state::Session;
