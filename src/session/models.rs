//! Session Models and Constants
//!
//! Menu text, user-facing messages, and the command/reply types exchanged
//! between the console loop and the dispatcher.

use crate::cart::Receipt;
use crate::catalog::ProductId;

// =============================================================================
// Menu Constants
// =============================================================================

/// Menu options, printed below the title banner
pub const MENU_OPTIONS: &str =
    "1. View Products\n2. Add to Cart\n3. View Cart\n4. Checkout\n5. Exit\n";
/// Prompt for the menu choice
pub const CHOICE_PROMPT: &str = "Enter your choice: ";
/// Prompt for the product to add
pub const PRODUCT_ID_PROMPT: &str = "Enter product ID to add to cart: ";

pub const INVALID_PRODUCT_MESSAGE: &str = "Invalid product ID.";
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Please select a valid option.";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter a number.";
pub const EMPTY_CART_CHECKOUT_MESSAGE: &str =
    "Your cart is empty. Add items before checking out.";
pub const CHECKOUT_MESSAGE: &str = "Checkout completed. Thank you for shopping!";

// =============================================================================
// Session Models
// =============================================================================

/// The five menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewProducts,
    AddToCart,
    ViewCart,
    Checkout,
    Exit,
}

impl MenuChoice {
    /// Maps the number typed at the menu to an entry
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::ViewProducts),
            2 => Some(Self::AddToCart),
            3 => Some(Self::ViewCart),
            4 => Some(Self::Checkout),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// A fully read request, ready to be applied to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ViewProducts,
    /// `None` when the typed number cannot be a product id at all
    AddToCart(Option<ProductId>),
    ViewCart,
    Checkout,
    Exit,
    /// A number that is not on the menu
    Unknown,
}

/// Why a session ended
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEnd {
    CheckedOut(Receipt),
    Exited,
    InputClosed,
}

/// What the loop does after a reply has been printed
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Continue,
    End(SessionEnd),
}

/// Outcome of dispatching one command
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Text to print, newline terminated
    pub text: String,

    pub flow: Flow,
}

impl Reply {
    /// A reply that keeps the menu loop running
    pub fn message(text: impl Into<String>) -> Self {
        let mut text = text.into();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        Self {
            text,
            flow: Flow::Continue,
        }
    }

    /// A reply after which the session ends
    pub fn ending(text: impl Into<String>, end: SessionEnd) -> Self {
        Self {
            flow: Flow::End(end),
            ..Self::message(text)
        }
    }
}
