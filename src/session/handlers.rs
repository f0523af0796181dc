//! Menu command handlers
//!
//! `dispatch` applies one command to a session and returns the text to
//! print. It performs no I/O, so every menu path can be tested directly.

use super::helpers::farewell_message;
use super::models::*;
use super::state::Session;
use crate::cart::helpers::format_item_summary;
use crate::catalog::ProductId;

/// Applies `command` to `session`.
pub fn dispatch(session: &mut Session, command: Command) -> Reply {
    match command {
        Command::ViewProducts => Reply::message(session.catalog.list_products()),
        Command::AddToCart(product_id) => handle_add_to_cart(session, product_id),
        Command::ViewCart => Reply::message(session.cart.display_cart()),
        Command::Checkout => handle_checkout(session),
        Command::Exit => {
            tracing::info!(
                event_name = "session.exit",
                cart_id = %session.cart.cart_id(),
                items = session.cart.len(),
                "session exited without checkout"
            );
            Reply::ending(farewell_message(&session.title), SessionEnd::Exited)
        }
        Command::Unknown => Reply::message(INVALID_CHOICE_MESSAGE),
    }
}

fn handle_add_to_cart(session: &mut Session, product_id: Option<ProductId>) -> Reply {
    let product = product_id.and_then(|id| session.catalog.get_product(id)).cloned();

    match product {
        Some(product) => {
            let message = format!("{} added to cart.", product.name);
            session.cart.add_product(product);
            Reply::message(message)
        }
        None => {
            tracing::debug!(
                event_name = "cart.item.rejected",
                cart_id = %session.cart.cart_id(),
                product_id = ?product_id,
                "unknown product id"
            );
            Reply::message(INVALID_PRODUCT_MESSAGE)
        }
    }
}

fn handle_checkout(session: &mut Session) -> Reply {
    if session.cart.is_empty() {
        return Reply::message(EMPTY_CART_CHECKOUT_MESSAGE);
    }

    let receipt = session.cart.receipt();
    match serde_json::to_string(&receipt) {
        Ok(json) => tracing::info!(
            event_name = "cart.checkout",
            cart_id = %receipt.cart_id,
            summary = %format_item_summary(&receipt.items),
            receipt = %json,
            "checkout completed"
        ),
        Err(error) => tracing::error!(
            event_name = "cart.checkout",
            cart_id = %receipt.cart_id,
            %error,
            "failed to serialize receipt"
        ),
    }

    Reply::ending(CHECKOUT_MESSAGE, SessionEnd::CheckedOut(receipt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, ProductCatalog};
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// Log sink shared between the subscriber and the assertions
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn seeded_session() -> Session {
        Session::new(
            "Online Shopping System",
            ProductCatalog::from_products([
                Product::new(1, "Laptop", 1000.0),
                Product::new(2, "Phone", 500.0),
                Product::new(3, "T-shirt", 20.0),
            ]),
        )
    }

    #[test]
    fn test_add_then_view_cart() {
        let mut session = seeded_session();

        let reply = dispatch(&mut session, Command::AddToCart(Some(2)));
        assert_eq!(reply, Reply::message("Phone added to cart."));
        dispatch(&mut session, Command::AddToCart(Some(1)));

        assert_eq!(session.cart.calculate_total(), 1500.0);
        let names: Vec<_> = session.cart.items().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Phone", "Laptop"]);

        let view = dispatch(&mut session, Command::ViewCart);
        assert_eq!(
            view.text,
            "Items in Cart:\n- Phone - $500\n- Laptop - $1000\nTotal: $1500\n"
        );
        assert_eq!(view.flow, Flow::Continue);
    }

    #[test]
    fn test_add_unknown_product_leaves_cart_unchanged() {
        let mut session = seeded_session();

        let reply = dispatch(&mut session, Command::AddToCart(Some(99)));
        assert_eq!(reply.text, "Invalid product ID.\n");
        assert_eq!(reply.flow, Flow::Continue);

        let reply = dispatch(&mut session, Command::AddToCart(None));
        assert_eq!(reply.text, "Invalid product ID.\n");
        assert!(session.cart.is_empty());
    }

    #[test]
    fn test_checkout_empty_cart_continues() {
        let mut session = seeded_session();

        let reply = dispatch(&mut session, Command::Checkout);
        assert_eq!(
            reply.text,
            "Your cart is empty. Add items before checking out.\n"
        );
        assert_eq!(reply.flow, Flow::Continue);
    }

    #[test]
    fn test_checkout_with_items_ends_session() {
        let mut session = seeded_session();
        dispatch(&mut session, Command::AddToCart(Some(3)));
        dispatch(&mut session, Command::AddToCart(Some(3)));

        let reply = dispatch(&mut session, Command::Checkout);
        assert_eq!(reply.text, "Checkout completed. Thank you for shopping!\n");

        match reply.flow {
            Flow::End(SessionEnd::CheckedOut(receipt)) => {
                assert_eq!(receipt.cart_id, session.cart.cart_id());
                assert_eq!(receipt.items.len(), 2);
                assert_eq!(receipt.total, 40.0);
            }
            other => panic!("expected checkout, got {:?}", other),
        }
    }

    #[test]
    fn test_view_products_exit_and_unknown() {
        let mut session = seeded_session();

        let listing = dispatch(&mut session, Command::ViewProducts);
        assert!(listing.text.starts_with("Available Products:\n1. Laptop - $1000\n"));

        let unknown = dispatch(&mut session, Command::Unknown);
        assert_eq!(unknown.text, "Invalid choice. Please select a valid option.\n");

        let exit = dispatch(&mut session, Command::Exit);
        assert_eq!(exit.text, "Exiting the Online Shopping System.\n");
        assert_eq!(exit.flow, Flow::End(SessionEnd::Exited));
    }

    #[test]
    fn test_unknown_product_is_silent_at_default_log_level() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut session = seeded_session();
            dispatch(&mut session, Command::AddToCart(Some(99)));
            dispatch(&mut session, Command::AddToCart(None));
            dispatch(&mut session, Command::Unknown);
            dispatch(&mut session, Command::Checkout);

            assert_eq!(logs.contents(), "", "menu mistakes must not reach the terminal");

            tracing::warn!("capture check");
        });

        assert!(logs.contents().contains("capture check"));
    }

    #[test]
    fn test_farewell_uses_session_title() {
        let mut session = Session::new("Corner Shop", ProductCatalog::new());

        let exit = dispatch(&mut session, Command::Exit);
        assert_eq!(exit.text, "Exiting the Corner Shop.\n");
    }
}
