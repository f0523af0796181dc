//! Interactive console loop
//!
//! Reads menu choices line by line, turns them into commands, and prints
//! the replies. Generic over reader and writer so tests can script a whole
//! session.

use super::handlers::dispatch;
use super::helpers::{menu_banner, parse_numeric, NumericInput};
use super::models::*;
use super::state::Session;
use crate::catalog::ProductId;
use crate::error::ShopResult;
use std::io::{BufRead, Write};

/// Terminal endpoints for one session
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps the given reader and writer
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the menu loop until checkout, exit, or end of input.
    pub fn run(&mut self, session: &mut Session) -> ShopResult<SessionEnd> {
        let span = tracing::info_span!("session", cart_id = %session.cart.cart_id());
        let _guard = span.enter();
        tracing::info!(
            event_name = "session.started",
            products = session.catalog.len(),
            "shopping session started"
        );

        loop {
            self.write(&menu_banner(&session.title))?;
            self.write(MENU_OPTIONS)?;

            let Some(line) = self.prompt(CHOICE_PROMPT)? else {
                return Ok(self.input_closed());
            };

            let choice = match parse_numeric(&line) {
                NumericInput::Value(number) => MenuChoice::from_number(number),
                NumericInput::OutOfRange => None,
                NumericInput::NotANumber => {
                    self.write_line(INVALID_INPUT_MESSAGE)?;
                    continue;
                }
            };

            let command = match choice {
                Some(MenuChoice::ViewProducts) => Command::ViewProducts,
                Some(MenuChoice::AddToCart) => match self.read_product_id()? {
                    Some(product_id) => Command::AddToCart(product_id),
                    None => return Ok(self.input_closed()),
                },
                Some(MenuChoice::ViewCart) => Command::ViewCart,
                Some(MenuChoice::Checkout) => Command::Checkout,
                Some(MenuChoice::Exit) => Command::Exit,
                None => Command::Unknown,
            };

            let reply = dispatch(session, command);
            self.write(&reply.text)?;

            if let Flow::End(end) = reply.flow {
                return Ok(end);
            }
        }
    }

    /// Prompts until a number is entered.
    ///
    /// Returns `None` on end of input, `Some(None)` for a number that can
    /// never be a product id (negative or too large).
    fn read_product_id(&mut self) -> ShopResult<Option<Option<ProductId>>> {
        loop {
            let Some(line) = self.prompt(PRODUCT_ID_PROMPT)? else {
                return Ok(None);
            };

            match parse_numeric(&line) {
                NumericInput::Value(number) => return Ok(Some(ProductId::try_from(number).ok())),
                NumericInput::OutOfRange => return Ok(Some(None)),
                NumericInput::NotANumber => self.write_line(INVALID_INPUT_MESSAGE)?,
            }
        }
    }

    /// Writes `prompt` and reads one line; `None` once input is exhausted.
    fn prompt(&mut self, prompt: &str) -> ShopResult<Option<String>> {
        self.write(prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn input_closed(&self) -> SessionEnd {
        tracing::info!(event_name = "session.input_closed", "input closed, ending session");
        SessionEnd::InputClosed
    }

    fn write(&mut self, text: &str) -> ShopResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> ShopResult<()> {
        self.write(text)?;
        self.write("\n")
    }
}
