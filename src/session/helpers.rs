//! Input parsing helpers for the console loop

/// Classification of one line typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericInput {
    Value(i64),
    /// Integer syntax, but too large for `i64`
    OutOfRange,
    NotANumber,
}

/// Parses a trimmed line as a signed integer.
///
/// Accepts an optional `+`/`-` sign followed by ASCII digits; anything else
/// (empty lines, decimals, words) is `NotANumber`.
pub fn parse_numeric(line: &str) -> NumericInput {
    let trimmed = line.trim();
    let digits = trimmed.strip_prefix(&['+', '-'][..]).unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return NumericInput::NotANumber;
    }

    match trimmed.parse::<i64>() {
        Ok(value) => NumericInput::Value(value),
        Err(_) => NumericInput::OutOfRange,
    }
}

/// Banner printed above the menu options
pub fn menu_banner(title: &str) -> String {
    format!("\n=== {} ===\n", title)
}

/// Line printed when the user picks Exit
pub fn farewell_message(title: &str) -> String {
    format!("Exiting the {}.", title)
}
