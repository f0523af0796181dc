//! Catalog Formatting Helpers
//!
//! Small pure functions that turn products into the lines shown on the
//! terminal.

use super::models::Product;

/// Significant digits shown for prices, as a terminal `%g` would print them
const PRICE_SIGNIFICANT_DIGITS: i32 = 6;

/// Formats a price with a leading dollar sign.
///
/// Prices are rounded to six significant digits with trailing zeros
/// dropped, so `1000.0` prints as `$1000`, `20.5` as `$20.5` and a
/// `0.1 + 0.2` total as `$0.3`. Magnitudes of a million and up (or below
/// `0.0001`) switch to exponent form, e.g. `$1.23457e+06`.
pub fn format_price(price: f64) -> String {
    format!("${}", format_significant(price))
}

fn format_significant(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "inf" } else { "-inf" }.to_string();
    }

    // Rounding first settles the exponent, e.g. 999999.7 becomes 1e+06
    let scientific = format!("{:.*e}", (PRICE_SIGNIFICANT_DIGITS - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRICE_SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        );
    }

    let decimals = (PRICE_SIGNIFICANT_DIGITS - 1 - exponent) as usize;
    trim_fraction(&format!("{:.*}", decimals, value)).to_string()
}

/// Drops trailing zeros after the decimal point, and the point itself
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Produces the catalog listing line for a product.
///
/// Example output: `"1. Laptop - $1000"`.
pub fn format_catalog_line(product: &Product) -> String {
    format!(
        "{}. {} - {}",
        product.id,
        product.name,
        format_price(product.price)
    )
}
