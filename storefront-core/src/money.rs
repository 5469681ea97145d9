//! Price formatting.

/// Currency symbol used on every page.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format an amount with the store currency and two decimals.
///
/// Non-finite amounts render as zero.
pub fn format_price(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}
