//! Money and count formatting shared by views and the order message.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Currency symbol for every displayed amount.
pub const CURRENCY_SYMBOL: &str = "₱";

/// Two-decimal display amount with currency symbol (`₱240.00`).
pub fn peso(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}

/// Shortest decimal form without symbol (`240`, `240.5`), as used in the
/// order message.
pub fn plain_amount(amount: f64) -> String {
    if amount == 0.0 {
        return "0".to_owned();
    }
    format!("{amount}")
}

/// Grand total shown in the cart summary. A non-finite total shows as zero.
pub fn displayed_total(total: f64) -> f64 {
    if total.is_finite() { total } else { 0.0 }
}

/// `"1 item"` / `"3 items"`.
pub fn item_count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_owned()
    } else {
        format!("{count} items")
    }
}
