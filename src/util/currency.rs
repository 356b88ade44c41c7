//! Currency display formatting.

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

use crate::net::types::BalanceSummary;

/// Format an amount as `$123.45`, with the minus sign ahead of the dollar
/// sign for negatives.
pub fn format_usd(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${amount:.2}")
    }
}

/// Plain two-decimal amount for table cells.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Styling modifier for a signed amount (zero reads as positive).
pub fn tone_class(amount: f64) -> &'static str {
    if amount >= 0.0 {
        "summary-card__value--positive"
    } else {
        "summary-card__value--negative"
    }
}

/// Formatted (income, expenses, balance) values for the summary cards.
pub fn summary_values(balance: &BalanceSummary) -> (String, String, String) {
    (
        format_usd(balance.total_income),
        format_usd(balance.total_expenses),
        format_usd(balance.balance),
    )
}
