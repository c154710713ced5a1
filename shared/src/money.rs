use rust_decimal::{Decimal, RoundingStrategy};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Render an amount with exactly two decimal places, e.g. `$10.00`.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("{}{}", symbol, rounded)
}

/// Whole-hour label used on exit receipts.
pub fn format_hours(hours: u64) -> String {
    format!("{} Hours", hours)
}
