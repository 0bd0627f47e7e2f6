//! Presentation of prices. Stored amounts are never rounded; only the text is.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as dollars with exactly two decimals, e.g. `$7.75`.
pub fn format_price(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("${}", rounded)
}
