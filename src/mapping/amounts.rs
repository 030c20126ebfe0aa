use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::core::Cell;

/// Rendition of a missing or non-numeric amount.
pub const ZERO_AMOUNT: &str = "0.00";

/// Render an amount cell with exactly two decimal places.
///
/// Empty cells, the literal text `null`, and anything that does not parse
/// as a number render as `"0.00"`. Applying it to its own output is a
/// no-op.
pub fn format_amount(raw: &Cell) -> String {
    match parse_amount(raw) {
        Some(d) => format_two_places(d),
        None => ZERO_AMOUNT.to_string(),
    }
}

/// Parse an amount cell into a [`Decimal`].
///
/// `Decimal` holds magnitudes up to about 7.9e28. Larger values, numeric
/// or text, do not parse and so render as `"0.00"`; numeric cells out of
/// range are logged at warn.
pub fn parse_amount(raw: &Cell) -> Option<Decimal> {
    match raw {
        Cell::Number(n) if n.is_finite() => {
            let amount = Decimal::from_f64(*n);
            if amount.is_none() {
                tracing::warn!(value = *n, "amount exceeds decimal range, rendering as zero");
            }
            amount
        }
        Cell::Text(s) => {
            let s = s.trim();
            if s.is_empty() || s.eq_ignore_ascii_case("null") {
                return None;
            }
            Decimal::from_str(s)
                .or_else(|_| Decimal::from_scientific(s))
                .ok()
        }
        _ => None,
    }
}

/// Round half away from zero to two places and render with both digits.
pub fn format_two_places(d: Decimal) -> String {
    let rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return ZERO_AMOUNT.to_string();
    }
    format!("{rounded:.2}")
}
