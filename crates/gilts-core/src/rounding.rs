//! Decimal rounding of floating-point results.
//!
//! Prices are reported rounded to the penny and intermediate values to six
//! decimal places. Rounding goes through [`rust_decimal`] on the exact binary
//! value of the `f64`, using round-half-to-even, so a value such as `2.675`
//! (stored as `2.67499999...`) rounds to `2.67` rather than `2.68`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places used for reported prices (nearest penny).
pub const PRICE_DECIMALS: u32 = 2;

/// Decimal places used for intermediate price values.
pub const INTERMEDIATE_DECIMALS: u32 = 6;

/// Rounds `value` to `decimals` decimal places.
///
/// Non-finite values and values outside the `Decimal` range fall back to
/// scaled `f64` rounding.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or_else(|| {
            let factor = 10f64.powi(decimals as i32);
            (value * factor).round() / factor
        })
}

/// Rounds a price to the nearest penny.
#[must_use]
pub fn round_price(value: f64) -> f64 {
    round_to(value, PRICE_DECIMALS)
}
