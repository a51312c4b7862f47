//! Actual/365 day count convention.

use super::DayCount;
use crate::types::Date;

/// Actual/365 (Fixed) day count convention.
///
/// The day count is the actual number of days between dates.
/// The year basis is always 365 days, ignoring leap years.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actual365;

impl DayCount for Actual365 {
    fn name(&self) -> &'static str {
        "Actual/365"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 365.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
