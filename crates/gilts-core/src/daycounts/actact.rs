//! Actual/Actual day count convention (settlement-year basis).

use super::DayCount;
use crate::types::Date;

/// Actual/Actual day count convention as applied to gilt time-to-maturity.
///
/// The numerator is the actual number of calendar days. The denominator is
/// the length of the *start* date's year: 366 if that year is a leap year,
/// otherwise 365. The basis is fixed for the whole period; it is not split
/// year by year.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365 \text{ or } 366}$$
///
/// # Example
///
/// ```rust
/// use gilts_core::daycounts::{ActualActual, DayCount};
/// use gilts_core::types::Date;
///
/// let start = Date::parse("2024-02-17").unwrap();
/// let end = Date::parse("2025-02-17").unwrap();
/// assert_eq!(ActualActual.year_fraction(start, end), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActualActual;

impl ActualActual {
    /// Returns the year basis used for a period starting on `start`.
    #[must_use]
    pub fn basis(start: Date) -> u32 {
        start.days_in_year()
    }
}

impl DayCount for ActualActual {
    fn name(&self) -> &'static str {
        "Actual/Actual"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / f64::from(Self::basis(start))
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_non_leap_settlement_year() {
        let start = Date::from_ymd(2025, 2, 17).unwrap();
        let end = Date::from_ymd(2035, 2, 17).unwrap();

        // 3652 days (2028 and 2032 are leap) over a 365-day basis
        assert_eq!(ActualActual.day_count(start, end), 3652);
        assert_relative_eq!(
            ActualActual.year_fraction(start, end),
            3652.0 / 365.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_leap_settlement_year() {
        let start = Date::from_ymd(2024, 2, 17).unwrap();
        let end = Date::from_ymd(2034, 2, 17).unwrap();

        assert_eq!(ActualActual::basis(start), 366);
        // 3653 days (2024, 2028 and 2032 leap days) over the 366-day settlement year
        assert_eq!(ActualActual.day_count(start, end), 3653);
        assert_relative_eq!(
            ActualActual.year_fraction(start, end),
            3653.0 / 366.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_negative_period() {
        let start = Date::from_ymd(2025, 7, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();
        assert!(ActualActual.year_fraction(start, end) < 0.0);
    }
}
