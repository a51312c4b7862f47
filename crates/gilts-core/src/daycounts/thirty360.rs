//! 30/360 day count convention.

use super::DayCount;
use crate::types::Date;

/// 30/360 day count convention.
///
/// Every month is treated as 30 days and every year as 360 days. Both day
/// values are capped at 30 before differencing; there is no special
/// end-of-February handling.
///
/// # Formula
///
/// $$\text{Days} = 360 \times (Y_2 - Y_1) + 30 \times (M_2 - M_1) + (\min(D_2,30) - \min(D_1,30))$$
///
/// # Example
///
/// ```rust
/// use gilts_core::daycounts::{DayCount, Thirty360};
/// use gilts_core::types::Date;
///
/// let start = Date::parse("2025-01-31").unwrap();
/// let end = Date::parse("2025-07-31").unwrap();
/// assert_eq!(Thirty360.day_count(start, end), 180);
/// assert_eq!(Thirty360.year_fraction(start, end), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360;

impl DayCount for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = start.year() as i64;
        let y2 = end.year() as i64;
        let m1 = start.month() as i64;
        let m2 = end.month() as i64;
        let d1 = start.day().min(30) as i64;
        let d2 = end.day().min(30) as i64;

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }
}
