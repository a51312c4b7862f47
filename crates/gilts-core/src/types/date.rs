//! Date type for gilt calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use crate::error::{GiltError, GiltResult};

/// ISO 8601 calendar-date format accepted by every public entry point.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date for gilt calculations.
///
/// Newtype wrapper around `chrono::NaiveDate`. Dates cross the public API as
/// `YYYY-MM-DD` strings and are parsed with [`Date::parse`].
///
/// # Example
///
/// ```rust
/// use gilts_core::types::Date;
///
/// let date = Date::parse("2035-02-17").unwrap();
/// let next = date.add_months(6).unwrap();
/// assert_eq!(next.to_string(), "2035-08-17");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `GiltError::InvalidInput` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> GiltResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| {
                GiltError::invalid_input(format!(
                    "{year}-{month:02}-{day:02} is not a valid calendar date"
                ))
            })
    }

    /// Parses an ISO 8601 date string (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns `GiltError::InvalidInput` if the string is not a valid date.
    pub fn parse(s: &str) -> GiltResult<Self> {
        NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)
            .map(Date)
            .map_err(|_| GiltError::invalid_date(s))
    }

    /// Returns today's date in the local time zone.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the date falls in a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Returns the number of days in the date's year (365 or 366).
    #[must_use]
    pub fn days_in_year(&self) -> u32 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Adds a number of days to the date, saturating at the calendar bounds.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        let shifted = chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta));
        match shifted {
            Some(date) => Date(date),
            None if days < 0 => Date(NaiveDate::MIN),
            None => Date(NaiveDate::MAX),
        }
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Aug 31 + 6 months),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `GiltError::InvalidInput` if the result is out of range.
    pub fn add_months(&self, months: i32) -> GiltResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    ///
    /// Negative if `other` is before `self`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE_FORMAT))
    }
}

impl FromStr for Date {
    type Err = GiltError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Returns the number of days in a month for a given year.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Gregorian leap-year test.
///
/// A year is a leap year when divisible by 4, except century years, which
/// must also be divisible by 400.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 2, 17).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 17);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 29).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
        assert!(Date::from_ymd(2035, 6, 31).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2035-02-17").unwrap();
        assert_eq!(date, Date::from_ymd(2035, 2, 17).unwrap());
        assert_eq!("2035-02-17".parse::<Date>().unwrap(), date);
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(Date::parse("35/02/2035").is_err());
        assert!(Date::parse("2025/02/17").is_err());
        assert!(Date::parse("2025-02-30").is_err());
        assert!(Date::parse("").is_err());
        assert!(Date::parse("tomorrow").is_err());
    }

    #[test]
    fn test_add_months() {
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        let result = date.add_months(1).unwrap();
        assert_eq!(result, Date::from_ymd(2025, 2, 28).unwrap());

        let date = Date::from_ymd(2035, 6, 17).unwrap();
        assert_eq!(date.add_months(6).unwrap(), Date::from_ymd(2035, 12, 17).unwrap());
        assert_eq!(date.add_months(-6).unwrap(), Date::from_ymd(2034, 12, 17).unwrap());
    }

    #[test]
    fn test_leap_year() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(Date::from_ymd(2024, 1, 1).unwrap().is_leap_year());
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().days_in_year(), 366);
        assert_eq!(Date::from_ymd(2025, 1, 1).unwrap().days_in_year(), 365);
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2025, 2, 17).unwrap();
        let d2 = Date::from_ymd(2035, 2, 17).unwrap();
        assert_eq!(d1.days_between(&d2), 3652);
        assert_eq!(d2 - d1, 3652);
        assert_eq!(d2.days_between(&d1), -3652);
    }

    #[test]
    fn test_add_days() {
        let d = Date::from_ymd(2024, 2, 28).unwrap();
        assert_eq!(d.add_days(1), Date::from_ymd(2024, 2, 29).unwrap());
        assert_eq!(d.add_days(2), Date::from_ymd(2024, 3, 1).unwrap());
        assert_eq!(d.add_days(-59), Date::from_ymd(2023, 12, 31).unwrap());
        // Saturates instead of overflowing
        assert!(d.add_days(i64::MAX) > d.add_days(3_000_000));
        assert!(d.add_days(i64::MIN) < d.add_days(-3_000_000));
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2025, 6, 5).unwrap();
        assert_eq!(format!("{}", date), "2025-06-05");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
