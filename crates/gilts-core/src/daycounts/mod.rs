//! Day count conventions for gilt calculations.
//!
//! Day count conventions convert a date span into a year fraction.
//!
//! # Supported Conventions
//!
//! - [`ActualActual`]: actual days over the settlement year's length (365/366)
//! - [`Thirty360`]: 30-day months, 360-day years, day values capped at 30
//! - [`Actual365`]: actual days over a fixed 365-day year
//!
//! # Usage
//!
//! ```rust
//! use gilts_core::daycounts::DayCountConvention;
//! use gilts_core::types::Date;
//!
//! let convention: DayCountConvention = "30/360".parse().unwrap();
//!
//! let start = Date::parse("2025-01-15").unwrap();
//! let end = Date::parse("2025-07-15").unwrap();
//! assert_eq!(convention.year_fraction(start, end), 0.5);
//! ```

mod act365;
mod actact;
mod thirty360;

pub use act365::Actual365;
pub use actact::ActualActual;
pub use thirty360::Thirty360;

use serde::{Deserialize, Serialize};

use crate::error::GiltError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the canonical name of the convention (e.g. "Actual/Actual").
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates according to the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of the supported day count conventions.
///
/// Selects a convention at runtime; parse it from the literals
/// `"Actual/Actual"`, `"30/360"` or `"Actual/365"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/Actual with the settlement year's length as basis.
    #[default]
    #[serde(rename = "Actual/Actual")]
    ActualActual,

    /// 30/360 with both day values capped at 30.
    #[serde(rename = "30/360")]
    Thirty360,

    /// Actual/365 Fixed.
    #[serde(rename = "Actual/365")]
    Actual365,
}

impl DayCountConvention {
    /// Calculates the year fraction without boxing.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            DayCountConvention::ActualActual => ActualActual.year_fraction(start, end),
            DayCountConvention::Thirty360 => Thirty360.year_fraction(start, end),
            DayCountConvention::Actual365 => Actual365.year_fraction(start, end),
        }
    }

    /// Returns the canonical name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::ActualActual => "Actual/Actual",
            DayCountConvention::Thirty360 => "30/360",
            DayCountConvention::Actual365 => "Actual/365",
        }
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = GiltError;

    /// Parses a day count convention from a string.
    ///
    /// Matching is case-insensitive and accepts the common abbreviations
    /// ("ACT/ACT", "ACT/365", "ACT/365F").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ACTUAL/ACTUAL" | "ACT/ACT" | "ACTUALACTUAL" => Ok(DayCountConvention::ActualActual),
            "30/360" | "THIRTY360" => Ok(DayCountConvention::Thirty360),
            "ACTUAL/365" | "ACT/365" | "ACT/365F" | "ACTUAL365" => {
                Ok(DayCountConvention::Actual365)
            }
            _ => Err(GiltError::invalid_input(format!(
                "Unsupported day count convention '{s}'. Use 'Actual/Actual', '30/360', or 'Actual/365'."
            ))),
        }
    }
}
