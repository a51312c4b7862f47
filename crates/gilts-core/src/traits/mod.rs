//! Core traits for the gilt analytics library.
//!
//! - [`Clock`]: Source of "today" for operations whose settlement date
//!   defaults to the current date

use crate::types::Date;

/// Source of the current calendar date.
///
/// Pricers that default the settlement date to "today" read it through this
/// trait so that tests and batch jobs can pin the date with [`FixedClock`].
pub trait Clock: Send + Sync {
    /// Returns the current date.
    fn today(&self) -> Date;
}

/// Clock backed by the process wall clock (local time zone).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Date::today()
    }
}

/// Clock that always reports the same date.
///
/// # Example
///
/// ```rust
/// use gilts_core::traits::{Clock, FixedClock};
/// use gilts_core::types::Date;
///
/// let clock = FixedClock::new(Date::parse("2025-02-17").unwrap());
/// assert_eq!(clock.today().to_string(), "2025-02-17");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: Date,
}

impl FixedClock {
    /// Creates a clock pinned to `date`.
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.date
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Date {
        (**self).today()
    }
}
