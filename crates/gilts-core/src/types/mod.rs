//! Domain types for gilt analytics.
//!
//! - [`Date`]: Calendar date parsed from and rendered as ISO `YYYY-MM-DD`

mod date;

pub use date::{is_leap_year, Date};
