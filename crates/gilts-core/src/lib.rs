//! # Gilts Core
//!
//! Core types and utilities for the Gilts analytics library.
//!
//! This crate provides the foundational building blocks used by the pricers:
//!
//! - **Types**: [`Date`], parsed from and rendered as ISO `YYYY-MM-DD`
//! - **Day Count Conventions**: Actual/Actual, 30/360 and Actual/365
//! - **Clock**: Injectable source of "today" for defaulted settlement dates
//! - **Rounding**: Penny and six-decimal rounding of `f64` results
//! - **Configuration**: [`PricingConfig`] with serde-backed defaults
//! - **Errors**: The single [`GiltError::InvalidInput`] error kind
//!
//! ## Example
//!
//! ```rust
//! use gilts_core::prelude::*;
//!
//! let settlement = Date::parse("2025-02-17").unwrap();
//! let maturity = Date::parse("2035-02-17").unwrap();
//!
//! let years = DayCountConvention::ActualActual.year_fraction(settlement, maturity);
//! assert!((years - 3652.0 / 365.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]

pub mod config;
pub mod daycounts;
pub mod error;
pub mod rounding;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::PricingConfig;
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{GiltError, GiltResult};
    pub use crate::rounding::{round_price, round_to};
    pub use crate::traits::{Clock, FixedClock, SystemClock};
    pub use crate::types::{is_leap_year, Date};
}

// Re-export commonly used types at crate root
pub use config::PricingConfig;
pub use error::{GiltError, GiltResult};
pub use traits::{Clock, FixedClock, SystemClock};
pub use types::{is_leap_year, Date};
