//! # Gilts
//!
//! Closed-form analytics for UK Gilts.
//!
//! The public API is grouped by bond type:
//!
//! - [`zero_coupon`]: price, duration, convexity and DV01
//! - [`fixed_coupon`]: DMO formula and curve-discounted pricing
//! - [`curves`]: zero curve yield interpolation and extrapolation
//!
//! Shared types (dates, day counts, configuration, errors) live in
//! [`gilts_core`]; the interpolation primitives in [`gilts_math`].
//!
//! ## Example
//!
//! ```rust
//! use gilts::zero_coupon::{self, DurationKind};
//!
//! let price = zero_coupon::price(1000.0, 0.03, "2035-02-17", Some("2025-02-17")).unwrap();
//! assert_eq!(price, 740.7);
//!
//! let d = zero_coupon::duration(5.0, 0.05, DurationKind::Modified, Some(2)).unwrap();
//! assert!((d.as_f64() - 4.878048780487805).abs() < 1e-12);
//!
//! let y = gilts::curves::derive_yield_from_zero_curve(&[(3.0, 0.01), (6.0, 0.015), (12.0, 0.02)], 9.0)
//!     .unwrap();
//! assert!((y - 0.0175).abs() < 1e-12);
//! ```

#![warn(missing_docs)]

pub use gilts_core;
pub use gilts_math;

pub use gilts_bonds::{curves, fixed_coupon, zero_coupon};

pub use gilts_core::{Date, GiltError, GiltResult, PricingConfig};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use gilts_bonds::prelude::*;
    pub use gilts_core::prelude::*;
}
