//! # Gilts Bonds
//!
//! Pricing and risk for UK Gilts.
//!
//! This crate provides:
//!
//! - **Zero coupon**: Continuous-compounding pricer, duration, convexity, DV01
//! - **Fixed coupon**: DMO price/yield formula and a curve-discounted pricer
//! - **Curves**: Yield derivation from a zero curve by linear interpolation
//!
//! Every entry point validates its inputs before any arithmetic and fails
//! with [`GiltError::InvalidInput`](gilts_core::GiltError).
//!
//! ## Example
//!
//! ```rust
//! use gilts_bonds::zero_coupon;
//!
//! let price = zero_coupon::price(1000.0, 0.03, "2035-02-17", Some("2025-02-17")).unwrap();
//! assert_eq!(price, 740.7);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::float_cmp)]

pub mod curves;
pub mod fixed_coupon;
mod validation;
pub mod zero_coupon;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curves::{derive_yield_from_zero_curve, CurvePoint, ZeroCurve};
    pub use crate::fixed_coupon::{
        dmo_price, price_with_curve, quasi_coupon_period, total_periods, QuasiCouponPeriod,
    };
    pub use crate::zero_coupon::{
        convexity, dv01, dv01_closed_form, duration, Duration, DurationKind, Dv01Options,
        ZeroCouponPricer,
    };
}
