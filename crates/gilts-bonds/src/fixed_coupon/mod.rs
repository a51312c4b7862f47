//! Fixed-coupon gilt pricing.
//!
//! - [`dmo_price`]: DMO price/yield formula per £100 nominal
//! - [`price_with_curve`]: coupons and redemption discounted off a
//!   per-period bond curve

pub mod curve;
pub mod dmo;

pub use curve::{price_with_curve, price_with_curve_on, total_periods};
pub use dmo::{dmo_price, dmo_price_on, quasi_coupon_period, QuasiCouponPeriod, DMO_FACE_VALUE};
