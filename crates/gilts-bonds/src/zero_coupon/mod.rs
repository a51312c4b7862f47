//! Zero-coupon gilt analytics.
//!
//! - [`ZeroCouponPricer`]: continuous-compounding price with a configurable
//!   near-maturity window and an injectable clock
//! - [`duration()`], [`convexity()`]: closed-form risk measures
//! - [`dv01()`], [`dv01_closed_form`]: price value of a basis point

pub mod convexity;
pub mod duration;
pub mod dv01;
pub mod pricer;

pub use convexity::convexity;
pub use duration::{duration, Duration, DurationKind};
pub use dv01::{dv01, dv01_closed_form, Dv01Options};
pub use pricer::{continuous_price, price, time_to_maturity, ZeroCouponPricer};
