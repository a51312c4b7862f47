//! DMO price/yield formula for conventional gilts.
//!
//! Prices per £100 nominal with semi-annual compounding:
//!
//! ```text
//! v = 1 / (1 + y/2)
//! n ≥ 1:  P = [ (c/2) × v × (1 - v^n) / (1 - v) + 100 × v^n ] × v^(r/s)
//! n < 1:  P = (c/2) × v^(r/s)
//! ```
//!
//! where `r` is the number of days from settlement to the next quasi-coupon
//! date, `s` the number of days in the quasi-coupon period and `n` the number
//! of full quasi-coupon periods from the next quasi-coupon date to maturity.
//!
//! Ex-dividend periods are not modelled; the next coupon is always paid.
//!
//! # References
//!
//! - UK Debt Management Office: Formulae for Calculating Gilt Prices from Yields

use log::trace;
use serde::{Deserialize, Serialize};

use gilts_core::rounding::round_price;
use gilts_core::{Date, GiltError, GiltResult};

use crate::validation::{periodic_growth, require_finite};

/// Nominal the DMO formula is quoted on.
pub const DMO_FACE_VALUE: f64 = 100.0;

/// Coupons per year for conventional gilts.
const DMO_FREQUENCY: f64 = 2.0;

/// Quasi-coupon period containing the settlement date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuasiCouponPeriod {
    /// Quasi-coupon date starting the period.
    pub prior: Date,
    /// Quasi-coupon date ending the period.
    pub next: Date,
    /// Days from settlement to `next` (`r`).
    pub days_to_next: i64,
    /// Days from `prior` to `next` (`s`).
    pub days_in_period: i64,
    /// Full quasi-coupon periods from `next` to maturity (`n`).
    pub full_periods: i64,
}

impl QuasiCouponPeriod {
    /// Returns `r / s`, the discounting exponent to the next quasi-coupon date.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.days_to_next as f64 / self.days_in_period as f64
    }
}

fn anchor_date(year: i32, month: u32, day: u32) -> GiltResult<Date> {
    Date::from_ymd(year, month, day).map_err(|_| {
        GiltError::invalid_input(format!(
            "Quasi-coupon date {year}-{month:02}-{day:02} does not exist for a maturity on day {day}."
        ))
    })
}

/// Derives the quasi-coupon schedule used by the DMO formula.
///
/// The quasi-coupon dates are anchored on June and December with the
/// maturity's day of month. Maturities in July to December take June of the
/// maturity year and June of the following year; maturities in January to
/// June take December of the previous year and June of the maturity year.
///
/// # Errors
///
/// Returns `GiltError::InvalidInput` if settlement is not before maturity or
/// the maturity's day of month does not exist in an anchor month.
///
/// # Example
///
/// ```rust
/// use gilts_bonds::fixed_coupon::quasi_coupon_period;
/// use gilts_core::Date;
///
/// let settlement = Date::parse("2025-03-01").unwrap();
/// let maturity = Date::parse("2025-06-07").unwrap();
///
/// let period = quasi_coupon_period(settlement, maturity).unwrap();
/// assert_eq!(period.prior.to_string(), "2024-12-07");
/// assert_eq!(period.next.to_string(), "2025-06-07");
/// assert_eq!(period.days_to_next, 98);
/// assert_eq!(period.days_in_period, 182);
/// ```
pub fn quasi_coupon_period(settlement: Date, maturity: Date) -> GiltResult<QuasiCouponPeriod> {
    if settlement >= maturity {
        return Err(GiltError::invalid_input(
            "Settlement date must be before maturity date.",
        ));
    }

    let day = maturity.day();
    let (prior, next) = if maturity.month() > 6 {
        (
            anchor_date(maturity.year(), 6, day)?,
            anchor_date(maturity.year() + 1, 6, day)?,
        )
    } else {
        (
            anchor_date(maturity.year() - 1, 12, day)?,
            anchor_date(maturity.year(), 6, day)?,
        )
    };

    let mut full_periods = 0;
    let mut current = next;
    while current < maturity {
        current = current.add_months(6)?;
        full_periods += 1;
    }
    if current != maturity {
        full_periods -= 1;
    }

    Ok(QuasiCouponPeriod {
        prior,
        next,
        days_to_next: settlement.days_between(&next),
        days_in_period: prior.days_between(&next),
        full_periods,
    })
}

/// Applies the DMO formula for discount factor `v` over `period`.
fn discounted_value(coupon_rate: f64, v: f64, period: &QuasiCouponPeriod) -> f64 {
    let coupon = coupon_rate / DMO_FREQUENCY;
    let to_next = v.powf(period.fraction());

    if period.full_periods >= 1 {
        let n = period.full_periods as i32;
        // Annuity factor v + v^2 + ... + v^n
        let annuity = if v == 1.0 {
            f64::from(n)
        } else {
            v * (1.0 - v.powi(n)) / (1.0 - v)
        };
        (coupon * annuity + DMO_FACE_VALUE * v.powi(n)) * to_next
    } else {
        coupon * to_next
    }
}

/// Dirty price per £100 nominal from parsed dates.
pub fn dmo_price_on(
    face_value: f64,
    coupon_rate: f64,
    settlement: Date,
    maturity: Date,
    redemption_yield: f64,
) -> GiltResult<f64> {
    if settlement >= maturity {
        return Err(GiltError::invalid_input(
            "Settlement date must be before maturity date.",
        ));
    }
    if face_value != DMO_FACE_VALUE {
        return Err(GiltError::invalid_input(
            "Face value must be equal to 100, as DMO formula is per £100 nominal.",
        ));
    }
    require_finite(coupon_rate, "Coupon rate")?;
    require_finite(redemption_yield, "Redemption yield")?;

    let period = quasi_coupon_period(settlement, maturity)?;
    trace!("DMO quasi-coupon period {period:?}");

    let v = 1.0 / periodic_growth(redemption_yield, DMO_FREQUENCY)?;
    let price = discounted_value(coupon_rate, v, &period);

    Ok(round_price(price))
}

/// Dirty price per £100 nominal using the DMO formula.
///
/// # Arguments
///
/// * `face_value` - Must be exactly 100
/// * `coupon_rate` - Annual coupon per £100 nominal (e.g. 4.25)
/// * `settlement_date` - Settlement as `YYYY-MM-DD`
/// * `maturity_date` - Maturity as `YYYY-MM-DD`
/// * `redemption_yield` - Nominal redemption yield as a decimal
///
/// # Errors
///
/// Returns `GiltError::InvalidInput` for a malformed date, settlement on or
/// after maturity, a face value other than 100, or a quasi-coupon date that
/// does not exist.
pub fn dmo_price(
    face_value: f64,
    coupon_rate: f64,
    settlement_date: &str,
    maturity_date: &str,
    redemption_yield: f64,
) -> GiltResult<f64> {
    let settlement = Date::parse(settlement_date)?;
    let maturity = Date::parse(maturity_date)?;

    dmo_price_on(face_value, coupon_rate, settlement, maturity, redemption_yield)
}
