//! DV01 for zero-coupon gilts.
//!
//! DV01 is the price change for a one basis point rise in yield. Two
//! methods are provided:
//!
//! - [`dv01`]: reprices the bond with the yield bumped by one basis point
//!   and reports the difference of the two rounded prices
//! - [`dv01_closed_form`]: discrete-compounding closed form
//!
//! ```text
//! n = t × f
//! P = F / (1 + y/f)^n
//! DV01 = t × P / (100 × (1 + y/f)^(n+1))
//! ```
//!
//! Both report exactly zero inside the maturity threshold (seven days by
//! default), where the bond is treated as insensitive to yield. The
//! finite-difference method includes the threshold itself; the closed form
//! applies the formula at the threshold.

use log::debug;
use serde::{Deserialize, Serialize};

use gilts_core::daycounts::{Actual365, DayCount};
use gilts_core::rounding::round_to;
use gilts_core::{Clock, Date, GiltError, GiltResult};

use super::pricer::ZeroCouponPricer;
use crate::validation::{
    periodic_growth, require_face_value, require_finite, require_frequency,
    require_time_to_maturity,
};

/// Per-call overrides for the finite-difference DV01.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dv01Options {
    /// Decimal places of the result; the configured price precision if `None`.
    ///
    /// An explicit value, zero included, rounds the difference of the two
    /// prices to that many places. It is never treated as unset.
    pub decimals: Option<u32>,
    /// Maturity threshold in years; the configured threshold if `None`.
    pub maturity_threshold: Option<f64>,
}

impl Dv01Options {
    /// Sets the number of decimal places of the result.
    #[must_use]
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Sets the maturity threshold in years.
    #[must_use]
    pub fn with_maturity_threshold(mut self, threshold: f64) -> Self {
        self.maturity_threshold = Some(threshold);
        self
    }
}

fn require_threshold(threshold: f64) -> GiltResult<f64> {
    if threshold.is_finite() && threshold >= 0.0 {
        Ok(threshold)
    } else {
        Err(GiltError::invalid_input(
            "Maturity threshold must be a non-negative number.",
        ))
    }
}

impl<C: Clock> ZeroCouponPricer<C> {
    /// Finite-difference DV01 from ISO date strings.
    ///
    /// The threshold test measures time to maturity as actual days over 365.
    ///
    /// # Errors
    ///
    /// Returns `GiltError::InvalidInput` for a malformed date, maturity on or
    /// before settlement, or any input rejected by the pricer.
    pub fn dv01(
        &self,
        face_value: f64,
        yield_to_maturity: f64,
        maturity_date: &str,
        settlement_date: Option<&str>,
        options: Dv01Options,
    ) -> GiltResult<f64> {
        let maturity = Date::parse(maturity_date)?;
        let settlement = self.resolve_settlement(settlement_date)?;

        self.dv01_on(face_value, yield_to_maturity, settlement, maturity, options)
    }

    /// Finite-difference DV01 from parsed dates.
    pub fn dv01_on(
        &self,
        face_value: f64,
        yield_to_maturity: f64,
        settlement: Date,
        maturity: Date,
        options: Dv01Options,
    ) -> GiltResult<f64> {
        require_face_value(face_value)?;
        require_finite(yield_to_maturity, "Yield to maturity")?;
        let threshold = require_threshold(
            options
                .maturity_threshold
                .unwrap_or(self.config.dv01_maturity_threshold),
        )?;

        let time_to_maturity = require_time_to_maturity(Actual365.year_fraction(settlement, maturity))?;
        if time_to_maturity <= threshold {
            debug!("time to maturity {time_to_maturity} is within DV01 threshold {threshold}");
            return Ok(0.0);
        }

        let base = self.price_on(face_value, yield_to_maturity, settlement, maturity)?;
        let bumped = self.price_on(
            face_value,
            yield_to_maturity + self.config.dv01_bump,
            settlement,
            maturity,
        )?;

        let decimals = options.decimals.unwrap_or(self.config.price_decimals);
        Ok(round_to(base - bumped, decimals))
    }
}

/// Finite-difference DV01 with the default configuration.
///
/// # Example
///
/// ```rust
/// use gilts_bonds::zero_coupon::{dv01, Dv01Options};
///
/// let value = dv01(1_000_000.0, 0.03, "2035-02-17", Some("2025-02-17"), Dv01Options::default()).unwrap();
/// assert_eq!(value, 740.73);
/// ```
pub fn dv01(
    face_value: f64,
    yield_to_maturity: f64,
    maturity_date: &str,
    settlement_date: Option<&str>,
    options: Dv01Options,
) -> GiltResult<f64> {
    ZeroCouponPricer::new().dv01(
        face_value,
        yield_to_maturity,
        maturity_date,
        settlement_date,
        options,
    )
}

/// Closed-form DV01 under discrete compounding.
///
/// # Arguments
///
/// * `face_value` - Face value (zero is allowed and gives zero)
/// * `annual_yield` - Yield as a decimal; may be negative
/// * `time_to_maturity` - Years to maturity (must be positive)
/// * `compounding_frequency` - Compounding periods per year, usually
///   [`DEFAULT_FREQUENCY`](gilts_core::config::DEFAULT_FREQUENCY)
/// * `maturity_threshold` - Years below which DV01 is zero, usually
///   [`DEFAULT_DV01_MATURITY_THRESHOLD`](gilts_core::config::DEFAULT_DV01_MATURITY_THRESHOLD)
pub fn dv01_closed_form(
    face_value: f64,
    annual_yield: f64,
    time_to_maturity: f64,
    compounding_frequency: u32,
    maturity_threshold: f64,
) -> GiltResult<f64> {
    require_finite(face_value, "Face value")?;
    if face_value < 0.0 {
        return Err(GiltError::invalid_input("Face value cannot be negative."));
    }
    require_finite(annual_yield, "Annual yield")?;
    let time_to_maturity = require_time_to_maturity(time_to_maturity)?;
    let frequency = require_frequency(compounding_frequency)?;
    let threshold = require_threshold(maturity_threshold)?;

    if time_to_maturity < threshold {
        debug!("time to maturity {time_to_maturity} is below DV01 threshold {threshold}");
        return Ok(0.0);
    }

    let growth = periodic_growth(annual_yield, frequency)?;
    let periods = time_to_maturity * frequency;
    let price = face_value / growth.powf(periods);

    Ok(time_to_maturity * price / (100.0 * growth.powf(periods + 1.0)))
}
