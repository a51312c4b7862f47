//! Continuous-compounding zero-coupon gilt pricer.
//!
//! ## Formula
//!
//! ```text
//! P = F × e^(-y × t)
//! ```
//!
//! where `t` is the Actual/Actual time to maturity measured on the
//! settlement year's basis. Bonds within the near-maturity window (fewer than
//! three days by default) are not priced and return their face value.

use log::debug;

use gilts_core::daycounts::{ActualActual, DayCount};
use gilts_core::rounding::round_to;
use gilts_core::{Clock, Date, GiltError, GiltResult, PricingConfig, SystemClock};

use crate::validation::{require_face_value, require_finite};

/// Below one day the continuous formula is skipped and face value is returned.
const ONE_DAY: f64 = 1.0 / 365.0;

/// Zero-coupon gilt pricer.
///
/// Carries the [`PricingConfig`] that drives rounding, the near-maturity
/// window and DV01 parameters, and the [`Clock`] used when a settlement date
/// is omitted.
///
/// # Example
///
/// ```rust
/// use gilts_bonds::zero_coupon::ZeroCouponPricer;
/// use gilts_core::{Date, FixedClock};
///
/// let clock = FixedClock::new(Date::parse("2025-02-17").unwrap());
/// let pricer = ZeroCouponPricer::with_clock(clock);
///
/// // Settlement defaults to the clock's date
/// assert_eq!(pricer.price(1000.0, 0.03, "2035-02-17", None).unwrap(), 740.7);
/// ```
#[derive(Debug, Clone)]
pub struct ZeroCouponPricer<C: Clock = SystemClock> {
    pub(crate) config: PricingConfig,
    clock: C,
}

impl ZeroCouponPricer<SystemClock> {
    /// Creates a pricer with the default configuration and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ZeroCouponPricer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ZeroCouponPricer<C> {
    /// Creates a pricer with the default configuration and the given clock.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            config: PricingConfig::default(),
            clock,
        }
    }

    /// Replaces the configuration after validating it.
    pub fn with_config(mut self, config: PricingConfig) -> GiltResult<Self> {
        config.validate_or_error()?;
        self.config = config;
        Ok(self)
    }

    /// Returns the pricing configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Parses the settlement date, falling back to the clock's date.
    pub fn resolve_settlement(&self, settlement_date: Option<&str>) -> GiltResult<Date> {
        match settlement_date {
            Some(s) => Date::parse(s),
            None => {
                let today = self.clock.today();
                debug!("settlement date not supplied, using {today}");
                Ok(today)
            }
        }
    }

    /// Time to maturity in years on the Actual/Actual (settlement year) basis.
    ///
    /// Returns exactly `0.0` when fewer than `near_maturity_days` calendar days
    /// remain.
    ///
    /// # Errors
    ///
    /// Returns `GiltError::InvalidInput` if maturity is on or before settlement.
    pub fn time_to_maturity(&self, settlement: Date, maturity: Date) -> GiltResult<f64> {
        if maturity <= settlement {
            return Err(GiltError::invalid_input(
                "Maturity date must be after the settlement date.",
            ));
        }

        if maturity < settlement.add_days(self.config.near_maturity_days) {
            return Ok(0.0);
        }

        Ok(ActualActual.year_fraction(settlement, maturity))
    }

    /// Continuous-compounding price for a known time to maturity.
    ///
    /// The raw value is rounded to the intermediate precision and then to the
    /// price precision. Times below one day return the face value rounded to
    /// the price precision.
    pub fn continuous_price(
        &self,
        face_value: f64,
        annual_yield: f64,
        time_to_maturity: f64,
    ) -> GiltResult<f64> {
        require_finite(face_value, "Face value")?;
        require_finite(annual_yield, "Annual yield")?;
        require_finite(time_to_maturity, "Time to maturity")?;

        if time_to_maturity < 0.0 {
            return Err(GiltError::invalid_input(
                "Time to maturity cannot be negative.",
            ));
        }

        if time_to_maturity < ONE_DAY {
            return Ok(round_to(face_value, self.config.price_decimals));
        }

        let raw = face_value * (-annual_yield * time_to_maturity).exp();
        let intermediate = round_to(raw, self.config.intermediate_decimals);
        Ok(round_to(intermediate, self.config.price_decimals))
    }

    /// Prices a zero-coupon gilt from ISO date strings.
    ///
    /// # Arguments
    ///
    /// * `face_value` - Redemption amount (must be positive)
    /// * `annual_yield` - Continuously compounded yield as a decimal; may be negative
    /// * `maturity_date` - Maturity as `YYYY-MM-DD`
    /// * `settlement_date` - Settlement as `YYYY-MM-DD`, or `None` for the clock's date
    ///
    /// # Errors
    ///
    /// Returns `GiltError::InvalidInput` for a non-positive face value, a
    /// malformed date, or maturity on or before settlement.
    pub fn price(
        &self,
        face_value: f64,
        annual_yield: f64,
        maturity_date: &str,
        settlement_date: Option<&str>,
    ) -> GiltResult<f64> {
        require_face_value(face_value)?;
        require_finite(annual_yield, "Annual yield")?;
        let maturity = Date::parse(maturity_date)?;
        let settlement = self.resolve_settlement(settlement_date)?;

        self.price_on(face_value, annual_yield, settlement, maturity)
    }

    /// Prices a zero-coupon gilt from parsed dates.
    pub fn price_on(
        &self,
        face_value: f64,
        annual_yield: f64,
        settlement: Date,
        maturity: Date,
    ) -> GiltResult<f64> {
        require_face_value(face_value)?;
        require_finite(annual_yield, "Annual yield")?;

        let time_to_maturity = self.time_to_maturity(settlement, maturity)?;
        if time_to_maturity == 0.0 {
            debug!(
                "{} days to maturity is inside the near-maturity window, returning face value",
                settlement.days_between(&maturity)
            );
            return Ok(face_value);
        }

        self.continuous_price(face_value, annual_yield, time_to_maturity)
    }
}

/// Prices a zero-coupon gilt with the default configuration.
///
/// A missing settlement date defaults to today's date.
///
/// # Example
///
/// ```rust
/// use gilts_bonds::zero_coupon::price;
///
/// assert_eq!(price(1000.0, 0.03, "2035-02-17", Some("2025-02-17")).unwrap(), 740.7);
/// assert_eq!(price(1000.0, -0.01, "2035-02-17", Some("2025-02-17")).unwrap(), 1105.23);
/// ```
pub fn price(
    face_value: f64,
    annual_yield: f64,
    maturity_date: &str,
    settlement_date: Option<&str>,
) -> GiltResult<f64> {
    ZeroCouponPricer::new().price(face_value, annual_yield, maturity_date, settlement_date)
}

/// Actual/Actual time to maturity with the default near-maturity window.
pub fn time_to_maturity(settlement: Date, maturity: Date) -> GiltResult<f64> {
    ZeroCouponPricer::new().time_to_maturity(settlement, maturity)
}

/// Continuous-compounding price with the default rounding.
pub fn continuous_price(
    face_value: f64,
    annual_yield: f64,
    time_to_maturity: f64,
) -> GiltResult<f64> {
    ZeroCouponPricer::new().continuous_price(face_value, annual_yield, time_to_maturity)
}
