//! Fixed-coupon pricing off a per-period bond curve.
//!
//! Each coupon is discounted at the curve yield for its own period; the
//! redemption is discounted at the yield of the final period:
//!
//! ```text
//! P = Σ_{i=1..N} (F × c/f) / (1 + y_i/f)^i  +  F / (1 + y_N/f)^N
//! ```
//!
//! `N` is the whole number of coupon periods implied by the day count
//! convention's year fraction.

use log::debug;

use gilts_core::daycounts::DayCountConvention;
use gilts_core::rounding::{round_price, round_to, INTERMEDIATE_DECIMALS};
use gilts_core::{Date, GiltError, GiltResult};

use crate::validation::{periodic_growth, require_face_value, require_finite, require_frequency};

/// Whole coupon periods between settlement and maturity.
///
/// Truncates `year_fraction × frequency` towards zero.
///
/// # Errors
///
/// Returns `GiltError::InvalidInput` if maturity is not after settlement or
/// the frequency is zero.
///
/// # Example
///
/// ```rust
/// use gilts_bonds::fixed_coupon::total_periods;
/// use gilts_core::daycounts::DayCountConvention;
/// use gilts_core::Date;
///
/// let settlement = Date::parse("2025-02-17").unwrap();
/// let maturity = Date::parse("2035-02-17").unwrap();
/// let n = total_periods(settlement, maturity, 2, DayCountConvention::ActualActual).unwrap();
/// assert_eq!(n, 20);
/// ```
pub fn total_periods(
    settlement: Date,
    maturity: Date,
    frequency: u32,
    convention: DayCountConvention,
) -> GiltResult<usize> {
    if settlement >= maturity {
        return Err(GiltError::invalid_input(
            "Maturity date must be after the settlement date.",
        ));
    }
    let frequency = require_frequency(frequency)?;

    let years = convention.year_fraction(settlement, maturity);
    Ok((years * frequency).trunc() as usize)
}

/// Prices a fixed-coupon gilt off a bond curve from parsed inputs.
pub fn price_with_curve_on(
    face_value: f64,
    coupon_rate: f64,
    settlement: Date,
    maturity: Date,
    bond_curve: &[f64],
    convention: DayCountConvention,
    coupon_frequency: u32,
) -> GiltResult<f64> {
    require_face_value(face_value)?;
    if !(coupon_rate.is_finite() && coupon_rate >= 0.0) {
        return Err(GiltError::invalid_input(
            "Annual coupon rate must be non-negative.",
        ));
    }
    if bond_curve.is_empty() {
        return Err(GiltError::invalid_input("Bond curve must not be empty."));
    }
    if maturity <= settlement {
        return Err(GiltError::invalid_input(
            "Maturity date must be after the settlement date.",
        ));
    }
    for &rate in bond_curve {
        require_finite(rate, "Bond curve yield")?;
    }

    let periods = total_periods(settlement, maturity, coupon_frequency, convention)?;
    if bond_curve.len() < periods {
        return Err(GiltError::invalid_input(format!(
            "Bond curve must have at least as many entries as the number of periods until maturity ({periods}), got {}.",
            bond_curve.len()
        )));
    }

    if periods == 0 {
        debug!("no whole coupon period before maturity, pricing at face value");
        return Ok(round_price(face_value));
    }

    let frequency = f64::from(coupon_frequency);
    let coupon = face_value * coupon_rate / frequency;

    let mut price = 0.0;
    for (i, &rate) in bond_curve.iter().take(periods).enumerate() {
        let growth = periodic_growth(rate, frequency)?;
        price += coupon / growth.powi(i as i32 + 1);
    }

    let final_growth = periodic_growth(bond_curve[periods - 1], frequency)?;
    price += face_value / final_growth.powi(periods as i32);

    Ok(round_price(round_to(price, INTERMEDIATE_DECIMALS)))
}

/// Prices a fixed-coupon gilt off a bond curve.
///
/// # Arguments
///
/// * `face_value` - Redemption amount (must be positive)
/// * `coupon_rate` - Annual coupon rate as a decimal (must be non-negative)
/// * `settlement_date` - Settlement as `YYYY-MM-DD`
/// * `maturity_date` - Maturity as `YYYY-MM-DD`
/// * `bond_curve` - One yield per coupon period, at least as many as periods to maturity
/// * `day_count_convention` - `"Actual/Actual"`, `"30/360"` or `"Actual/365"`
/// * `coupon_frequency` - Coupons per year (2 for gilts)
///
/// # Example
///
/// ```rust
/// use gilts_bonds::fixed_coupon::price_with_curve;
///
/// let curve = vec![0.03; 20];
/// let price = price_with_curve(
///     1000.0, 0.05, "2025-02-17", "2035-02-17", &curve, "Actual/Actual", 2,
/// ).unwrap();
/// assert_eq!(price, 1171.69);
/// ```
pub fn price_with_curve(
    face_value: f64,
    coupon_rate: f64,
    settlement_date: &str,
    maturity_date: &str,
    bond_curve: &[f64],
    day_count_convention: &str,
    coupon_frequency: u32,
) -> GiltResult<f64> {
    let settlement = Date::parse(settlement_date)?;
    let maturity = Date::parse(maturity_date)?;
    let convention: DayCountConvention = day_count_convention.parse()?;

    price_with_curve_on(
        face_value,
        coupon_rate,
        settlement,
        maturity,
        bond_curve,
        convention,
        coupon_frequency,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn test_total_periods() {
        let s = date("2025-02-17");
        let m = date("2035-02-17");
        assert_eq!(total_periods(s, m, 2, DayCountConvention::ActualActual).unwrap(), 20);
        assert_eq!(total_periods(s, m, 2, DayCountConvention::Thirty360).unwrap(), 20);
        assert_eq!(total_periods(s, m, 4, DayCountConvention::Actual365).unwrap(), 40);
        // Short of a full period
        assert_eq!(
            total_periods(s, date("2025-08-10"), 2, DayCountConvention::ActualActual).unwrap(),
            0
        );
        assert!(total_periods(m, s, 2, DayCountConvention::ActualActual).is_err());
        assert!(total_periods(s, m, 0, DayCountConvention::ActualActual).is_err());
    }

    #[test]
    fn test_flat_curve() {
        let curve = vec![0.03; 20];
        let price =
            price_with_curve(1000.0, 0.05, "2025-02-17", "2035-02-17", &curve, "Actual/Actual", 2)
                .unwrap();
        assert_eq!(price, 1171.69);
    }

    #[test]
    fn test_upward_sloping_curve() {
        let curve = [0.03, 0.035, 0.04, 0.045];
        let price =
            price_with_curve(100.0, 0.04, "2025-02-17", "2027-02-17", &curve, "30/360", 2).unwrap();
        assert_eq!(price, 99.1);
    }

    #[test]
    fn test_longer_curve_is_allowed() {
        let curve = [0.04, 0.04, 0.09, 0.09];
        let price =
            price_with_curve(100.0, 0.0, "2025-02-17", "2026-02-17", &curve, "Actual/365", 2).unwrap();
        // Zero coupon: only the redemption, discounted at the second entry
        assert_eq!(price, 96.12);
    }

    #[test]
    fn test_no_whole_period_prices_at_face() {
        let price =
            price_with_curve(100.0, 0.05, "2025-02-17", "2025-05-17", &[0.04], "Actual/Actual", 2)
                .unwrap();
        assert_eq!(price, 100.0);
    }

    #[test]
    fn test_curve_too_short() {
        let err = price_with_curve(
            1000.0,
            0.05,
            "2025-02-17",
            "2035-02-17",
            &[0.03; 19],
            "Actual/Actual",
            2,
        )
        .unwrap_err();
        assert!(err.reason().contains("at least as many entries"));
    }

    #[test]
    fn test_invalid_inputs() {
        let curve = [0.03; 20];
        let call = |face: f64, coupon: f64, s: &str, m: &str, curve: &[f64], dc: &str, f: u32| {
            price_with_curve(face, coupon, s, m, curve, dc, f)
        };

        assert!(call(0.0, 0.05, "2025-02-17", "2035-02-17", &curve, "Actual/Actual", 2).is_err());
        assert!(call(1000.0, -0.01, "2025-02-17", "2035-02-17", &curve, "Actual/Actual", 2).is_err());
        assert!(call(1000.0, 0.05, "2025-02-17", "2035-02-17", &[], "Actual/Actual", 2).is_err());
        assert!(call(1000.0, 0.05, "2035-02-17", "2025-02-17", &curve, "Actual/Actual", 2).is_err());
        assert!(call(1000.0, 0.05, "2025-02-17", "2035-02-17", &curve, "Actual/Actual", 0).is_err());
        assert!(call(1000.0, 0.05, "2025/02/17", "2035-02-17", &curve, "Actual/Actual", 2).is_err());
        assert!(call(1000.0, 0.05, "2025-02-17", "2035-02-17", &[f64::NAN; 20], "Actual/Actual", 2).is_err());
    }

    #[test]
    fn test_unsupported_convention() {
        let err = price_with_curve(
            1000.0,
            0.05,
            "2025-02-17",
            "2035-02-17",
            &[0.03; 20],
            "ACT/360",
            2,
        )
        .unwrap_err();
        assert!(err.reason().contains("Unsupported day count convention"));
    }
}
