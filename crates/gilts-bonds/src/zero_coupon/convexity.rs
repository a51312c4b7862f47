//! Zero-coupon convexity.

use gilts_core::GiltResult;

use crate::validation::{periodic_growth, require_finite, require_frequency, require_time_to_maturity};

/// Calculates the convexity of a zero-coupon bond.
///
/// ```text
/// C = t × (t + 1) / (1 + y/f)^2
/// ```
///
/// The result is not rounded.
///
/// # Arguments
///
/// * `time_to_maturity` - Years to maturity (must be positive)
/// * `annual_yield` - Yield as a decimal; may be negative
/// * `compounding_frequency` - Periods per year, usually
///   [`DEFAULT_FREQUENCY`](gilts_core::config::DEFAULT_FREQUENCY)
pub fn convexity(
    time_to_maturity: f64,
    annual_yield: f64,
    compounding_frequency: u32,
) -> GiltResult<f64> {
    let t = require_time_to_maturity(time_to_maturity)?;
    require_finite(annual_yield, "Annual yield")?;
    let frequency = require_frequency(compounding_frequency)?;

    let growth = periodic_growth(annual_yield, frequency)?;
    Ok(t * (t + 1.0) / growth.powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_convexity() {
        // 30 / 1.025^2
        assert_relative_eq!(convexity(5.0, 0.05, 2).unwrap(), 28.554431885782275, max_relative = 1e-12);
        assert_eq!(convexity(5.0, 0.0, 2).unwrap(), 30.0);
    }

    #[test]
    fn test_negative_yield_raises_convexity() {
        assert!(convexity(5.0, -0.01, 2).unwrap() > 30.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(convexity(0.0, 0.05, 2).is_err());
        assert!(convexity(-5.0, 0.05, 2).is_err());
        assert!(convexity(5.0, 0.05, 0).is_err());
        assert!(convexity(5.0, f64::NAN, 2).is_err());
    }
}
