//! Input checks shared by the pricers.

use gilts_core::{GiltError, GiltResult};

/// Rejects NaN and infinite values.
pub(crate) fn require_finite(value: f64, name: &str) -> GiltResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GiltError::invalid_input(format!(
            "{name} must be a finite number."
        )))
    }
}

/// Rejects non-finite and non-positive face values.
pub(crate) fn require_face_value(face_value: f64) -> GiltResult<f64> {
    if face_value.is_finite() && face_value > 0.0 {
        Ok(face_value)
    } else {
        Err(GiltError::invalid_input("Face value must be positive."))
    }
}

/// Rejects non-finite and non-positive times to maturity.
pub(crate) fn require_time_to_maturity(time_to_maturity: f64) -> GiltResult<f64> {
    if time_to_maturity.is_finite() && time_to_maturity > 0.0 {
        Ok(time_to_maturity)
    } else {
        Err(GiltError::invalid_input("Time to maturity must be positive."))
    }
}

/// Rejects a zero compounding frequency.
pub(crate) fn require_frequency(frequency: u32) -> GiltResult<f64> {
    if frequency == 0 {
        Err(GiltError::invalid_input(
            "Compounding frequency must be positive.",
        ))
    } else {
        Ok(f64::from(frequency))
    }
}

/// Returns `1 + yield / frequency`, rejecting yields at or below -100% per period.
pub(crate) fn periodic_growth(annual_yield: f64, frequency: f64) -> GiltResult<f64> {
    let growth = 1.0 + annual_yield / frequency;
    if growth > 0.0 {
        Ok(growth)
    } else {
        Err(GiltError::invalid_input(format!(
            "Yield {annual_yield} is at or below -100% per period."
        )))
    }
}
