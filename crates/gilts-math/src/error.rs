//! Interpolation errors.
//!
//! [`MathError`] describes why a curve could not be built or queried. Callers
//! in the pricing layer surface it as [`GiltError::InvalidInput`].

use gilts_core::GiltError;
use thiserror::Error;

/// Result alias for interpolation routines.
pub type MathResult<T> = Result<T, MathError>;

/// Failure building or evaluating an interpolator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Query outside the data with extrapolation switched off.
    #[error("{x} lies outside the data range [{min}, {max}] and extrapolation is disabled")]
    ExtrapolationNotAllowed {
        /// Queried abscissa.
        x: f64,
        /// First abscissa.
        min: f64,
        /// Last abscissa.
        max: f64,
    },

    /// Too few points to define the curve.
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData {
        /// Points needed.
        required: usize,
        /// Points supplied.
        actual: usize,
    },

    /// Malformed data or query.
    #[error("{reason}")]
    InvalidInput {
        /// What was wrong.
        reason: String,
    },
}

impl MathError {
    /// Builds an [`MathError::InvalidInput`].
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Builds an [`MathError::InsufficientData`].
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}

impl From<MathError> for GiltError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InvalidInput { reason } => GiltError::invalid_input(reason),
            other => GiltError::invalid_input(other.to_string()),
        }
    }
}
