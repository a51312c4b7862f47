//! Error types for the gilt analytics library.
//!
//! Every public operation validates its inputs before doing any arithmetic and
//! reports violations through a single structured error kind,
//! [`GiltError::InvalidInput`].

use thiserror::Error;

/// A specialized Result type for gilt analytics operations.
pub type GiltResult<T> = Result<T, GiltError>;

/// The error type for gilt analytics operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GiltError {
    /// A parameter failed validation (malformed date, non-positive face value,
    /// settlement on or after maturity, unsupported convention, short curve, ...).
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl GiltError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error for a date string that is not `YYYY-MM-DD`.
    #[must_use]
    pub fn invalid_date(value: impl AsRef<str>) -> Self {
        Self::invalid_input(format!(
            "Invalid date format. Dates must be in 'YYYY-MM-DD' format: '{}'",
            value.as_ref()
        ))
    }

    /// Returns the human-readable reason carried by the error.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidInput { reason } => reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GiltError::invalid_input("Face value must be positive.");
        assert_eq!(err.to_string(), "Invalid input: Face value must be positive.");
    }

    #[test]
    fn test_invalid_date_message() {
        let err = GiltError::invalid_date("35/02/2035");
        assert!(err.reason().contains("YYYY-MM-DD"));
        assert!(err.reason().contains("35/02/2035"));
    }
}
