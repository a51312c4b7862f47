//! Pricing configuration.
//!
//! Controls the rounding, near-maturity and DV01 parameters shared by the
//! zero-coupon pricers. Every field has a serde default, so a partial JSON
//! document only needs the values it overrides.

use serde::{Deserialize, Serialize};

use crate::error::{GiltError, GiltResult};
use crate::rounding::{INTERMEDIATE_DECIMALS, PRICE_DECIMALS};

/// Default number of calendar days below which a zero-coupon gilt trades at par.
pub const DEFAULT_NEAR_MATURITY_DAYS: i64 = 3;

/// Default DV01 yield bump: one basis point.
pub const DEFAULT_DV01_BUMP: f64 = 0.0001;

/// Default DV01 maturity threshold: seven days expressed in years.
pub const DEFAULT_DV01_MATURITY_THRESHOLD: f64 = 7.0 / 365.0;

/// Default compounding / coupon frequency (semi-annual).
pub const DEFAULT_FREQUENCY: u32 = 2;

/// Largest number of decimal places a price may be rounded to.
const MAX_DECIMALS: u32 = 15;

/// Pricing configuration for gilt valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Days-to-maturity below which the zero-coupon pricer returns face value.
    #[serde(default = "default_near_maturity_days")]
    pub near_maturity_days: i64,

    /// Decimal places for reported prices.
    #[serde(default = "default_price_decimals")]
    pub price_decimals: u32,

    /// Decimal places for intermediate price values.
    #[serde(default = "default_intermediate_decimals")]
    pub intermediate_decimals: u32,

    /// Yield bump used by the finite-difference DV01.
    #[serde(default = "default_dv01_bump")]
    pub dv01_bump: f64,

    /// Time to maturity (years) at or below which DV01 is reported as zero.
    #[serde(default = "default_dv01_maturity_threshold")]
    pub dv01_maturity_threshold: f64,

    /// Compounding frequency used when a caller does not supply one.
    #[serde(default = "default_frequency")]
    pub default_frequency: u32,
}

fn default_near_maturity_days() -> i64 {
    DEFAULT_NEAR_MATURITY_DAYS
}

fn default_price_decimals() -> u32 {
    PRICE_DECIMALS
}

fn default_intermediate_decimals() -> u32 {
    INTERMEDIATE_DECIMALS
}

fn default_dv01_bump() -> f64 {
    DEFAULT_DV01_BUMP
}

fn default_dv01_maturity_threshold() -> f64 {
    DEFAULT_DV01_MATURITY_THRESHOLD
}

fn default_frequency() -> u32 {
    DEFAULT_FREQUENCY
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::uk_gilt()
    }
}

impl PricingConfig {
    /// Creates the DMO-style gilt configuration.
    #[must_use]
    pub fn uk_gilt() -> Self {
        Self {
            near_maturity_days: default_near_maturity_days(),
            price_decimals: default_price_decimals(),
            intermediate_decimals: default_intermediate_decimals(),
            dv01_bump: default_dv01_bump(),
            dv01_maturity_threshold: default_dv01_maturity_threshold(),
            default_frequency: default_frequency(),
        }
    }

    /// Sets the near-maturity cutoff (days).
    #[must_use]
    pub fn with_near_maturity_days(mut self, days: i64) -> Self {
        self.near_maturity_days = days;
        self
    }

    /// Loads a configuration from JSON and validates it.
    ///
    /// # Errors
    ///
    /// Returns `GiltError::InvalidInput` if the document cannot be parsed or
    /// fails validation.
    pub fn from_json(json: &str) -> GiltResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GiltError::invalid_input(format!("Invalid pricing configuration: {e}")))?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Validates the configuration, returning every violation found.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.near_maturity_days < 0 {
            errors.push(ValidationError::new(
                "near_maturity_days",
                "Near-maturity cutoff cannot be negative",
            ));
        }

        if self.price_decimals > MAX_DECIMALS {
            errors.push(ValidationError::new(
                "price_decimals",
                format!("Price decimals cannot exceed {MAX_DECIMALS}"),
            ));
        }

        if self.intermediate_decimals > MAX_DECIMALS {
            errors.push(ValidationError::new(
                "intermediate_decimals",
                format!("Intermediate decimals cannot exceed {MAX_DECIMALS}"),
            ));
        }

        if !(self.dv01_bump.is_finite() && self.dv01_bump > 0.0) {
            errors.push(ValidationError::new(
                "dv01_bump",
                "DV01 bump must be a positive number",
            ));
        }

        if !(self.dv01_maturity_threshold.is_finite() && self.dv01_maturity_threshold >= 0.0) {
            errors.push(ValidationError::new(
                "dv01_maturity_threshold",
                "DV01 maturity threshold must be a non-negative number",
            ));
        }

        if self.default_frequency == 0 {
            errors.push(ValidationError::new(
                "default_frequency",
                "Compounding frequency must be positive",
            ));
        }

        errors
    }

    /// Validates and returns an error describing every violation.
    pub fn validate_or_error(&self) -> GiltResult<()> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }

        let reason = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(GiltError::invalid_input(reason))
    }
}

/// A single configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
