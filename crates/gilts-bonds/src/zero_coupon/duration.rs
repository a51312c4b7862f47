//! Zero-coupon duration.
//!
//! A zero-coupon bond has a single cash flow, so its Macaulay duration is
//! the time to maturity. Modified duration divides by one plus the periodic
//! yield:
//!
//! ```text
//! D_mod = D_mac / (1 + y/f)
//! ```
//!
//! Under continuous compounding (no frequency) the two coincide.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use gilts_core::{GiltError, GiltResult};

use crate::validation::{periodic_growth, require_finite, require_frequency, require_time_to_maturity};

/// Duration measure to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationKind {
    /// Weighted-average time to the cash flows, in years.
    Macaulay,
    /// Percentage price sensitivity to a change in yield.
    Modified,
}

impl DurationKind {
    /// Returns the canonical name of the measure.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DurationKind::Macaulay => "Macaulay",
            DurationKind::Modified => "Modified",
        }
    }
}

impl fmt::Display for DurationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DurationKind {
    type Err = GiltError;

    /// Parses `"Macaulay"` or `"Modified"`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "macaulay" => Ok(DurationKind::Macaulay),
            "modified" => Ok(DurationKind::Modified),
            _ => Err(GiltError::invalid_input(format!(
                "Unsupported duration type '{s}'. Use 'Macaulay' or 'Modified'."
            ))),
        }
    }
}

/// A duration value tagged with its measure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Duration {
    /// Which measure the value is.
    pub kind: DurationKind,
    /// Duration in years.
    pub value: f64,
}

impl Duration {
    /// Returns the duration in years.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} duration {:.6}", self.kind, self.value)
    }
}

impl From<Duration> for f64 {
    fn from(d: Duration) -> Self {
        d.value
    }
}

/// Calculates the duration of a zero-coupon bond.
///
/// # Arguments
///
/// * `time_to_maturity` - Years to maturity (must be positive)
/// * `ytm` - Yield to maturity as a decimal; may be negative
/// * `kind` - Macaulay or Modified
/// * `compounding_frequency` - Periods per year, or `None` for continuous compounding
///
/// # Example
///
/// ```rust
/// use gilts_bonds::zero_coupon::{duration, DurationKind};
///
/// let d = duration(5.0, 0.05, DurationKind::Modified, Some(2)).unwrap();
/// assert!((d.as_f64() - 4.878048780487805).abs() < 1e-12);
/// ```
pub fn duration(
    time_to_maturity: f64,
    ytm: f64,
    kind: DurationKind,
    compounding_frequency: Option<u32>,
) -> GiltResult<Duration> {
    let time_to_maturity = require_time_to_maturity(time_to_maturity)?;
    require_finite(ytm, "Yield to maturity")?;
    let frequency = compounding_frequency.map(require_frequency).transpose()?;

    let value = match (kind, frequency) {
        (DurationKind::Macaulay, _) | (DurationKind::Modified, None) => time_to_maturity,
        (DurationKind::Modified, Some(f)) => time_to_maturity / periodic_growth(ytm, f)?,
    };

    Ok(Duration { kind, value })
}
