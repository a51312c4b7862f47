//! Zero curve yield derivation.
//!
//! A [`ZeroCurve`] holds yields keyed by maturity in months. Yields between
//! curve points are linearly interpolated and anything shorter than three
//! months takes the yield of the shortest point. Any other target outside the
//! curve, past the longest point or before a first point later than three
//! months, is extrapolated along the segment joining the two longest points.

use log::debug;
use serde::{Deserialize, Serialize};

use gilts_core::{GiltError, GiltResult};
use gilts_math::interpolation::{Interpolator, LinearInterpolator};

/// Maturities (in months) below this take the shortest curve yield.
pub const SHORT_END_MONTHS: f64 = 3.0;

/// A single point on a zero curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Maturity in months.
    pub maturity_months: f64,
    /// Annual yield as a decimal.
    pub annual_yield: f64,
}

impl CurvePoint {
    /// Creates a curve point.
    #[must_use]
    pub fn new(maturity_months: f64, annual_yield: f64) -> Self {
        Self {
            maturity_months,
            annual_yield,
        }
    }
}

impl From<(f64, f64)> for CurvePoint {
    fn from((maturity_months, annual_yield): (f64, f64)) -> Self {
        Self::new(maturity_months, annual_yield)
    }
}

/// Zero curve sorted by maturity.
///
/// # Example
///
/// ```rust
/// use gilts_bonds::curves::{CurvePoint, ZeroCurve};
///
/// let curve = ZeroCurve::new(vec![
///     CurvePoint::new(3.0, 0.01),
///     CurvePoint::new(6.0, 0.015),
///     CurvePoint::new(12.0, 0.02),
///     CurvePoint::new(18.0, 0.025),
/// ])
/// .unwrap();
///
/// assert!((curve.yield_at(9.0).unwrap() - 0.0175).abs() < 1e-12);
/// assert!((curve.yield_at(24.0).unwrap() - 0.03).abs() < 1e-12);
/// assert_eq!(curve.yield_at(1.0).unwrap(), 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct ZeroCurve {
    points: Vec<CurvePoint>,
    interpolator: LinearInterpolator,
    // Two longest points, extrapolating in both directions
    tail: LinearInterpolator,
}

impl ZeroCurve {
    /// Builds a curve from points in any order.
    ///
    /// # Errors
    ///
    /// Returns `GiltError::InvalidInput` if there are fewer than two points, a
    /// value is not finite, a maturity is negative, or two points share a
    /// maturity.
    pub fn new(points: impl IntoIterator<Item = CurvePoint>) -> GiltResult<Self> {
        let mut points: Vec<CurvePoint> = points.into_iter().collect();

        if points.len() < 2 {
            return Err(GiltError::invalid_input(
                "Zero curve must contain at least two points.",
            ));
        }
        for point in &points {
            if !(point.maturity_months.is_finite() && point.annual_yield.is_finite()) {
                return Err(GiltError::invalid_input(
                    "Zero curve points must be finite numbers.",
                ));
            }
            if point.maturity_months < 0.0 {
                return Err(GiltError::invalid_input(format!(
                    "Zero curve maturity {} must be non-negative.",
                    point.maturity_months
                )));
            }
        }

        points.sort_by(|a, b| a.maturity_months.total_cmp(&b.maturity_months));

        if let Some(pair) = points
            .windows(2)
            .find(|w| w[0].maturity_months == w[1].maturity_months)
        {
            return Err(GiltError::invalid_input(format!(
                "Zero curve contains duplicate maturity {}.",
                pair[0].maturity_months
            )));
        }

        let interpolator = LinearInterpolator::new(
            points.iter().map(|p| p.maturity_months).collect(),
            points.iter().map(|p| p.annual_yield).collect(),
        )?;
        let last_two = &points[points.len() - 2..];
        let tail = LinearInterpolator::new(
            last_two.iter().map(|p| p.maturity_months).collect(),
            last_two.iter().map(|p| p.annual_yield).collect(),
        )?
        .with_extrapolation();

        Ok(Self {
            points,
            interpolator,
            tail,
        })
    }

    /// Returns the curve points in ascending maturity order.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Returns the shortest-maturity point.
    pub fn shortest(&self) -> CurvePoint {
        self.points[0]
    }

    /// Returns the yield for a maturity in months.
    ///
    /// # Errors
    ///
    /// Returns `GiltError::InvalidInput` if the target is negative or not finite.
    pub fn yield_at(&self, target_months: f64) -> GiltResult<f64> {
        if !target_months.is_finite() {
            return Err(GiltError::invalid_input(
                "Target maturity must be a finite number.",
            ));
        }
        if target_months < 0.0 {
            return Err(GiltError::invalid_input(
                "Target maturity must be non-negative.",
            ));
        }

        if target_months < SHORT_END_MONTHS {
            return Ok(self.shortest().annual_yield);
        }

        if self.interpolator.in_range(target_months) {
            return Ok(self.interpolator.interpolate(target_months)?);
        }

        debug!(
            "extrapolating zero curve to {target_months} months along [{}, {}]",
            self.tail.min_x(),
            self.tail.max_x()
        );
        Ok(self.tail.interpolate(target_months)?)
    }
}

/// Derives the yield for `target_maturity` months from `(months, yield)` pairs.
///
/// # Example
///
/// ```rust
/// use gilts_bonds::curves::derive_yield_from_zero_curve;
///
/// let curve = [(3.0, 0.03), (6.0, 0.025), (12.0, 0.02)];
/// let y = derive_yield_from_zero_curve(&curve, 18.0).unwrap();
/// assert!((y - 0.015).abs() < 1e-12);
/// ```
pub fn derive_yield_from_zero_curve(
    zero_curve: &[(f64, f64)],
    target_maturity: f64,
) -> GiltResult<f64> {
    ZeroCurve::new(zero_curve.iter().copied().map(CurvePoint::from))?.yield_at(target_maturity)
}
