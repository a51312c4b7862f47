//! Linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Linear interpolation between data points.
///
/// Connects consecutive points with straight lines. Querying a knot returns
/// its y value exactly. With extrapolation enabled, points beyond either end
/// follow the line through the two boundary points.
///
/// # Example
///
/// ```rust
/// use gilts_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let months = vec![3.0, 6.0, 12.0, 18.0];
/// let yields = vec![0.01, 0.015, 0.02, 0.025];
///
/// let interp = LinearInterpolator::new(months, yields)
///     .unwrap()
///     .with_extrapolation();
/// assert!((interp.interpolate(9.0).unwrap() - 0.0175).abs() < 1e-12);
/// assert!((interp.interpolate(24.0).unwrap() - 0.03).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, the lengths differ,
    /// a value is not finite, or `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(MathError::invalid_input("data points must be finite"));
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }

        Ok(Self {
            xs,
            ys,
            allow_extrapolation: false,
        })
    }

    /// Continues the first and last segments beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Finds the index i of the segment [xs[i], xs[i+1]] used for x.
    ///
    /// Points outside the range map to the boundary segments.
    fn find_segment(&self, x: f64) -> usize {
        let last_segment = self.xs.len() - 2;
        match self
            .xs
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => i.min(last_segment),
            Err(i) => i.saturating_sub(1).min(last_segment),
        }
    }

    fn check_range(&self, x: f64) -> MathResult<()> {
        if x.is_nan() {
            return Err(MathError::invalid_input("query point must be a number"));
        }
        if !self.allow_extrapolation && !self.in_range(x) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }
        Ok(())
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        if let Some(i) = self.xs.iter().position(|&knot| knot == x) {
            return Ok(self.ys[i]);
        }

        let i = self.find_segment(x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        Ok(y0 + (y1 - y0) * (x - x0) / (x1 - x0))
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_interpolation() {
        let xs = vec![3.0, 6.0, 12.0];
        let ys = vec![0.01, 0.015, 0.02];

        let interp = LinearInterpolator::new(xs, ys).unwrap();

        assert_eq!(interp.interpolate(6.0).unwrap(), 0.015);
        assert_relative_eq!(interp.interpolate(9.0).unwrap(), 0.0175, epsilon = 1e-12);
        assert_relative_eq!(
            interp.interpolate(4.0).unwrap(),
            0.01 + (0.015 - 0.01) * (4.0 - 3.0) / (6.0 - 3.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_extrapolation_disabled() {
        let interp = LinearInterpolator::new(vec![3.0, 6.0], vec![0.01, 0.015]).unwrap();

        assert!(matches!(
            interp.interpolate(12.0),
            Err(MathError::ExtrapolationNotAllowed { .. })
        ));
        assert!(interp.interpolate(1.0).is_err());
    }

    #[test]
    fn test_extrapolation_enabled() {
        let interp = LinearInterpolator::new(vec![3.0, 6.0, 12.0], vec![0.03, 0.025, 0.02])
            .unwrap()
            .with_extrapolation();

        // Negative slope continues past the long end
        assert_relative_eq!(interp.interpolate(18.0).unwrap(), 0.015, epsilon = 1e-12);
        // And backwards past the short end
        assert_relative_eq!(interp.interpolate(0.0).unwrap(), 0.035, epsilon = 1e-12);
    }

    #[test]
    fn test_insufficient_points() {
        assert_eq!(
            LinearInterpolator::new(vec![3.0], vec![0.01]).unwrap_err(),
            MathError::insufficient_data(2, 1)
        );
    }

    #[test]
    fn test_length_mismatch() {
        assert!(LinearInterpolator::new(vec![3.0, 6.0], vec![0.01]).is_err());
    }

    #[test]
    fn test_unsorted_or_duplicate_error() {
        assert!(LinearInterpolator::new(vec![6.0, 3.0], vec![0.01, 0.02]).is_err());
        assert!(LinearInterpolator::new(vec![3.0, 3.0], vec![0.01, 0.02]).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(LinearInterpolator::new(vec![3.0, f64::NAN], vec![0.01, 0.02]).is_err());
        assert!(LinearInterpolator::new(vec![3.0, 6.0], vec![0.01, f64::INFINITY]).is_err());

        let interp = LinearInterpolator::new(vec![3.0, 6.0], vec![0.01, 0.02])
            .unwrap()
            .with_extrapolation();
        assert!(interp.interpolate(f64::NAN).is_err());
    }
}
