//! Interpolation over tabulated points.
//!
//! [`LinearInterpolator`] joins consecutive points with straight lines and
//! can optionally continue the boundary segments past either end.

mod linear;

pub use linear::LinearInterpolator;

use crate::error::MathResult;

/// A function sampled at known abscissae.
pub trait Interpolator: Send + Sync {
    /// Evaluates the curve at `x`.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Smallest abscissa in the data.
    fn min_x(&self) -> f64;

    /// Largest abscissa in the data.
    fn max_x(&self) -> f64;

    /// True if `x` lies between the first and last abscissa (inclusive).
    fn in_range(&self, x: f64) -> bool {
        (self.min_x()..=self.max_x()).contains(&x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XS: [f64; 4] = [3.0, 6.0, 12.0, 18.0];
    const YS: [f64; 4] = [0.01, 0.015, 0.02, 0.025];

    fn sample() -> LinearInterpolator {
        LinearInterpolator::new(XS.to_vec(), YS.to_vec()).unwrap()
    }

    #[test]
    fn test_knots_are_reproduced() {
        let interp = sample();
        for (x, y) in XS.into_iter().zip(YS) {
            assert_eq!(interp.interpolate(x).unwrap(), y);
        }
    }

    #[test]
    fn test_range_through_trait_object() {
        let interp: Box<dyn Interpolator> = Box::new(sample());
        assert_eq!(interp.min_x(), 3.0);
        assert_eq!(interp.max_x(), 18.0);
        assert!(interp.in_range(3.0));
        assert!(interp.in_range(18.0));
        assert!(!interp.in_range(2.9));
        assert!(!interp.in_range(f64::NAN));
    }
}
