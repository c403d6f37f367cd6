//! Uniform one-dimensional coordinate grids.

use ndarray as nd;
use crate::{
    Arr1,
    DEF_UNIFORM_TOL,
    error::{ DftResult, GridError, LengthError },
};

/// Minimum number of points for the centered three-point stencils.
pub const MIN_POINTS: usize = 3;

/// Strictly increasing, uniformly spaced coordinate array.
///
/// The number of points is carried explicitly and every array used alongside
/// a `Grid` is checked against it, so there is no ambient notion of grid size.
#[derive(Clone, Debug)]
pub struct Grid {
    // coordinate array
    x: nd::Array1<f64>,
    // grid spacing
    dx: f64,
    // number of points
    n: usize,
}

impl Grid {
    /// Create a new `Grid` from "linspace-style" arguments (start, inclusive
    /// end, and a number of points).
    pub fn new_linspace(start: f64, end: f64, n: usize) -> DftResult<Self> {
        let x: nd::Array1<f64> = nd::Array1::linspace(start, end, n);
        Self::new_points(x, n)
    }

    /// Create a new `Grid` from "range-style" arguments (start, exclusive end,
    /// and a step size).
    pub fn new_range(start: f64, end: f64, step: f64) -> DftResult<Self> {
        let x: nd::Array1<f64> = nd::Array1::range(start, end, step);
        let n = x.len();
        Self::new_points(x, n)
    }

    /// Create a new `Grid` from a bare coordinate array and its expected
    /// number of points.
    ///
    /// The array must hold exactly `n >= 3` finite, strictly increasing and
    /// uniformly spaced values.
    pub fn new_points(x: nd::Array1<f64>, n: usize) -> DftResult<Self> {
        if x.len() != n {
            return Err(GridError::PointCount { expected: n, got: x.len() }.into());
        }
        if n < MIN_POINTS {
            return Err(GridError::TooFewPoints { n, min: MIN_POINTS }.into());
        }
        if let Some(k) = x.iter().position(|xk| !xk.is_finite()) {
            return Err(GridError::NonFinite(k).into());
        }
        let dx = x[1] - x[0];
        if dx <= 0.0 {
            return Err(GridError::NonIncreasing(dx).into());
        }
        // relative to the spacing, plus rounding in the coordinates themselves
        let xmax = x.iter().fold(0.0_f64, |acc, xk| acc.max(xk.abs()));
        let tol = DEF_UNIFORM_TOL * dx + 8.0 * f64::EPSILON * xmax;
        let nonuniform
            = x.iter().zip(x.iter().skip(1)).enumerate()
            .map(|(k, (xk, xkp1))| (k, *xkp1 - *xk))
            .find(|(_, d)| (*d - dx).abs() > tol);
        if let Some((index, spacing)) = nonuniform {
            return Err(
                GridError::NonUniform { index, spacing, expected: dx }.into());
        }
        Ok(Self { x, dx, n })
    }

    /// Get a reference to the coordinate array.
    pub fn x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the grid spacing.
    pub fn dx(&self) -> f64 { self.dx }

    /// Get the number of points.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }

    /// Return an error if `a` is not sampled on this grid.
    pub fn check<S, A>(&self, a: &Arr1<S>) -> Result<(), LengthError>
    where S: nd::Data<Elem = A>
    {
        LengthError::check_len(a.len(), self.n)
    }

    /// Return the grid reflected through the origin, `x → -x`, with points
    /// reordered so that it is still increasing.
    ///
    /// Arrays sampled on `self` map to the mirrored grid by reversing them.
    pub fn mirrored(&self) -> Self {
        let x: nd::Array1<f64> = self.x.iter().rev().map(|xk| -xk).collect();
        Self { x, dx: self.dx, n: self.n }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DftError;

    #[test]
    fn linspace_spacing() {
        let grid = Grid::new_linspace(-1.0, 1.0, 21).unwrap();
        assert_eq!(grid.len(), 21);
        assert!((grid.dx() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn rejects_short_grid() {
        let err = Grid::new_linspace(0.0, 1.0, 2).unwrap_err();
        assert!(matches!(
            err,
            DftError::Grid(GridError::TooFewPoints { n: 2, .. })
        ));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn rejects_count_mismatch() {
        let x = nd::array![0.0, 1.0, 2.0, 3.0];
        assert!(matches!(
            Grid::new_points(x, 5),
            Err(DftError::Grid(GridError::PointCount { expected: 5, got: 4 }))
        ));
    }

    #[test]
    fn rejects_nonuniform() {
        let x = nd::array![0.0, 1.0, 2.0, 3.5, 4.5];
        assert!(matches!(
            Grid::new_points(x, 5),
            Err(DftError::Grid(GridError::NonUniform { index: 2, .. }))
        ));
    }

    #[test]
    fn far_from_origin() {
        let grid = Grid::new_linspace(1e8, 1e8 + 1.0, 1001).unwrap();
        assert_eq!(grid.len(), 1001);
        assert!((grid.dx() - 1e-3).abs() < 1e-7);
        let x = nd::array![1e8, 1e8 + 1.0, 1e8 + 2.0, 1e8 + 3.5];
        assert!(matches!(
            Grid::new_points(x, 4),
            Err(DftError::Grid(GridError::NonUniform { index: 2, .. }))
        ));
    }

    #[test]
    fn rejects_decreasing() {
        let x = nd::array![2.0, 1.0, 0.0];
        assert!(matches!(
            Grid::new_points(x, 3),
            Err(DftError::Grid(GridError::NonIncreasing(_)))
        ));
    }

    #[test]
    fn rejects_nan() {
        let x = nd::array![0.0, f64::NAN, 2.0];
        assert!(matches!(
            Grid::new_points(x, 3),
            Err(DftError::Grid(GridError::NonFinite(1)))
        ));
    }

    #[test]
    fn mirror_is_increasing() {
        let grid = Grid::new_linspace(0.0, 4.0, 5).unwrap();
        let m = grid.mirrored();
        assert_eq!(m.x().to_vec(), vec![-4.0, -3.0, -2.0, -1.0, -0.0]);
        assert_eq!(m.dx(), grid.dx());
    }

    #[test]
    fn check_length() {
        let grid = Grid::new_linspace(0.0, 1.0, 11).unwrap();
        assert!(grid.check(&nd::Array1::<f64>::zeros(11)).is_ok());
        assert!(grid.check(&nd::Array1::<f64>::zeros(10)).is_err());
    }
}
