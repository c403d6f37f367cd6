//! Finite-difference derivative operators on a uniform grid.
//!
//! Both operators are centered three-point stencils:
//! ```text
//! (D  f)[i] = (f[i + 1] - f[i - 1]) / 2h
//! (D2 f)[i] = (f[i + 1] - 2 f[i] + f[i - 1]) / h²
//! ```
//! The stencils cannot reach past the ends of the grid, so instead of using a
//! one-sided scheme the six entries
//! ```text
//! [0, 0]  [0, 1]  [1, 0]  [N - 1, N - 2]  [N - 2, N - 1]  [N - 1, N - 1]
//! ```
//! are set to zero in both operators. Rows 0 and N - 1 are then identically
//! zero and rows 1 and N - 2 keep only their inward neighbor, which amounts to
//! assuming that the functions being differentiated vanish at the edges of
//! the domain. Derivative values at the boundaries should not be relied upon.
//!
//! Operators can be stored densely or as three diagonals (see [`Repr`]); both
//! forms produce identical results through [`Operator::apply`].

use ndarray as nd;
use crate::{
    Arr1,
    error::{ DftResult, LengthError },
    grid::Grid,
};

/// Storage format for an [`Operator`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Repr {
    /// Fully materialized N×N matrix.
    #[default]
    Dense,
    /// Lower, main, and upper diagonals only.
    Banded,
}

/// Tridiagonal matrix stored as its three diagonals.
#[derive(Clone, Debug, PartialEq)]
pub struct Tridiag {
    // sub-diagonal, A[i + 1, i]; length N - 1
    lower: nd::Array1<f64>,
    // main diagonal, A[i, i]; length N
    diag: nd::Array1<f64>,
    // super-diagonal, A[i, i + 1]; length N - 1
    upper: nd::Array1<f64>,
}

impl Tridiag {
    /// Create a new `Tridiag` from its sub-, main, and super-diagonals.
    ///
    /// Returns [`LengthError`] unless both off-diagonals are exactly one
    /// element shorter than the main diagonal.
    pub fn new(
        lower: nd::Array1<f64>,
        diag: nd::Array1<f64>,
        upper: nd::Array1<f64>,
    ) -> Result<Self, LengthError>
    {
        LengthError::check_len(lower.len() + 1, diag.len())?;
        LengthError::check_len(upper.len() + 1, diag.len())?;
        Ok(Self { lower, diag, upper })
    }

    /// Get a reference to the sub-diagonal.
    pub fn lower(&self) -> &nd::Array1<f64> { &self.lower }

    /// Get a reference to the main diagonal.
    pub fn diag(&self) -> &nd::Array1<f64> { &self.diag }

    /// Get a reference to the super-diagonal.
    pub fn upper(&self) -> &nd::Array1<f64> { &self.upper }

    /// Return the number of rows (equivalently, columns).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.diag.len() }

    // fill all three diagonals with constants
    fn from_stencil(n: usize, lower: f64, diag: f64, upper: f64) -> Self {
        Self {
            lower: nd::Array1::from_elem(n - 1, lower),
            diag: nd::Array1::from_elem(n, diag),
            upper: nd::Array1::from_elem(n - 1, upper),
        }
    }

    // zero the entries that would need points outside the grid
    fn zero_boundaries(&mut self) {
        let n = self.diag.len();
        self.diag[0] = 0.0;
        self.upper[0] = 0.0;
        self.lower[0] = 0.0;
        self.lower[n - 2] = 0.0;
        self.upper[n - 2] = 0.0;
        self.diag[n - 1] = 0.0;
    }

    /// Get the matrix element at row `i`, column `j`.
    ///
    /// *Panics if either index is out of bounds*.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        let n = self.diag.len();
        assert!(i < n && j < n, "index ({i}, {j}) out of bounds for size {n}");
        if i == j {
            self.diag[i]
        } else if j == i + 1 {
            self.upper[i]
        } else if i == j + 1 {
            self.lower[j]
        } else {
            0.0
        }
    }

    // caller checks that f has length N
    fn dot<S>(&self, f: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        let n = self.diag.len();
        let mut g: nd::Array1<f64> = &self.diag * f;
        g.slice_mut(nd::s![0..n - 1])
            .zip_mut_with(&(&self.upper * &f.slice(nd::s![1..n])), |gk, uk| {
                *gk += *uk;
            });
        g.slice_mut(nd::s![1..n])
            .zip_mut_with(&(&self.lower * &f.slice(nd::s![0..n - 1])), |gk, lk| {
                *gk += *lk;
            });
        g
    }

    /// Materialize as a dense matrix.
    pub fn to_dense(&self) -> nd::Array2<f64> {
        let n = self.diag.len();
        let mut A: nd::Array2<f64> = nd::Array2::from_diag(&self.diag);
        A.slice_mut(nd::s![1..n, 0..n - 1]).diag_mut().assign(&self.lower);
        A.slice_mut(nd::s![0..n - 1, 1..n]).diag_mut().assign(&self.upper);
        A
    }
}

// storage behind an `Operator`; shapes are checked on construction
#[derive(Clone, Debug, PartialEq)]
enum Storage {
    Dense(nd::Array2<f64>),
    Banded(Tridiag),
}

/// A square linear operator in either storage format.
///
/// Operators are built by [`first_derivative`] and [`second_derivative`], or
/// from caller-supplied matrices through the shape-checked
/// [`Operator::from_dense`] and [`Operator::from_banded`].
#[derive(Clone, Debug, PartialEq)]
pub struct Operator(Storage);

impl Operator {
    fn from_tridiag(t: Tridiag, repr: Repr) -> Self {
        match repr {
            Repr::Dense => Self(Storage::Dense(t.to_dense())),
            Repr::Banded => Self(Storage::Banded(t)),
        }
    }

    /// Wrap a dense matrix, returning [`LengthError`] if it is not square.
    pub fn from_dense(A: nd::Array2<f64>) -> Result<Self, LengthError> {
        LengthError::check_len(A.nrows(), A.ncols())?;
        Ok(Self(Storage::Dense(A)))
    }

    /// Wrap a tridiagonal matrix.
    pub fn from_banded(t: Tridiag) -> Self { Self(Storage::Banded(t)) }

    /// Return the storage format.
    pub fn repr(&self) -> Repr {
        match &self.0 {
            Storage::Dense(_) => Repr::Dense,
            Storage::Banded(_) => Repr::Banded,
        }
    }

    /// Return the number of rows (equivalently, columns).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match &self.0 {
            Storage::Dense(A) => A.nrows(),
            Storage::Banded(t) => t.len(),
        }
    }

    /// Get the matrix element at row `i`, column `j`.
    ///
    /// *Panics if either index is out of bounds*.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        match &self.0 {
            Storage::Dense(A) => A[[i, j]],
            Storage::Banded(t) => t.get(i, j),
        }
    }

    /// Apply the operator to an array sampled on the same grid.
    pub fn apply<S>(&self, f: &Arr1<S>) -> DftResult<nd::Array1<f64>>
    where S: nd::Data<Elem = f64>
    {
        LengthError::check_len(f.len(), self.len())?;
        match &self.0 {
            Storage::Dense(A) => Ok(A.dot(f)),
            Storage::Banded(t) => Ok(t.dot(f)),
        }
    }

    /// Return a dense copy of the operator.
    pub fn to_dense(&self) -> nd::Array2<f64> {
        match &self.0 {
            Storage::Dense(A) => A.clone(),
            Storage::Banded(t) => t.to_dense(),
        }
    }

    /// Consume `self` and return the dense matrix.
    pub fn into_dense(self) -> nd::Array2<f64> {
        match self.0 {
            Storage::Dense(A) => A,
            Storage::Banded(t) => t.to_dense(),
        }
    }
}

/// Build the centered first-derivative operator for a grid.
pub fn first_derivative(grid: &Grid, repr: Repr) -> Operator {
    let n = grid.len();
    let c = (2.0 * grid.dx()).recip();
    log::debug!("building first-derivative operator: n = {n}, repr = {repr:?}");
    let mut t = Tridiag::from_stencil(n, -c, 0.0, c);
    t.zero_boundaries();
    Operator::from_tridiag(t, repr)
}

/// Build the centered second-derivative operator for a grid.
pub fn second_derivative(grid: &Grid, repr: Repr) -> Operator {
    let n = grid.len();
    let ondx2 = grid.dx().powi(2).recip();
    log::debug!("building second-derivative operator: n = {n}, repr = {repr:?}");
    let mut t = Tridiag::from_stencil(n, ondx2, -2.0 * ondx2, ondx2);
    t.zero_boundaries();
    Operator::from_tridiag(t, repr)
}
