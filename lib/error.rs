//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow]. Variants of
//! [`DftError`] fall into three classes, each with its own predicate:
//!
//! - invalid input (bad grids, out-of-range parameters):
//!   [`DftError::is_invalid_input`]
//! - dimension mismatches between arrays and the grid they are used with:
//!   [`DftError::is_dimension_mismatch`]
//! - numerical instabilities that would otherwise surface as NaN or infinity:
//!   [`DftError::is_numerical_instability`]
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        Self::check_len(a.len(), b.len())
    }

    pub(crate) fn check_len(na: usize, nb: usize) -> Result<(), Self> {
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when a coordinate array cannot be used as a uniform grid.
#[derive(Debug, Error)]
pub enum GridError {
    /// Fewer points than the centered stencils need.
    #[error("grid must have at least {min} points; got {n}")]
    TooFewPoints { n: usize, min: usize },

    /// The declared point count disagrees with the coordinate array.
    #[error("grid declared with {expected} points but the coordinate array has {got}")]
    PointCount { expected: usize, got: usize },

    /// A coordinate is NaN or infinite.
    #[error("grid coordinate at index {0} is not finite")]
    NonFinite(usize),

    /// The first spacing is not strictly positive.
    #[error("grid must be strictly increasing; got spacing {0}")]
    NonIncreasing(f64),

    /// Some spacing differs from the first one beyond tolerance.
    #[error("grid is not uniform: spacing {spacing} at index {index} differs from {expected}")]
    NonUniform { index: usize, spacing: f64, expected: f64 },
}

/// Returned when a computation would produce NaN or infinite values.
#[derive(Debug, Error)]
pub enum NumericalError {
    /// The norm integral of a wavefunction is not a positive finite number.
    #[error("wavefunction norm integral must be positive and finite; got {0}")]
    ZeroNorm(f64),

    /// A density value is negative, so fractional powers are undefined.
    #[error("density must be non-negative; got {value} at index {index}")]
    NegativeDensity { index: usize, value: f64 },

    /// An input or output array holds a NaN or infinite value.
    #[error("non-finite value in {what} at index {index}")]
    NonFinite { what: &'static str, index: usize },

    /// A scalar result came out NaN or infinite.
    #[error("{0} evaluated to a non-finite value")]
    NonFiniteResult(&'static str),
}

impl NumericalError {
    pub(crate) fn check_finite<S>(
        what: &'static str,
        a: &nd::ArrayBase<S, nd::Ix1>,
    ) -> Result<(), Self>
    where S: nd::Data<Elem = f64>
    {
        match a.iter().position(|ak| !ak.is_finite()) {
            Some(index) => Err(Self::NonFinite { what, index }),
            None => Ok(()),
        }
    }
}

/// Top-level error for all operations in this crate.
#[derive(Debug, Error)]
pub enum DftError {
    /// [`GridError`]
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    /// Returned when a non-positive or non-finite softening parameter is
    /// encountered.
    #[error("softening parameter must be positive and finite; got {0}")]
    BadSoftening(f64),

    /// Returned when a non-positive or non-finite finite-difference step is
    /// encountered.
    #[error("finite-difference step must be positive and finite; got {0}")]
    BadStep(f64),

    /// Returned when the maximum occupancy of an orbital is below 1 (or not
    /// finite), leaving no room for a singly occupied orbital.
    #[error("maximum occupancy per orbital must be at least 1; got {0}")]
    BadMaxElectron(f64),

    /// Returned when fewer orbitals are supplied than there are occupied
    /// states.
    #[error("{needed} occupied orbitals required but only {got} supplied")]
    TooFewOrbitals { needed: usize, got: usize },

    /// Returned when an integrand has fewer than two samples.
    #[error("integration requires at least 2 samples; got {0}")]
    TooFewSamples(usize),

    /// [`LengthError`]
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(#[from] LengthError),

    /// [`NumericalError`]
    #[error("numerical instability: {0}")]
    NumericalInstability(#[from] NumericalError),
}

impl DftError {
    pub(crate) fn check_softening(eps: f64) -> Result<(), Self> {
        (eps > 0.0 && eps.is_finite())
            .then_some(()).ok_or(Self::BadSoftening(eps))
    }

    pub(crate) fn check_max_electron(max_electron: f64) -> Result<(), Self> {
        (max_electron >= 1.0 && max_electron.is_finite())
            .then_some(()).ok_or(Self::BadMaxElectron(max_electron))
    }

    /// Return `true` if `self` is a precondition violation on the inputs
    /// themselves (as opposed to a shape or numerical problem).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::Grid(_)
            | Self::BadSoftening(_)
            | Self::BadStep(_)
            | Self::BadMaxElectron(_)
            | Self::TooFewOrbitals { .. }
            | Self::TooFewSamples(_)
        )
    }

    /// Return `true` if `self` is a `DimensionMismatch`.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch(_))
    }

    /// Return `true` if `self` is a `NumericalInstability`.
    pub fn is_numerical_instability(&self) -> bool {
        matches!(self, Self::NumericalInstability(_))
    }
}

pub type DftResult<T> = Result<T, DftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_classes_are_disjoint() {
        let invalid = [
            DftError::from(GridError::NonIncreasing(-1.0)),
            DftError::BadSoftening(0.0),
            DftError::BadStep(-1.0),
            DftError::BadMaxElectron(0.5),
            DftError::TooFewOrbitals { needed: 3, got: 2 },
            DftError::TooFewSamples(1),
        ];
        for err in invalid.iter() {
            assert!(err.is_invalid_input());
            assert!(!err.is_dimension_mismatch());
            assert!(!err.is_numerical_instability());
        }
        let mismatch = DftError::from(LengthError(3, 4));
        assert!(mismatch.is_dimension_mismatch());
        assert!(!mismatch.is_invalid_input());
        let unstable = DftError::from(NumericalError::ZeroNorm(0.0));
        assert!(unstable.is_numerical_instability());
        assert!(!unstable.is_invalid_input());
    }

    #[test]
    fn parameter_checks() {
        assert!(DftError::check_softening(0.1).is_ok());
        assert!(matches!(
            DftError::check_softening(f64::INFINITY),
            Err(DftError::BadSoftening(_))
        ));
        assert!(DftError::check_max_electron(1.0).is_ok());
        assert!(DftError::check_max_electron(f64::NAN).is_err());
        assert!(LengthError::check_len(2, 3).is_err());
    }
}
