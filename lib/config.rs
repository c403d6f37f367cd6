//! Grid-bound configuration and a thin interface over the rest of the crate.
//!
//! A [`Model`] pairs a [`Grid`] with a [`Config`], so that the operator
//! representation, maximum orbital occupancy, and Coulomb softening are chosen
//! once and applied consistently by every call an SCF loop makes.

use ndarray as nd;
use ndarray_linalg::Scalar;
use crate::{
    Arr1,
    Arr2,
    DEF_MAX_ELECTRON,
    density,
    error::{ DftError, DftResult },
    functional::{ self, Functional, DEF_SOFTENING },
    grid::Grid,
    operator::{ self, Operator, Repr },
    quad,
};

/// Numerical settings shared by all operations on a [`Model`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Storage format for derivative operators (default: dense).
    pub repr: Repr,
    /// Maximum number of electrons per orbital (default: `2.0`).
    pub max_electron: Option<f64>,
    /// Coulomb kernel softening (default: `0.1`).
    pub softening: Option<f64>,
}

impl Config {
    /// Return the maximum occupancy, falling back to the default.
    pub fn max_electron(&self) -> f64 {
        self.max_electron.unwrap_or(DEF_MAX_ELECTRON)
    }

    /// Return the softening parameter, falling back to the default.
    pub fn softening(&self) -> f64 {
        self.softening.unwrap_or(DEF_SOFTENING)
    }

    /// Return an error if any explicitly set value is out of range.
    pub fn validate(&self) -> DftResult<()> {
        DftError::check_max_electron(self.max_electron())?;
        DftError::check_softening(self.softening())?;
        Ok(())
    }
}

/// A grid together with the settings used to compute on it.
#[derive(Clone, Debug)]
pub struct Model {
    grid: Grid,
    config: Config,
}

impl Model {
    /// Create a new `Model`, checking the configuration.
    pub fn new(grid: Grid, config: Config) -> DftResult<Self> {
        config.validate()?;
        Ok(Self { grid, config })
    }

    /// Get a reference to the grid.
    pub fn grid(&self) -> &Grid { &self.grid }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &Config { &self.config }

    /// Thin interface to [`operator::first_derivative`].
    pub fn d1(&self) -> Operator {
        operator::first_derivative(&self.grid, self.config.repr)
    }

    /// Thin interface to [`operator::second_derivative`].
    pub fn d2(&self) -> Operator {
        operator::second_derivative(&self.grid, self.config.repr)
    }

    /// Thin interface to [`quad::normalise_columns`].
    pub fn normalise<S, A>(&self, psi: &Arr2<S>) -> DftResult<nd::Array2<A>>
    where
        S: nd::Data<Elem = A>,
        A: Scalar<Real = f64>,
    {
        quad::normalise_columns(psi, self.grid.x())
    }

    /// Thin interface to [`quad::integrate`] over the model grid.
    pub fn integrate<S>(&self, y: &Arr1<S>) -> DftResult<f64>
    where S: nd::Data<Elem = f64>
    {
        self.grid.check(y)?;
        quad::integrate(self.grid.x(), y)
    }

    /// Thin interface to [`density::occupation_numbers`].
    pub fn occupations(&self, n_electron: usize) -> DftResult<nd::Array1<f64>> {
        density::occupation_numbers(n_electron, self.config.max_electron())
    }

    /// Thin interface to [`density::density_with_max`].
    pub fn density<S, A>(&self, n_electron: usize, psi: &Arr2<S>)
        -> DftResult<nd::Array1<f64>>
    where
        S: nd::Data<Elem = A>,
        A: Scalar<Real = f64>,
    {
        density::density_with_max(
            n_electron, self.config.max_electron(), psi, &self.grid)
    }

    /// Thin interface to [`functional::exchange`].
    pub fn exchange<S>(&self, rho: &Arr1<S>) -> DftResult<Functional>
    where S: nd::Data<Elem = f64>
    {
        functional::exchange(rho, &self.grid)
    }

    /// Thin interface to [`functional::coulomb`].
    pub fn coulomb<S>(&self, rho: &Arr1<S>) -> DftResult<Functional>
    where S: nd::Data<Elem = f64>
    {
        functional::coulomb(rho, &self.grid, self.config.softening())
    }
}
