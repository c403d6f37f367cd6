#![allow(non_snake_case)]

//! Provides the numerical building blocks for a one-dimensional
//! density-functional (Kohn-Sham) calculation on a uniform real-space grid.
//!
//! Provides implementations for the following:
//! - Finite-difference first- and second-derivative operators, in dense or
//!   banded (tridiagonal) form
//! - Composite Simpson integration and wavefunction normalization
//! - Occupation numbers (Pauli filling) and electron density assembly
//! - Local-density exchange energy and potential
//! - Softened-kernel Coulomb (Hartree) energy and potential
//!
//! The self-consistency loop and the eigensolver are left to the caller; every
//! function here is a pure transformation of its inputs.
//!
//! ```
//! use lda1d::{ density, functional, grid::Grid };
//!
//! let grid = Grid::new_linspace(-5.0, 5.0, 201).unwrap();
//! // two electrons in a single Gaussian orbital
//! let psi = grid.x().mapv(|xk| (-xk * xk / 2.0).exp())
//!     .insert_axis(ndarray::Axis(1));
//! let rho = density::density(2, &psi, &grid).unwrap();
//! let n = density::electron_count(&rho, &grid).unwrap();
//! assert!((n - 2.0).abs() < 1e-9);
//!
//! let ex = functional::exchange(&rho, &grid).unwrap();
//! let eh = functional::coulomb(&rho, &grid, functional::DEF_SOFTENING).unwrap();
//! assert!(ex.energy < 0.0 && eh.energy > 0.0);
//! ```
//!
//! See [`docs`] for background on the discretization.

pub mod error;
pub mod grid;
pub mod operator;
pub mod quad;
pub mod deriv;
pub mod density;
pub mod functional;
pub mod config;

pub mod docs;

/// Maximum number of electrons in a single orbital (spin degeneracy).
pub const DEF_MAX_ELECTRON: f64 = 2.0;
/// Default step size for the pointwise derivative helpers in [`deriv`].
pub const DEF_STEP: f64 = 0.01;
/// Relative tolerance on grid spacing for a grid to count as uniform.
pub const DEF_UNIFORM_TOL: f64 = 1e-6;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
