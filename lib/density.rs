//! Occupation numbers and electron density assembly.

use ndarray as nd;
use ndarray_linalg::Scalar;
use crate::{
    Arr1,
    Arr2,
    DEF_MAX_ELECTRON,
    error::{ DftError, DftResult, LengthError },
    grid::Grid,
    quad::{ integrate, normalise_columns },
};

// Pauli filling; an odd electron count leaves one singly occupied orbital
fn fill(n_electron: usize, max_electron: f64) -> nd::Array1<f64> {
    std::iter::repeat(max_electron).take(n_electron / 2)
        .chain((n_electron % 2 == 1).then_some(1.0))
        .collect()
}

/// Return occupation numbers for `n_electron` electrons, lowest orbital first.
///
/// `n_electron / 2` orbitals are filled with `max_electron` each, followed by
/// a single orbital holding one electron if `n_electron` is odd. Returns
/// [`DftError::BadMaxElectron`] if `max_electron` is less than 1.
pub fn occupation_numbers(n_electron: usize, max_electron: f64)
    -> DftResult<nd::Array1<f64>>
{
    DftError::check_max_electron(max_electron)?;
    Ok(fill(n_electron, max_electron))
}

/// [`occupation_numbers`] with doubly occupied orbitals.
///
/// The occupations always sum to `n_electron`.
pub fn occupations(n_electron: usize) -> nd::Array1<f64> {
    fill(n_electron, DEF_MAX_ELECTRON)
}

// accumulate Σ f_n |psi_n|² over already-normalized columns
fn accumulate<S, T, A>(occ: &Arr1<S>, psi: &Arr2<T>) -> nd::Array1<f64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = A>,
    A: Scalar<Real = f64>,
{
    let mut rho: nd::Array1<f64> = nd::Array1::zeros(psi.nrows());
    occ.iter().zip(psi.columns())
        .for_each(|(&f_n, psi_n)| {
            nd::Zip::from(&mut rho).and(&psi_n)
                .for_each(|rk, q| { *rk += f_n * q.square(); });
        });
    rho
}

/// Compute the electron density for `n_electron` electrons occupying the
/// lowest orbitals of `psi` (one orbital per column, sampled on `grid`).
///
/// Every column is normalized before use; columns beyond the number of
/// occupied orbitals are ignored.
pub fn density<S, A>(n_electron: usize, psi: &Arr2<S>, grid: &Grid)
    -> DftResult<nd::Array1<f64>>
where
    S: nd::Data<Elem = A>,
    A: Scalar<Real = f64>,
{
    density_with_max(n_electron, DEF_MAX_ELECTRON, psi, grid)
}

/// Like [`density`], but with a configurable maximum occupancy per orbital.
pub fn density_with_max<S, A>(
    n_electron: usize,
    max_electron: f64,
    psi: &Arr2<S>,
    grid: &Grid,
) -> DftResult<nd::Array1<f64>>
where
    S: nd::Data<Elem = A>,
    A: Scalar<Real = f64>,
{
    LengthError::check_len(psi.nrows(), grid.len())?;
    let occ = occupation_numbers(n_electron, max_electron)?;
    if occ.len() > psi.ncols() {
        return Err(
            DftError::TooFewOrbitals { needed: occ.len(), got: psi.ncols() });
    }
    let psi_norm = normalise_columns(
        &psi.slice(nd::s![.., 0..occ.len()]), grid.x())?;
    Ok(accumulate(&occ, &psi_norm))
}

/// Compute the total number of electrons `∫ρ dx` described by a density.
pub fn electron_count<S>(rho: &Arr1<S>, grid: &Grid) -> DftResult<f64>
where S: nd::Data<Elem = f64>
{
    grid.check(rho)?;
    integrate(grid.x(), rho)
}
