//! Exchange and Coulomb (Hartree) energy functionals of the electron density.
//!
//! Each functional returns a [`Functional`]: the energy along with the
//! potential obtained as its functional derivative, sampled on the grid.

use std::f64::consts::PI;
use ndarray as nd;
use rayon::prelude::*;
use crate::{
    Arr1,
    error::{ DftError, DftResult, NumericalError },
    grid::Grid,
    quad::integrate,
};

/// Default softening parameter for the Coulomb kernel.
pub const DEF_SOFTENING: f64 = 0.1;

/// Energy and potential produced by a single functional.
#[derive(Clone, Debug, PartialEq)]
pub struct Functional {
    /// Energy
    pub energy: f64,
    /// Potential, one value per grid point
    pub potential: nd::Array1<f64>,
}

// reject densities that would put NaN through fractional powers
fn check_density<S>(rho: &Arr1<S>, grid: &Grid) -> DftResult<()>
where S: nd::Data<Elem = f64>
{
    grid.check(rho)?;
    NumericalError::check_finite("density", rho)?;
    if let Some((index, &value))
        = rho.iter().enumerate().find(|(_, rk)| **rk < 0.0)
    {
        return Err(NumericalError::NegativeDensity { index, value }.into());
    }
    Ok(())
}

/// Compute the local-density-approximation exchange energy and potential.
///
/// ```text
/// E_x = -(3/4) (3/π)^(1/3) ∫ ρ^(4/3) dx
/// V_x = -(3/π)^(1/3) ρ^(1/3)
/// ```
///
/// Returns [`NumericalError::NegativeDensity`] if any density value is
/// negative.
pub fn exchange<S>(rho: &Arr1<S>, grid: &Grid) -> DftResult<Functional>
where S: nd::Data<Elem = f64>
{
    check_density(rho, grid)?;
    let c = (3.0 / PI).cbrt();
    let rho43: nd::Array1<f64> = rho.mapv(|rk| rk * rk.cbrt());
    let energy = -0.75 * c * integrate(grid.x(), &rho43)?;
    let potential: nd::Array1<f64> = rho.mapv(|rk| -c * rk.cbrt());
    log::trace!("functional::exchange: E_x = {energy:.6e}");
    Ok(Functional { energy, potential })
}

/// Compute the Coulomb (Hartree) energy and potential using a softened kernel.
///
/// ```text
/// V_H(x) = Σ_x' ρ(x') h / sqrt((x - x')² + eps)
/// E_H    = (1/2) Σ_x Σ_x' ρ(x) ρ(x') h² / sqrt((x - x')² + eps)
/// ```
///
/// Self-interaction (`x = x'`) is included in both sums. The softening `eps`
/// must be positive; as it approaches zero the diagonal of the kernel grows
/// without bound.
///
/// This costs *O*(*N*²) time; rows of the pairwise sum are evaluated in
/// parallel.
pub fn coulomb<S>(rho: &Arr1<S>, grid: &Grid, eps: f64)
    -> DftResult<Functional>
where S: nd::Data<Elem = f64>
{
    DftError::check_softening(eps)?;
    grid.check(rho)?;
    NumericalError::check_finite("density", rho)?;
    let h = grid.dx();
    let x = grid.x().view();
    let rho = rho.view();
    let potential: nd::Array1<f64>
        = nd::Array1::from_vec(
            (0..grid.len()).into_par_iter()
            .map(|i| {
                x.iter().zip(&rho)
                    .map(|(xj, rj)| rj * h / ((x[i] - xj).powi(2) + eps).sqrt())
                    .sum::<f64>()
            })
            .collect()
        );
    // E_H = (h / 2) Σ_x ρ(x) V_H(x)
    let energy = 0.5 * h * rho.dot(&potential);
    if !energy.is_finite() {
        return Err(NumericalError::NonFiniteResult("coulomb energy").into());
    }
    NumericalError::check_finite("coulomb potential", &potential)?;
    log::trace!("functional::coulomb: E_H = {energy:.6e}, eps = {eps}");
    Ok(Functional { energy, potential })
}
