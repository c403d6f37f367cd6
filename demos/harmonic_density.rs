use ndarray as nd;
use ndarray_linalg::{ self as la, EighInto };
use lda1d::{
    config::{ Config, Model },
    grid::Grid,
    operator::Repr,
};

// self-consistent density for a few electrons in a harmonic trap

const N_ELECTRON: usize = 5;
const MIXING: f64 = 0.5;
const MAXITERS: usize = 100;
const TOL: f64 = 1e-8;

fn main() -> anyhow::Result<()> {
    let grid = Grid::new_linspace(-8.0, 8.0, 401)?;
    let model = Model::new(grid, Config { repr: Repr::Dense, ..Config::default() })?;
    let x = model.grid().x();
    let v_ext: nd::Array1<f64> = x.mapv(|xk| 0.5 * xk * xk);
    let kinetic: nd::Array2<f64> = -0.5 * model.d2().into_dense();

    let mut rho: nd::Array1<f64> = nd::Array1::zeros(x.len());
    let mut e_total = f64::INFINITY;
    for iter in 0..MAXITERS {
        let ex = model.exchange(&rho)?;
        let eh = model.coulomb(&rho)?;
        let v_eff: nd::Array1<f64> = &v_ext + &ex.potential + &eh.potential;
        let mut ham = kinetic.clone();
        ham.diag_mut().zip_mut_with(&v_eff, |hk, vk| { *hk += *vk; });

        let (evals, evecs): (nd::Array1<f64>, nd::Array2<f64>)
            = ham.eigh_into(la::UPLO::Lower)?;
        let rho_new = model.density(N_ELECTRON, &evecs)?;

        let occ = model.occupations(N_ELECTRON)?;
        let e_band: f64 = occ.iter().zip(&evals).map(|(f, e)| f * e).sum();
        // remove double counting of the interaction terms
        let e_new
            = e_band - eh.energy
            + ex.energy - model.integrate(&(&rho * &ex.potential))?;
        println!("iter {iter:3}: E = {e_new:+.10}");

        rho = MIXING * &rho_new + (1.0 - MIXING) * &rho;
        if (e_new - e_total).abs() < TOL {
            println!("converged");
            break;
        }
        e_total = e_new;
    }

    let ex = model.exchange(&rho)?;
    let eh = model.coulomb(&rho)?;
    println!("electrons: {:.6}", model.integrate(&rho)?);
    println!("E_x:       {:+.10}", ex.energy);
    println!("E_H:       {:+.10}", eh.energy);
    Ok(())
}
