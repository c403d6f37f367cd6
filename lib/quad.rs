//! Numerical integration and wavefunction normalization.

use ndarray as nd;
use ndarray_linalg::Scalar;
use crate::{
    Arr1,
    Arr2,
    error::{ DftError, DftResult, LengthError, NumericalError },
};

// composite Simpson's rule over one pair of intervals with widths h0, h1
fn simpson_pair(h0: f64, h1: f64, y0: f64, y1: f64, y2: f64) -> f64 {
    let hsum = h0 + h1;
    let r = h0 / h1;
    hsum / 6.0 * (
        y0 * (2.0 - r.recip())
        + y1 * hsum.powi(2) / (h0 * h1)
        + y2 * (2.0 - r)
    )
}

/// Integrate samples `y` over coordinates `x` using the composite Simpson's
/// rule.
///
/// Spacing in `x` does not need to be uniform. For an even number of samples
/// the last interval is handled separately by integrating the parabola through
/// the final three points, so the result stays exact for quadratics; with only
/// two samples this falls back to the trapezoidal rule.
pub fn integrate<S, T>(x: &Arr1<S>, y: &Arr1<T>) -> DftResult<f64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(x, y)?;
    let n = x.len();
    if n < 2 { return Err(DftError::TooFewSamples(n)); }
    if n == 2 { return Ok((x[1] - x[0]) * (y[0] + y[1]) / 2.0); }

    let m = if n % 2 == 0 { n - 1 } else { n };
    let mut acc: f64
        = (0..m - 2).step_by(2)
        .map(|k| {
            simpson_pair(
                x[k + 1] - x[k],
                x[k + 2] - x[k + 1],
                y[k], y[k + 1], y[k + 2],
            )
        })
        .sum();
    if m != n {
        log::debug!(
            "quad::integrate: even number of samples ({n}); correcting the \
            last interval"
        );
        let hm2 = x[n - 2] - x[n - 3];
        let hm1 = x[n - 1] - x[n - 2];
        let alpha = (2.0 * hm1.powi(2) + 3.0 * hm1 * hm2) / (6.0 * (hm2 + hm1));
        let beta = (hm1.powi(2) + 3.0 * hm1 * hm2) / (6.0 * hm2);
        let eta = hm1.powi(3) / (6.0 * hm2 * (hm2 + hm1));
        acc += alpha * y[n - 1] + beta * y[n - 2] - eta * y[n - 3];
    }
    Ok(acc)
}

/// Calculate the norm integral `∫|psi|² dx` of a wavefunction.
pub fn wf_norm<S, T, A>(psi: &Arr1<S>, x: &Arr1<T>) -> DftResult<f64>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = f64>,
    A: Scalar<Real = f64>,
{
    let sq: nd::Array1<f64> = psi.mapv(|q| q.square());
    integrate(x, &sq)
}

/// Return a normalized copy of a wavefunction, such that `∫|psi|² dx = 1`.
///
/// Returns [`NumericalError::ZeroNorm`] if the norm integral is not a positive
/// finite number.
pub fn normalise_psi<S, T, A>(psi: &Arr1<S>, x: &Arr1<T>)
    -> DftResult<nd::Array1<A>>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = f64>,
    A: Scalar<Real = f64>,
{
    let norm2 = wf_norm(psi, x)?;
    if !(norm2 > 0.0 && norm2.is_finite()) {
        return Err(NumericalError::ZeroNorm(norm2).into());
    }
    let norm = A::from_real(norm2.sqrt());
    Ok(psi.mapv(|q| q / norm))
}

/// Renormalize a wavefunction in place.
pub fn wf_renormalize<S, T, A>(psi: &mut Arr1<S>, x: &Arr1<T>) -> DftResult<()>
where
    S: nd::DataMut<Elem = A>,
    T: nd::Data<Elem = f64>,
    A: Scalar<Real = f64>,
{
    let norm2 = wf_norm(psi, x)?;
    if !(norm2 > 0.0 && norm2.is_finite()) {
        return Err(NumericalError::ZeroNorm(norm2).into());
    }
    let norm = A::from_real(norm2.sqrt());
    psi.iter_mut().for_each(|q| { *q /= norm; });
    Ok(())
}

/// Return a copy of a set of orbitals (one per column) with every column
/// normalized.
pub fn normalise_columns<S, T, A>(psi: &Arr2<S>, x: &Arr1<T>)
    -> DftResult<nd::Array2<A>>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = f64>,
    A: Scalar<Real = f64>,
{
    LengthError::check_len(psi.nrows(), x.len())?;
    let mut normed: nd::Array2<A> = psi.to_owned();
    normed.axis_iter_mut(nd::Axis(1))
        .try_for_each(|mut col| wf_renormalize(&mut col, x))?;
    Ok(normed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64 as C64;

    #[test]
    fn simpson_exact_for_cubic() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 2.0, 11);
        let y = x.mapv(|xk| xk.powi(3) - xk + 1.0);
        // ∫₀² (x³ - x + 1) dx = 4 - 2 + 2
        assert_abs_diff_eq!(integrate(&x, &y).unwrap(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn simpson_even_samples_exact_for_quadratic() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 3.0, 10);
        let y = x.mapv(|xk| xk * xk);
        assert_abs_diff_eq!(integrate(&x, &y).unwrap(), 9.0, epsilon = 1e-12);
    }

    #[test]
    fn simpson_convergence_order() {
        let err = |n: usize| {
            let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, n);
            let y = x.mapv(f64::exp);
            (integrate(&x, &y).unwrap() - (1f64.exp() - 1.0)).abs()
        };
        let coarse = err(11);
        let fine = err(21);
        // fourth order: halving the spacing cuts the error by ~16
        assert!(coarse / fine > 12.0);
        assert!(fine < 1e-6);
    }

    #[test]
    fn simpson_nonuniform() {
        let x = nd::array![0.0, 0.5, 1.5, 2.0, 3.0];
        let y = x.mapv(|xk: f64| 3.0 * xk * xk);
        assert_abs_diff_eq!(integrate(&x, &y).unwrap(), 27.0, epsilon = 1e-12);
    }

    #[test]
    fn two_samples_is_trapezoid() {
        let x = nd::array![1.0, 3.0];
        let y = nd::array![2.0, 4.0];
        assert_abs_diff_eq!(integrate(&x, &y).unwrap(), 6.0, epsilon = 1e-14);
    }

    #[test]
    fn integrate_errors() {
        let x = nd::array![0.0, 1.0, 2.0];
        let y = nd::array![0.0, 1.0];
        assert!(integrate(&x, &y).unwrap_err().is_dimension_mismatch());
        let x1 = nd::array![0.0];
        assert!(matches!(
            integrate(&x1, &x1),
            Err(DftError::TooFewSamples(1))
        ));
    }

    #[test]
    fn normalise_is_idempotent() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-6.0, 6.0, 301);
        let psi = x.mapv(|xk| 3.0 * xk * (-xk * xk / 2.0).exp());
        let once = normalise_psi(&psi, &x).unwrap();
        assert_abs_diff_eq!(wf_norm(&once, &x).unwrap(), 1.0, epsilon = 1e-12);
        let twice = normalise_psi(&once, &x).unwrap();
        for (a, b) in once.iter().zip(&twice) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn normalise_complex() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-6.0, 6.0, 301);
        let psi: nd::Array1<C64>
            = x.mapv(|xk| C64::from_polar(2.0 * (-xk * xk).exp(), xk));
        let normed = normalise_psi(&psi, &x).unwrap();
        assert_abs_diff_eq!(wf_norm(&normed, &x).unwrap(), 1.0, epsilon = 1e-12);
        // phase is untouched
        assert_abs_diff_eq!(normed[200].arg(), psi[200].arg(), epsilon = 1e-12);
    }

    #[test]
    fn zero_wavefunction_is_an_error() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 5);
        let psi: nd::Array1<f64> = nd::Array1::zeros(5);
        let err = normalise_psi(&psi, &x).unwrap_err();
        assert!(matches!(
            err,
            DftError::NumericalInstability(NumericalError::ZeroNorm(_))
        ));
    }

    #[test]
    fn normalise_every_column() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-5.0, 5.0, 101);
        let mut psi: nd::Array2<f64> = nd::Array2::zeros((101, 2));
        psi.column_mut(0).assign(&x.mapv(|xk| (-xk * xk).exp()));
        psi.column_mut(1).assign(&x.mapv(|xk| 5.0 * xk * (-xk * xk).exp()));
        let normed = normalise_columns(&psi, &x).unwrap();
        for col in normed.columns() {
            assert_abs_diff_eq!(wf_norm(&col, &x).unwrap(), 1.0, epsilon = 1e-12);
        }
        assert!(normalise_columns(&psi, &x.slice(nd::s![..100]))
            .unwrap_err().is_dimension_mismatch());
    }
}
