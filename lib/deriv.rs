//! Pointwise finite-difference derivatives of arbitrary functions.
//!
//! These are independent of the grid operators in [`operator`][crate::operator]
//! and act on any callable. The step `h` trades truncation error (smaller is
//! better) against floating-point cancellation (larger is better).

use num_traits::Float;
use crate::{
    DEF_STEP,
    error::{ DftError, DftResult },
};

fn check_step<A: Float>(h: A) -> DftResult<()> {
    (h > A::zero() && h.is_finite())
        .then_some(())
        .ok_or_else(|| DftError::BadStep(h.to_f64().unwrap_or(f64::NAN)))
}

/// Approximate `f'(a)` with the central difference
/// `(f(a + h) - f(a - h)) / 2h`.
pub fn derivative<F, A>(mut f: F, a: A, h: A) -> DftResult<A>
where
    F: FnMut(A) -> A,
    A: Float,
{
    check_step(h)?;
    let two = A::one() + A::one();
    Ok((f(a + h) - f(a - h)) / (two * h))
}

/// Approximate `f'(a)` with the forward difference `(f(a + h) - f(a)) / h`.
pub fn forward_derivative<F, A>(mut f: F, a: A, h: A) -> DftResult<A>
where
    F: FnMut(A) -> A,
    A: Float,
{
    check_step(h)?;
    Ok((f(a + h) - f(a)) / h)
}

/// Approximate `f''(a)` with the central second difference
/// `(f(a - h) - 2 f(a) + f(a + h)) / h²`.
pub fn second_derivative<F, A>(mut f: F, a: A, h: A) -> DftResult<A>
where
    F: FnMut(A) -> A,
    A: Float,
{
    check_step(h)?;
    let two = A::one() + A::one();
    Ok((f(a - h) - two * f(a) + f(a + h)) / (h * h))
}

/// [`derivative`] with the default step size.
pub fn derivative_default<F>(f: F, a: f64) -> DftResult<f64>
where F: FnMut(f64) -> f64
{
    derivative(f, a, DEF_STEP)
}

/// [`second_derivative`] with the default step size.
pub fn second_derivative_default<F>(f: F, a: f64) -> DftResult<f64>
where F: FnMut(f64) -> f64
{
    second_derivative(f, a, DEF_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn central_first_derivative() {
        let d = derivative(f64::sin, 0.3, 1e-4).unwrap();
        assert_abs_diff_eq!(d, 0.3_f64.cos(), epsilon = 1e-8);
        assert_abs_diff_eq!(
            derivative_default(|x| x * x, 1.5).unwrap(), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn forward_first_derivative() {
        let d = forward_derivative(|x: f64| x.exp(), 0.0, 1e-6).unwrap();
        assert_abs_diff_eq!(d, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn central_second_derivative() {
        let d2 = second_derivative(|x: f64| x.powi(3), 2.0, 1e-3).unwrap();
        assert_abs_diff_eq!(d2, 12.0, epsilon = 1e-5);
        assert_abs_diff_eq!(
            second_derivative_default(f64::cos, 0.0).unwrap(), -1.0, epsilon = 1e-5);
    }

    #[test]
    fn default_step_matches_explicit_step() {
        let f = |x: f64| x.sin() * x.exp();
        assert_eq!(
            derivative_default(f, 0.7).unwrap(),
            derivative(f, 0.7, DEF_STEP).unwrap(),
        );
        assert_eq!(
            second_derivative_default(f, 0.7).unwrap(),
            second_derivative(f, 0.7, DEF_STEP).unwrap(),
        );
    }

    #[test]
    fn single_precision() {
        let d = derivative(|x: f32| x * x, 2.0_f32, 1e-2).unwrap();
        assert!((d - 4.0).abs() < 1e-3);
    }

    #[test]
    fn bad_step() {
        assert!(matches!(
            derivative(f64::sin, 0.0, 0.0),
            Err(DftError::BadStep(_))
        ));
        assert!(second_derivative(f64::sin, 0.0, f64::NAN)
            .unwrap_err().is_invalid_input());
        assert!(forward_derivative(f64::sin, 0.0, -1e-3).is_err());
    }
}
