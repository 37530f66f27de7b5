//! Quadrature and normalization tools for functions sampled on an evenly
//! spaced grid.

use ndarray::{ self as nd, Ix1 };
use num_traits::Float;

/// Integrate using the trapezoidal rule.
///
/// Returns zero for arrays with fewer than 2 elements.
///
/// ```
/// use ndarray as nd;
/// use slshoot::utils::trapz;
///
/// let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 101);
/// let y = x.mapv(|xk| 2.0 * xk);
/// assert!((trapz(&y, x[1] - x[0]) - 1.0).abs() < 1e-12);
/// ```
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    if n < 2 { return A::zero(); }
    let two = A::one() + A::one();
    let inner = y.iter().skip(1).take(n - 2)
        .fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Calculate the squared norm ∫u² dx of a sampled function.
///
/// Returns zero for arrays with fewer than 2 elements.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = q.len();
    if n < 2 { return A::zero(); }
    let two = A::one() + A::one();
    let inner = q.iter().skip(1).take(n - 2)
        .fold(A::zero(), |acc, qk| acc + *qk * *qk);
    (dx / two) * (q[0] * q[0] + two * inner + q[n - 1] * q[n - 1])
}

/// Calculate the inner product ∫u v dx of two sampled functions.
///
/// Only the overlapping leading portion of the arrays is used.
pub fn wf_dot<S, T, A>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: A,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = q.len().min(p.len());
    if n < 2 { return A::zero(); }
    let two = A::one() + A::one();
    let inner = q.iter().zip(p).skip(1).take(n - 2)
        .fold(A::zero(), |acc, (qk, pk)| acc + *qk * *pk);
    (dx / two) * (q[0] * p[0] + two * inner + q[n - 1] * p[n - 1])
}

/// Renormalize a sampled function in place, returning the normalization
/// factor √(∫u² dx) that it was divided by.
///
/// Returns `None` and leaves `q` untouched if the factor is zero or not finite.
pub fn wf_renormalize<S, A>(q: &mut nd::ArrayBase<S, Ix1>, dx: A) -> Option<A>
where
    S: nd::DataMut<Elem = A>,
    A: Float,
{
    let norm = wf_norm(q, dx).sqrt();
    if norm == A::zero() || !norm.is_finite() { return None; }
    q.iter_mut().for_each(|qk| { *qk = *qk / norm; });
    Some(norm)
}

/// Return a normalized copy of a sampled function.
///
/// Returns `None` if the normalization factor is zero or not finite.
pub fn wf_normalized<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A)
    -> Option<nd::Array1<A>>
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let mut new = q.to_owned();
    wf_renormalize(&mut new, dx).map(|_| new)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn trapz_integrates_sine() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, PI, 2001);
        let dx = x[1] - x[0];
        assert_abs_diff_eq!(trapz(&x.mapv(f64::sin), dx), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn norm_of_two_points() {
        let q = nd::array![0.0, 2.0];
        assert_abs_diff_eq!(wf_norm(&q, 0.5), 1.0, epsilon = 1e-15);
        let normed = wf_normalized(&q, 0.5).unwrap();
        assert_abs_diff_eq!(normed[1], 2.0, epsilon = 1e-15);
    }

    #[test]
    fn renormalize_gives_unit_norm() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, PI, 500);
        let dx = x[1] - x[0];
        let mut q = x.mapv(|xk| 3.0 * (2.0 * xk).sin());
        let norm = wf_renormalize(&mut q, dx).unwrap();
        assert!(norm > 0.0);
        assert_abs_diff_eq!(wf_norm(&q, dx), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_function_is_not_normalized() {
        let mut q: nd::Array1<f64> = nd::Array1::zeros(10);
        assert!(wf_renormalize(&mut q, 0.1).is_none());
        assert!(wf_normalized(&nd::array![f64::NAN, 1.0], 0.1).is_none());
    }

    #[test]
    fn sines_are_orthogonal() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, PI, 1001);
        let dx = x[1] - x[0];
        let s1 = x.mapv(f64::sin);
        let s2 = x.mapv(|xk| (2.0 * xk).sin());
        assert_abs_diff_eq!(wf_dot(&s1, &s2, dx), 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(wf_dot(&s1, &s1, dx), wf_norm(&s1, dx), epsilon = 1e-14);
    }
}
