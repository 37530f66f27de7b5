//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
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
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from a call to [`find_zeros`][crate::interp::find_zeros] when data
/// arrays are less than 5 elements long.
#[derive(Debug, Error)]
#[error("coordinate arrays in interpolation must be longer than 4 elements; got {0}")]
pub struct LagrangeError(pub usize);

impl LagrangeError {
    pub(crate) fn check<S, A>(a: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data<Elem = A>
    {
        let n = a.len();
        (n > 4).then_some(()).ok_or(Self(n))
    }
}

/// Returned from functions in [`interp`][crate::interp].
#[derive(Debug, Error)]
pub enum InterpError {
    /// [`LengthError`]
    #[error("length error: {0}")]
    Length(#[from] LengthError),

    /// [`LagrangeError`]
    #[error("lagrange error: {0}")]
    Lagrange(#[from] LagrangeError),
}

/// Returned from the shooting integrator in [`integrate`][crate::integrate].
///
/// Failures during integration carry the coordinate at which it broke down.
#[derive(Debug, Error)]
pub enum IntegrationError {
    /// Returned when `rtol` is not positive or `atol` is negative.
    #[error("integrator tolerances must satisfy rtol > 0 and atol >= 0; got rtol = {0}, atol = {1}")]
    BadTolerance(f64, f64),

    /// Returned when the coordinate grid has fewer than two points.
    #[error("integration grid must have at least 2 points; got {0}")]
    BadGrid(usize),

    /// Returned when a trial or accepted state contains NaN or infinite
    /// values.
    #[error("integration produced a non-finite state at x = {x}")]
    NonFinite { x: f64 },

    /// Returned when the step-size controller exhausts its retries without
    /// satisfying the error bound.
    #[error("rka error bound could not be satisfied at x = {x}")]
    ErrorBound { x: f64 },

    /// Returned when the step size falls below the floating-point spacing of
    /// the coordinate.
    #[error("step size underflow at x = {x}")]
    StepUnderflow { x: f64 },
}

impl IntegrationError {
    pub(crate) fn check_tolerances(rtol: f64, atol: f64) -> Result<(), Self> {
        (rtol > 0.0 && atol >= 0.0).then_some(()).ok_or(Self::BadTolerance(rtol, atol))
    }

    pub(crate) fn check_grid(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::BadGrid(n))
    }
}

/// Returned from eigenvalue solver functions.
#[derive(Debug, Error)]
pub enum EigenError {
    /// Returned when a negative or NaN `tolerance` value is encountered.
    #[error("tolerance must be non-negative; got {0}")]
    BadTolerance(f64),

    /// Returned when a non-positive `max_iterations` value is encountered.
    #[error("max_iterations must be greater than 0; got {0}")]
    BadMaxiters(usize),

    /// Returned when domain endpoints are not finite or not ordered.
    #[error("domain endpoints must be finite with start < end; got [{0}, {1}]")]
    BadDomain(f64, f64),

    /// Returned when a domain is requested with fewer than two points.
    #[error("domain must have at least 2 points; got {0}")]
    BadGrid(usize),

    /// Returned when the bisection search reaches `max_iterations` without
    /// meeting the tolerance.
    #[error("failed to converge for lambda_guess = {guess} after {iterations} iterations")]
    Convergence { guess: f64, iterations: usize },

    /// Returned by the sign-change bracket rule when the shot end values at
    /// both ends of the bracket have the same sign.
    #[error("no sign change in u(end) over the bracket [{lo}, {hi}]")]
    NoSignChange { lo: f64, hi: f64 },

    /// Returned when a shot solution has zero or non-finite norm and cannot be
    /// normalized.
    #[error("eigenfunction for lambda = {lambda} cannot be normalized")]
    ZeroNorm { lambda: f64 },

    /// [`IntegrationError`]
    #[error("integration error: {0}")]
    Integration(#[from] IntegrationError),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`InterpError`].
    #[error("interpolation error: {0}")]
    Interp(#[from] InterpError),
}

impl EigenError {
    pub(crate) fn check_tolerance(tolerance: f64) -> Result<(), Self> {
        (tolerance >= 0.0).then_some(()).ok_or(Self::BadTolerance(tolerance))
    }

    pub(crate) fn check_maxiters(maxiters: usize) -> Result<(), Self> {
        (maxiters != 0).then_some(()).ok_or(Self::BadMaxiters(maxiters))
    }

    /// Return `true` if `self` is `Convergence`.
    pub fn is_convergence(&self) -> bool {
        matches!(self, Self::Convergence { .. })
    }

    /// Return `true` if `self` is `Integration`.
    pub fn is_integration(&self) -> bool {
        matches!(self, Self::Integration(_))
    }
}
