//! Provides functions and higher-level constructs for the numerical solution
//! of one-dimensional Sturm-Liouville eigenvalue problems
//! ```text
//! p(x) u'' + q(x) u' + (r(x) - λ) u = 0,    u(a) = u(b) = 0
//! ```
//! via the shooting method.
//!
//! Provides implementations for the following numerical routines:
//! - Adaptive fourth-order Runge-Kutta integration (step doubling) across a
//!   fixed grid
//! - Eigenvalue search by bisection on the far-end value of the shot solution
//! - Eigenvalue search by scanning the far-end value over a range of
//!   eigenvalues, followed by interpolation and bisection refinement
//! - Trapezoidal-rule normalization of eigenfunctions
//!
//! The default operator is the angular operator of [`operator::Angular`] on
//! (0, π/2); any other can be supplied through the [`operator::Operator`]
//! trait.
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod integrate;
pub mod interp;
pub mod operator;
pub mod solve;
pub mod utils;

pub mod docs;

pub(crate) const DEF_EPSILON: f64 = 1e-6;
pub(crate) const DEF_MAXITERS: usize = 100;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
