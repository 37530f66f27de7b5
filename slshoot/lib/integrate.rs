//! Adaptive fourth-order Runge-Kutta shooting across a fixed coordinate grid.
//!
//! Each trial step of size *h* is taken once at full size and once as two
//! half-sized steps; the difference between the two results serves as the
//! local truncation error estimate and drives the step size. Steps are clipped
//! so that every grid point is landed on exactly, and the step size carries
//! over from one grid interval to the next.

use ndarray as nd;
use crate::{
    Arr1,
    error::IntegrationError,
    operator::Operator,
    DEF_EPSILON,
};

pub type IntegrationResult<T> = Result<T, IntegrationError>;

// safety numbers -- particular to rk4
const SAFE1: f64 = 0.9;
const SAFE2: f64 = 4.0;

/// Step-size control parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegratorConfig {
    /// Relative tolerance (default: `1e-6`).
    pub rtol: f64,
    /// Absolute tolerance (default: `1e-9`).
    pub atol: f64,
    /// Maximum number of attempts for a single step before giving up
    /// (default: `100`).
    pub max_attempts: usize,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self { rtol: DEF_EPSILON, atol: 1e-9, max_attempts: 100 }
    }
}

/// Function value and first derivative sampled at every grid point.
#[derive(Clone, Debug)]
pub struct Trajectory {
    /// u(x)
    pub u: nd::Array1<f64>,
    /// u'(x)
    pub du: nd::Array1<f64>,
}

impl Trajectory {
    /// Return the value of u at the last grid point.
    ///
    /// Trajectories from [`shoot`] always have at least two points; this
    /// panics on an empty one.
    pub fn end_value(&self) -> f64 { self.u[self.u.len() - 1] }

    /// Return the number of grid points.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.u.len() }
}

fn is_finite(y: &[f64; 2]) -> bool { y.iter().all(|yk| yk.is_finite()) }

// perform the operation `a + v * b` succinctly
fn array_step(a: &[f64; 2], v: f64, b: &[f64; 2]) -> [f64; 2] {
    [a[0] + v * b[0], a[1] + v * b[1]]
}

// estimate the ratio between the truncation error and the allowed error,
// taking the worst component
fn error_ratio(z: &[f64; 2], w: &[f64; 2], rtol: f64, atol: f64) -> f64 {
    z.iter().zip(w)
        .map(|(zk, wk)| {
            let diff = (zk - wk).abs();
            if diff == 0.0 { return 0.0; }
            diff / (atol + rtol * zk.abs().max(wk.abs()))
        })
        .fold(0.0, f64::max)
}

// take a single RK4 step *in place*
fn rk4_step<O>(op: &O, lambda: f64, x: f64, y: &mut [f64; 2], h: f64)
where O: Operator + ?Sized
{
    let hh = h / 2.0;
    let k1 = op.derivative(x, *y, lambda);
    let k2 = op.derivative(x + hh, array_step(y, hh, &k1), lambda);
    let k3 = op.derivative(x + hh, array_step(y, hh, &k2), lambda);
    let k4 = op.derivative(x + h, array_step(y, h, &k3), lambda);
    y.iter_mut().enumerate()
        .for_each(|(i, yi)| {
            *yi += h / 6.0 * (k1[i] + 2.0 * (k2[i] + k3[i]) + k4[i]);
        });
}

// take a single adaptive step *in place*, returning the size of the step
// actually taken and the size suggested for the next one
fn rka_step<O>(
    op: &O,
    lambda: f64,
    x: f64,
    y: &mut [f64; 2],
    h: f64,
    config: &IntegratorConfig,
) -> IntegrationResult<(f64, f64)>
where O: Operator + ?Sized
{
    let mut h = h;
    let mut h_new: f64;
    let mut y_half: [f64; 2];
    let mut y_full: [f64; 2];
    let mut er: f64;
    for _ in 0..config.max_attempts {
        if x + h <= x { return Err(IntegrationError::StepUnderflow { x }); }

        // take two half-sized steps
        y_half = *y;
        rk4_step(op, lambda, x, &mut y_half, h / 2.0);
        rk4_step(op, lambda, x + h / 2.0, &mut y_half, h / 2.0);

        // take one full-sized step
        y_full = *y;
        rk4_step(op, lambda, x, &mut y_full, h);

        if !is_finite(&y_half) || !is_finite(&y_full) {
            return Err(IntegrationError::NonFinite { x });
        }

        // compute the estimated local truncation error
        er = error_ratio(&y_half, &y_full, config.rtol, config.atol);

        // estimate new step size (with safety factors)
        h_new = if er == 0.0 {
            h * SAFE2
        } else {
            (h * SAFE1 * er.powf(-0.2)).clamp(h / SAFE2, h * SAFE2)
        };

        if er < 1.0 {
            *y = y_half;
            return Ok((h, h_new));
        }
        h = h_new;
    }
    Err(IntegrationError::ErrorBound { x })
}

/// Integrate the first-order system of `op` for eigenvalue `lambda` across the
/// grid `x`, starting from `u(x[0]) = 0` and `u'(x[0]) = initial_slope`.
///
/// Since the system is linear and homogeneous, the result for any non-zero
/// `initial_slope` is a rescaling of the result for any other.
///
/// Assumes `x` is strictly increasing. Fails with
/// [`IntegrationError::BadGrid`] if `x` has fewer than two points.
///
/// ```
/// use std::f64::consts::PI;
/// use ndarray as nd;
/// use slshoot::{ integrate::{ shoot, IntegratorConfig }, operator::Constant };
///
/// // u'' + 4 u = 0  =>  u = sin(2x) / 2
/// let x: nd::Array1<f64> = nd::Array1::linspace(0.0, PI / 4.0, 50);
/// let traj = shoot(&Constant::string(), &x, 4.0, 1.0, &IntegratorConfig::default())
///     .unwrap();
/// assert!((traj.end_value() - 0.5).abs() < 1e-6);
/// ```
pub fn shoot<O, S>(
    op: &O,
    x: &Arr1<S>,
    lambda: f64,
    initial_slope: f64,
    config: &IntegratorConfig,
) -> IntegrationResult<Trajectory>
where
    O: Operator + ?Sized,
    S: nd::Data<Elem = f64>,
{
    IntegrationError::check_tolerances(config.rtol, config.atol)?;
    let n = x.len();
    IntegrationError::check_grid(n)?;

    let mut u: nd::Array1<f64> = nd::Array1::zeros(n);
    let mut du: nd::Array1<f64> = nd::Array1::zeros(n);

    let mut y: [f64; 2] = [0.0, initial_slope];
    du[0] = initial_slope;
    let mut h: f64 = x[1] - x[0];
    let mut xt: f64;
    let mut remaining: f64;
    let mut clipped: bool;
    let mut step: f64;
    let iter
        = x.iter().zip(x.iter().skip(1))
        .zip(u.iter_mut().skip(1).zip(du.iter_mut().skip(1)));
    for ((&xk, &xkp1), (ukp1, dukp1)) in iter {
        xt = xk;
        while xt < xkp1 {
            remaining = xkp1 - xt;
            clipped = h >= remaining;
            step = if clipped { remaining } else { h };
            let (taken, next) = rka_step(op, lambda, xt, &mut y, step, config)?;
            if taken >= remaining {
                xt = xkp1;
            } else {
                xt += taken;
            }
            // a step shortened only to land on the grid says nothing about
            // the size the next one can take
            if !(clipped && taken == step) { h = next; }
        }
        *ukp1 = y[0];
        *dukp1 = y[1];
    }
    Ok(Trajectory { u, du })
}

/// Shoot for each eigenvalue in `lambdas` and return the values of u at the
/// last grid point.
///
/// The first integration failure is returned.
pub fn shoot_scan<O, S, T>(
    op: &O,
    x: &Arr1<S>,
    lambdas: &Arr1<T>,
    initial_slope: f64,
    config: &IntegratorConfig,
) -> IntegrationResult<nd::Array1<f64>>
where
    O: Operator + ?Sized,
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    lambdas.iter()
        .map(|&l| shoot(op, x, l, initial_slope, config).map(|t| t.end_value()))
        .collect::<IntegrationResult<Vec<f64>>>()
        .map(nd::Array1::from_vec)
}
