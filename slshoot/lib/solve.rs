//! Shooting-method solution of the eigenvalue problem
//! ```text
//! p(x) u'' + q(x) u' + (r(x) - λ) u = 0,    u(x_start) = u(x_end) = 0
//! ```
//! on a fixed, evenly spaced grid.

use std::{ cmp, f64::consts::FRAC_PI_2 };
use log::{ debug, info, warn };
use ndarray as nd;
use crate::{
    Arr1,
    error::EigenError,
    integrate::{ self, IntegratorConfig, Trajectory },
    interp::{ self, Zero },
    operator::{ Angular, Operator },
    utils::wf_renormalize,
    DEF_EPSILON,
    DEF_MAXITERS,
};

pub type EigenResult<T> = Result<T, EigenError>;

/// Default left end of the domain, just inside the singular point at 0.
pub const DEF_X_START: f64 = 1e-4;

/// Default right end of the domain, just inside the singular point at π/2.
pub const DEF_X_END: f64 = FRAC_PI_2 - 1e-4;

/// Default number of grid points.
pub const DEF_NUM_POINTS: usize = 1000;

/// A single solution to the eigenvalue problem.
///
/// The eigenfunction is sampled at every point of the [`Domain`] it was
/// computed on and normalized to ∫u² dx = 1.
#[derive(Clone, Debug)]
pub struct Eigenpair {
    /// Eigenvalue
    pub lambda: f64,
    /// Eigenfunction
    pub u: nd::Array1<f64>,
}

impl Eigenpair {
    /// Compare two `Eigenpair`s by their eigenvalue.
    pub fn cmp_lambda(&self, other: &Self) -> Option<cmp::Ordering> {
        self.lambda.partial_cmp(&other.lambda)
    }
}

/// Evenly spaced coordinate grid.
///
/// The grid is fixed at construction and guaranteed to have at least two
/// points with finite, strictly increasing coordinates.
#[derive(Clone, Debug)]
pub struct Domain {
    // coordinate array
    x: nd::Array1<f64>,
    // coordinate array grid spacing
    dx: f64,
    // array size
    n: usize,
}

impl Default for Domain {
    fn default() -> Self {
        let x: nd::Array1<f64>
            = nd::Array1::linspace(DEF_X_START, DEF_X_END, DEF_NUM_POINTS);
        let dx = x[1] - x[0];
        Self { x, dx, n: DEF_NUM_POINTS }
    }
}

impl Domain {
    /// Create a new `Domain` from "linspace-style" arguments (start, inclusive
    /// end, and an array length).
    pub fn new_linspace(start: f64, end: f64, num_points: usize)
        -> EigenResult<Self>
    {
        if !(start.is_finite() && end.is_finite() && start < end) {
            return Err(EigenError::BadDomain(start, end));
        }
        if num_points < 2 { return Err(EigenError::BadGrid(num_points)); }
        let x: nd::Array1<f64> = nd::Array1::linspace(start, end, num_points);
        let dx = x[1] - x[0];
        Ok(Self { x, dx, n: num_points })
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the coordinate array grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the first coordinate.
    pub fn start(&self) -> f64 { self.x[0] }

    /// Get the last coordinate.
    pub fn end(&self) -> f64 { self.x[self.n - 1] }

    /// Get the length of the coordinate array.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }
}

/// Rule used to narrow the eigenvalue bracket after each evaluation of
/// u(x_end).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BracketRule {
    /// Keep the lower half of the bracket whenever u(x_end) > 0 and the upper
    /// half otherwise. This assumes u(x_end) increases with λ across the
    /// bracket and never checks that the bracket contains a root.
    #[default]
    Descending,
    /// Evaluate both ends of the bracket first and fail with
    /// [`EigenError::NoSignChange`] if they have the same sign; then keep
    /// whichever half has ends of opposite sign.
    SignChange,
}

/// Eigenvalue search parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchConfig {
    /// Convergence bound on |u(x_end)| (default: `1e-6`). Zero is allowed and
    /// can never be met.
    pub tolerance: f64,
    /// Maximum number of bisection iterations per eigenvalue (default: `100`).
    pub max_iterations: usize,
    /// Half-width of the bracket centered on each guess (default: `5.0`).
    pub half_width: f64,
    /// Offset from a found eigenvalue to the next guess (default: `5.0`).
    pub step: f64,
    /// Guess for the first eigenvalue (default: `1.0`).
    pub initial_guess: f64,
    /// Value of u'(x_start) used for every shot (default: `1.0`).
    pub initial_slope: f64,
    /// Bracket narrowing rule (default: [`BracketRule::Descending`]).
    pub rule: BracketRule,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tolerance: DEF_EPSILON,
            max_iterations: DEF_MAXITERS,
            half_width: 5.0,
            step: 5.0,
            initial_guess: 1.0,
            initial_slope: 1.0,
            rule: BracketRule::Descending,
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct Bounds<T>(T, T);

impl Bounds<f64> {
    fn midpoint(self) -> f64 { (self.0 + self.1) / 2.0 }
}

impl<T: PartialOrd> Bounds<T> {
    fn from_ord(xx: (T, T)) -> Self {
        if xx.0 > xx.1 { Self(xx.1, xx.0) } else { Self(xx.0, xx.1) }
    }
}

fn bisect_descending<F>(
    mut end_value: F,
    guess: f64,
    mut lb: Bounds<f64>,
    tolerance: f64,
    max_iterations: usize,
) -> EigenResult<f64>
where F: FnMut(f64) -> EigenResult<f64>
{
    let mut lambda: f64;
    let mut d: f64;
    for i in 0..max_iterations {
        lambda = lb.midpoint();
        d = end_value(lambda)?;
        debug!("  iteration {}: lambda = {:.6}, u(end) = {:.6e}", i + 1, lambda, d);
        if d.abs() < tolerance {
            info!("found eigenvalue lambda = {:.6} after {} iterations", lambda, i + 1);
            return Ok(lambda);
        }
        if d > 0.0 { lb.1 = lambda; } else { lb.0 = lambda; }
    }
    Err(EigenError::Convergence { guess, iterations: max_iterations })
}

fn bisect_sign_change<F>(
    mut end_value: F,
    guess: f64,
    mut lb: Bounds<f64>,
    tolerance: f64,
    max_iterations: usize,
) -> EigenResult<f64>
where F: FnMut(f64) -> EigenResult<f64>
{
    let mut db: Bounds<f64> = Bounds(end_value(lb.0)?, end_value(lb.1)?);
    if db.0.abs() < tolerance { return Ok(lb.0); }
    if db.1.abs() < tolerance { return Ok(lb.1); }
    if db.0 * db.1 > 0.0 || db.0.is_nan() || db.1.is_nan() {
        return Err(EigenError::NoSignChange { lo: lb.0, hi: lb.1 });
    }
    let mut lambda: f64;
    let mut d: f64;
    for i in 0..max_iterations {
        lambda = lb.midpoint();
        d = end_value(lambda)?;
        debug!("  iteration {}: lambda = {:.6}, u(end) = {:.6e}", i + 1, lambda, d);
        if d.abs() < tolerance {
            info!("found eigenvalue lambda = {:.6} after {} iterations", lambda, i + 1);
            return Ok(lambda);
        }
        if (d > 0.0) == (db.0 > 0.0) {
            lb.0 = lambda;
            db.0 = d;
        } else {
            lb.1 = lambda;
            db.1 = d;
        }
    }
    Err(EigenError::Convergence { guess, iterations: max_iterations })
}

// search for a root of `end_value` inside `bounds`; `guess` is only reported
// back in errors
fn bisect<F>(
    end_value: F,
    guess: f64,
    bounds: (f64, f64),
    rule: BracketRule,
    tolerance: f64,
    max_iterations: usize,
) -> EigenResult<f64>
where F: FnMut(f64) -> EigenResult<f64>
{
    EigenError::check_tolerance(tolerance)?;
    EigenError::check_maxiters(max_iterations)?;
    let lb = Bounds::from_ord(bounds);
    match rule {
        BracketRule::Descending
            => bisect_descending(end_value, guess, lb, tolerance, max_iterations),
        BracketRule::SignChange
            => bisect_sign_change(end_value, guess, lb, tolerance, max_iterations),
    }
}

/// Find λ such that `|end_value(λ)| < tolerance` by bisection over the bracket
/// `[guess - half_width, guess + half_width]`.
///
/// `end_value` is usually the value of a shot solution at the far end of the
/// domain; any error it returns is passed through unchanged. Fails with
/// [`EigenError::Convergence`] if `max_iterations` midpoints are tried without
/// meeting the tolerance.
///
/// ```
/// use slshoot::solve::{ find_eigenvalue, SearchConfig };
///
/// let config = SearchConfig::default();
/// let lambda = find_eigenvalue(|l| Ok(l - 3.2), 1.0, &config).unwrap();
/// assert!((lambda - 3.2).abs() < 1e-6);
/// ```
pub fn find_eigenvalue<F>(end_value: F, guess: f64, config: &SearchConfig)
    -> EigenResult<f64>
where F: FnMut(f64) -> EigenResult<f64>
{
    info!("searching for eigenvalue near lambda = {:.6}", guess);
    bisect(
        end_value,
        guess,
        (guess - config.half_width, guess + config.half_width),
        config.rule,
        config.tolerance,
        config.max_iterations,
    )
}

/// Shooting-method eigenvalue solver for an [`Operator`] on a fixed
/// [`Domain`].
///
/// ```no_run
/// use slshoot::solve::Solver;
///
/// let solver = Solver::default();
/// let (eigenvalues, eigenfunctions) = solver.find_multiple_eigenvalues(8)?;
/// assert_eq!(eigenfunctions.nrows(), eigenvalues.len());
/// # Ok::<(), slshoot::error::EigenError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Solver<O = Angular> {
    domain: Domain,
    op: O,
    search: SearchConfig,
    integ: IntegratorConfig,
}

impl Default for Solver<Angular> {
    fn default() -> Self { Self::from_domain(Domain::default(), Angular::default()) }
}

impl Solver<Angular> {
    /// Create a new solver for the [angular operator][Angular] with `m = 1`
    /// over `num_points` evenly spaced points in `[x_start, x_end]`.
    pub fn new(x_start: f64, x_end: f64, num_points: usize) -> EigenResult<Self> {
        let domain = Domain::new_linspace(x_start, x_end, num_points)?;
        Ok(Self::from_domain(domain, Angular::default()))
    }
}

impl<O> Solver<O> {
    /// Create a new solver from a domain and an operator, with default search
    /// and integrator parameters.
    pub fn from_domain(domain: Domain, op: O) -> Self {
        info!(
            "initialized solver with domain [{:.6}, {:.6}] using {} points",
            domain.start(), domain.end(), domain.len(),
        );
        Self {
            domain,
            op,
            search: SearchConfig::default(),
            integ: IntegratorConfig::default(),
        }
    }

    /// Replace the operator, keeping everything else.
    pub fn with_operator<P>(self, op: P) -> Solver<P> {
        Solver { domain: self.domain, op, search: self.search, integ: self.integ }
    }

    /// Replace the search parameters.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Replace the integrator parameters.
    pub fn with_integrator(mut self, integ: IntegratorConfig) -> Self {
        self.integ = integ;
        self
    }

    /// Get a reference to the domain.
    pub fn domain(&self) -> &Domain { &self.domain }

    /// Get a reference to the operator.
    pub fn operator(&self) -> &O { &self.op }

    /// Get a reference to the search parameters.
    pub fn search_config(&self) -> &SearchConfig { &self.search }

    /// Get a reference to the integrator parameters.
    pub fn integrator_config(&self) -> &IntegratorConfig { &self.integ }
}

impl<O: Operator> Solver<O> {
    /// Integrate across the whole domain for a fixed eigenvalue, starting from
    /// `u(x_start) = 0` with the configured initial slope.
    pub fn shoot(&self, lambda: f64) -> EigenResult<Trajectory> {
        let traj = integrate::shoot(
            &self.op,
            &self.domain.x,
            lambda,
            self.search.initial_slope,
            &self.integ,
        )?;
        Ok(traj)
    }

    /// Return u(x_end) for a fixed eigenvalue.
    pub fn end_value(&self, lambda: f64) -> EigenResult<f64> {
        self.shoot(lambda).map(|traj| traj.end_value())
    }

    /// Return u(x_end) for each eigenvalue in `lambdas`.
    pub fn shoot_scan<S>(&self, lambdas: &Arr1<S>) -> EigenResult<nd::Array1<f64>>
    where S: nd::Data<Elem = f64>
    {
        let ends = integrate::shoot_scan(
            &self.op,
            &self.domain.x,
            lambdas,
            self.search.initial_slope,
            &self.integ,
        )?;
        Ok(ends)
    }

    /// Find a single eigenvalue near `guess` using the configured search
    /// parameters.
    pub fn find_eigenvalue(&self, guess: f64) -> EigenResult<f64> {
        find_eigenvalue(|l| self.end_value(l), guess, &self.search)
    }

    /// Like [`Self::find_eigenvalue`], but override the tolerance and
    /// iteration cap.
    pub fn find_eigenvalue_with(
        &self,
        guess: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> EigenResult<f64>
    {
        let config = SearchConfig { tolerance, max_iterations, ..self.search };
        find_eigenvalue(|l| self.end_value(l), guess, &config)
    }

    /// Shoot at `lambda` and normalize the result to ∫u² dx = 1.
    pub fn eigenpair(&self, lambda: f64) -> EigenResult<Eigenpair> {
        let mut u = self.shoot(lambda)?.u;
        let norm = wf_renormalize(&mut u, self.domain.dx)
            .ok_or(EigenError::ZeroNorm { lambda })?;
        info!("normalized eigenfunction with norm factor: {:.6}", norm);
        Ok(Eigenpair { lambda, u })
    }

    /// Find `num_eigenvalues` successive eigenpairs.
    ///
    /// The first search is centered on the configured initial guess; each
    /// following one is centered `step` past the previously found eigenvalue.
    /// Any failure aborts the whole run.
    pub fn find_eigenpairs(&self, num_eigenvalues: usize)
        -> EigenResult<Vec<Eigenpair>>
    {
        info!("finding {} eigenvalues and eigenfunctions", num_eigenvalues);
        let mut pairs: Vec<Eigenpair> = Vec::with_capacity(num_eigenvalues);
        let mut guess: f64 = self.search.initial_guess;
        let mut lambda: f64;
        for i in 0..num_eigenvalues {
            info!("searching for eigenvalue {}/{}", i + 1, num_eigenvalues);
            lambda = self.find_eigenvalue(guess)?;
            if let Some(prev) = pairs.last() {
                if lambda <= prev.lambda {
                    warn!(
                        "eigenvalue {} (lambda = {:.6}) does not exceed the \
                        previous one (lambda = {:.6})",
                        i + 1, lambda, prev.lambda,
                    );
                }
            }
            pairs.push(self.eigenpair(lambda)?);
            guess = lambda + self.search.step;
            debug!("next eigenvalue guess: {:.6}", guess);
        }
        info!("completed eigenvalue and eigenfunction calculations");
        Ok(pairs)
    }

    /// Find `num_eigenvalues` successive eigenpairs, returned as an array of
    /// eigenvalues and a matrix with one eigenfunction per row.
    ///
    /// See [`Self::find_eigenpairs`].
    pub fn find_multiple_eigenvalues(&self, num_eigenvalues: usize)
        -> EigenResult<(nd::Array1<f64>, nd::Array2<f64>)>
    {
        let pairs = self.find_eigenpairs(num_eigenvalues)?;
        let lambdas: nd::Array1<f64> = pairs.iter().map(|p| p.lambda).collect();
        let mut wfs: nd::Array2<f64>
            = nd::Array2::zeros((pairs.len(), self.domain.n));
        wfs.outer_iter_mut().zip(&pairs)
            .for_each(|(mut row, p)| { row.assign(&p.u); });
        Ok((lambdas, wfs))
    }

    /// Find every eigenpair whose eigenvalue lies within a scan of
    /// eigenvalues.
    ///
    /// u(x_end) is computed for each element of `lambdas` (which must be
    /// increasing and have at least 5 elements), each sign change is located
    /// by interpolation, and the estimate is refined by bisection between the
    /// two scan values around it using [`BracketRule::SignChange`] with the
    /// configured tolerance and iteration cap.
    pub fn solve_scan<S>(&self, lambdas: &Arr1<S>) -> EigenResult<Vec<Eigenpair>>
    where S: nd::Data<Elem = f64>
    {
        let ends = self.shoot_scan(lambdas)?;
        let crossings = interp::find_crossings(lambdas, &ends, Zero::All)?;
        info!("scan located {} sign changes in u(end)", crossings.len());
        let mut pairs: Vec<Eigenpair> = Vec::with_capacity(crossings.len());
        let mut bounds: (f64, f64);
        let mut estimate: f64;
        let mut lambda: f64;
        for c in crossings.into_iter() {
            bounds = (lambdas[c.index.saturating_sub(1)], lambdas[c.index]);
            estimate
                = if c.x.is_finite() && bounds.0 <= c.x && c.x <= bounds.1 {
                    c.x
                } else {
                    (bounds.0 + bounds.1) / 2.0
                };
            lambda
                = if self.end_value(estimate)?.abs() < self.search.tolerance {
                    estimate
                } else {
                    bisect(
                        |l| self.end_value(l),
                        estimate,
                        bounds,
                        BracketRule::SignChange,
                        self.search.tolerance,
                        self.search.max_iterations,
                    )?
                };
            pairs.push(self.eigenpair(lambda)?);
        }
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use approx::assert_abs_diff_eq;
    use crate::{
        error::IntegrationError,
        operator::Constant,
        utils::{ wf_dot, wf_norm },
    };
    use super::*;

    fn string_solver(num_points: usize) -> Solver<Constant> {
        let domain = Domain::new_linspace(0.0, PI, num_points).unwrap();
        Solver::from_domain(domain, Constant::string())
            .with_integrator(IntegratorConfig {
                rtol: 1e-10,
                atol: 1e-12,
                ..IntegratorConfig::default()
            })
    }

    #[test]
    fn default_domain() {
        let solver = Solver::default();
        let domain = solver.domain();
        assert_eq!(domain.len(), 1000);
        assert_eq!(domain.start(), 1e-4);
        assert_abs_diff_eq!(domain.end(), FRAC_PI_2 - 1e-4, epsilon = 1e-15);
        assert_eq!(solver.operator(), &Angular { m: 1.0 });
        assert_eq!(solver.search_config(), &SearchConfig::default());
    }

    #[test]
    fn bad_domains() {
        assert!(matches!(Solver::new(0.0, 1.0, 1), Err(EigenError::BadGrid(1))));
        assert!(matches!(Solver::new(1.0, 0.5, 10), Err(EigenError::BadDomain(..))));
        assert!(matches!(
            Solver::new(0.0, f64::INFINITY, 10),
            Err(EigenError::BadDomain(..))
        ));
        assert!(Solver::new(0.1, 0.2, 2).is_ok());
    }

    #[test]
    fn descending_rule_finds_rising_root() {
        let config = SearchConfig::default();
        let lambda = find_eigenvalue(|l| Ok(l - 3.2), 1.0, &config).unwrap();
        assert_abs_diff_eq!(lambda, 3.2, epsilon = 1e-6);
    }

    #[test]
    fn descending_rule_misses_falling_root() {
        let config = SearchConfig::default();
        let err = find_eigenvalue(|l| Ok(3.2 - l), 1.0, &config).unwrap_err();
        assert!(matches!(
            err,
            EigenError::Convergence { guess, iterations: 100 } if guess == 1.0
        ));
    }

    #[test]
    fn sign_change_rule_finds_falling_root() {
        let config = SearchConfig { rule: BracketRule::SignChange, ..SearchConfig::default() };
        let lambda = find_eigenvalue(|l| Ok(3.2 - l), 1.0, &config).unwrap();
        assert_abs_diff_eq!(lambda, 3.2, epsilon = 1e-6);
    }

    #[test]
    fn sign_change_rule_rejects_rootless_bracket() {
        let config = SearchConfig { rule: BracketRule::SignChange, ..SearchConfig::default() };
        let err = find_eigenvalue(|l| Ok(l * l + 1.0), 1.0, &config).unwrap_err();
        assert!(matches!(err, EigenError::NoSignChange { lo, hi } if lo == -4.0 && hi == 6.0));
    }

    #[test]
    fn search_passes_errors_through() {
        let config = SearchConfig::default();
        let err = find_eigenvalue(
            |_| Err(IntegrationError::NonFinite { x: 0.5 }.into()),
            1.0,
            &config,
        )
        .unwrap_err();
        assert!(err.is_integration());
    }

    #[test]
    fn bad_search_parameters() {
        let solver = string_solver(11);
        assert!(matches!(
            solver.find_eigenvalue_with(1.0, -1.0, 10),
            Err(EigenError::BadTolerance(_))
        ));
        assert!(matches!(
            solver.find_eigenvalue_with(1.0, 1e-6, 0),
            Err(EigenError::BadMaxiters(0))
        ));
    }

    #[test]
    fn zero_tolerance_exhausts_iterations() {
        let solver = string_solver(101);
        let err = solver.find_eigenvalue_with(1.0, 0.0, 3).unwrap_err();
        assert!(matches!(
            err,
            EigenError::Convergence { guess, iterations: 3 } if guess == 1.0
        ));
        let err = solver.find_eigenvalue_with(-7.3, 0.0, 3).unwrap_err();
        assert!(err.is_convergence());
    }

    #[test]
    fn string_eigenvalues() {
        let solver = string_solver(501);
        let (lambdas, wfs) = solver.find_multiple_eigenvalues(4).unwrap();
        assert_eq!(lambdas.len(), 4);
        assert_eq!(wfs.dim(), (4, 501));
        for (l, expected) in lambdas.iter().zip([1.0, 4.0, 9.0, 16.0]) {
            assert_abs_diff_eq!(*l, expected, epsilon = 1e-4);
        }
        assert!(lambdas.iter().zip(lambdas.iter().skip(1)).all(|(a, b)| a < b));
    }

    #[test]
    fn descending_driver_narrows_onto_rising_root() {
        // neither guess is an eigenvalue; both searches bisect down onto λ = 4,
        // the second one from above
        let solver = string_solver(301)
            .with_search(SearchConfig {
                initial_guess: 3.0,
                step: 4.3,
                ..SearchConfig::default()
            });
        let pairs = solver.find_eigenpairs(2).unwrap();
        assert_eq!(pairs.len(), 2);
        for p in pairs.iter() {
            assert_abs_diff_eq!(p.lambda, 4.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn descending_driver_misses_falling_root() {
        // u(π) > 0 everywhere below λ = 1, so the bracket slides to its lower end
        let solver = string_solver(101)
            .with_search(SearchConfig { initial_guess: 0.7, ..SearchConfig::default() });
        let err = solver.find_multiple_eigenvalues(1).unwrap_err();
        assert!(matches!(
            err,
            EigenError::Convergence { guess, iterations: 100 } if guess == 0.7
        ));
    }

    #[test]
    fn sign_change_driver_finds_falling_root() {
        let solver = string_solver(301)
            .with_search(SearchConfig {
                initial_guess: 0.7,
                half_width: 2.0,
                step: 2.5,
                rule: BracketRule::SignChange,
                ..SearchConfig::default()
            });
        let (lambdas, _) = solver.find_multiple_eigenvalues(2).unwrap();
        assert_abs_diff_eq!(lambdas[0], 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(lambdas[1], 4.0, epsilon = 1e-4);
    }

    #[test]
    fn string_eigenfunctions_are_orthonormal() {
        let solver = string_solver(501);
        let dx = solver.domain().get_dx();
        let pairs = solver.find_eigenpairs(3).unwrap();
        for (i, pi) in pairs.iter().enumerate() {
            assert_eq!(pi.u.len(), 501);
            assert_abs_diff_eq!(wf_norm(&pi.u, dx), 1.0, epsilon = 1e-10);
            for pj in pairs.iter().skip(i + 1) {
                assert!(wf_dot(&pi.u, &pj.u, dx).abs() < 1e-4);
                assert_eq!(pi.cmp_lambda(pj), Some(cmp::Ordering::Less));
            }
        }
        // u = sin(x) * sqrt(2 / π)
        let x = solver.domain().get_x();
        let expected = x.mapv(|xk| xk.sin() * (2.0 / PI).sqrt());
        let err = (&pairs[0].u - &expected).mapv(f64::abs).fold(0.0, |a: f64, b| a.max(*b));
        assert!(err < 1e-4);
    }

    #[test]
    fn two_point_domain() {
        let solver = string_solver(2);
        let pair = solver.eigenpair(2.0).unwrap();
        assert_eq!(pair.u.len(), 2);
        assert_eq!(pair.u[0], 0.0);
        assert_abs_diff_eq!(wf_norm(&pair.u, solver.domain().get_dx()), 1.0, epsilon = 1e-12);
        let lambda = solver.find_eigenvalue(4.0).unwrap();
        assert_abs_diff_eq!(lambda, 4.0, epsilon = 1e-4);
    }

    #[test]
    fn zero_solution_cannot_be_normalized() {
        let solver = string_solver(11)
            .with_search(SearchConfig { initial_slope: 0.0, ..SearchConfig::default() });
        assert!(matches!(solver.eigenpair(1.0), Err(EigenError::ZeroNorm { .. })));
    }

    #[test]
    fn zero_eigenfunctions_requested() {
        let (lambdas, wfs) = string_solver(11).find_multiple_eigenvalues(0).unwrap();
        assert_eq!(lambdas.len(), 0);
        assert_eq!(wfs.dim(), (0, 11));
    }

    #[test]
    fn scan_finds_both_crossing_directions() {
        let solver = string_solver(301);
        let lambdas: nd::Array1<f64> = nd::Array1::linspace(0.3, 30.3, 61);
        let pairs = solver.solve_scan(&lambdas).unwrap();
        assert_eq!(pairs.len(), 5);
        for (p, expected) in pairs.iter().zip([1.0, 4.0, 9.0, 16.0, 25.0]) {
            assert_abs_diff_eq!(p.lambda, expected, epsilon = 1e-4);
        }
    }

    #[test]
    #[ignore = "slow: full default angular run"]
    fn default_solver_single_eigenpair() {
        let solver = Solver::default();
        let (lambdas, wfs) = solver.find_multiple_eigenvalues(1).unwrap();
        assert_eq!(lambdas.len(), 1);
        assert!(lambdas[0].is_finite());
        assert_eq!(wfs.dim(), (1, 1000));
        let norm = wf_norm(&wfs.row(0), solver.domain().get_dx()).sqrt();
        assert_abs_diff_eq!(norm, 1.0, epsilon = 1e-4);
    }

    #[test]
    #[ignore = "slow: full default angular run"]
    fn default_solver_eigenvalues_increase() {
        let solver = Solver::default();
        let dx = solver.domain().get_dx();
        let pairs = solver.find_eigenpairs(3).unwrap();
        assert_eq!(pairs.len(), 3);
        for (a, b) in pairs.iter().zip(pairs.iter().skip(1)) {
            assert!(a.lambda < b.lambda);
        }
        for p in pairs.iter() {
            assert_eq!(p.u.len(), 1000);
            assert_abs_diff_eq!(wf_norm(&p.u, dx), 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    #[ignore = "slow: resolves ~1e4 oscillations near π/2"]
    fn angular_large_eigenvalue_on_default_domain() {
        // the solution decays like (π/2 - x) near the right end, so u(end) is
        // small rather than large
        let u_end = Solver::default().end_value(1e6).unwrap();
        assert!(u_end.is_finite());
        assert!(u_end.abs() < 1e-3);
    }

    #[test]
    fn angular_negative_eigenvalue_is_an_integration_failure() {
        let solver = Solver::default();
        let err = solver.end_value(-5.0).unwrap_err();
        assert!(err.is_integration());
        assert!(!err.is_convergence());
    }
}
