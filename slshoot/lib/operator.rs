//! Coefficients of the second-order operator and the equivalent first-order
//! system advanced by the shooting integrator.
//!
//! An operator is described by three coefficient functions in
//! ```text
//! p(x) u'' + q(x) u' + (r(x) - λ) u = 0
//! ```
//! which is rewritten as the two-component system
//! ```text
//! d/dx [u, u'] = [u', (-q u' - (r - λ) u) / p]
//! ```

/// Smallest magnitude allowed for `sin(x)` before it appears in a denominator.
pub const SIN_FLOOR: f64 = 1e-10;

/// Values of the coefficient functions at a single point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coefficients {
    /// Leading (second-derivative) coefficient.
    pub p: f64,
    /// Damping (first-derivative) coefficient.
    pub q: f64,
    /// Potential coefficient; the eigenvalue is subtracted from this.
    pub r: f64,
}

/// A second-order linear operator with eigenvalue parameter λ.
pub trait Operator {
    /// Evaluate the coefficient functions at `x`.
    fn coefficients(&self, x: f64) -> Coefficients;

    /// Evaluate the right-hand side of the first-order system at `x` for the
    /// state `y = [u, u']`.
    fn derivative(&self, x: f64, y: [f64; 2], lambda: f64) -> [f64; 2] {
        let [u, du] = y;
        let Coefficients { p, q, r } = self.coefficients(x);
        [du, (-q * du - (r - lambda) * u) / p]
    }
}

impl<O: Operator + ?Sized> Operator for &O {
    fn coefficients(&self, x: f64) -> Coefficients {
        (**self).coefficients(x)
    }
}

/// The angular operator with fixed mode number `m`:
/// ```text
/// p(x) = -cos⁴(x) / 2
/// q(x) = -cos³(x) cos(2x) / (2 sin x)
/// r(x) = m² cos²(x) / (2 sin² x) - cos(x) / sin(x)
/// ```
///
/// Both ends of (0, π/2) are singular points. `sin(x)` is clamped to
/// [`SIN_FLOOR`] in magnitude, so evaluation at `x = 0` stays finite.
///
/// ```
/// use slshoot::operator::{ Angular, Operator };
///
/// let c = Angular::default().coefficients(std::f64::consts::FRAC_PI_4);
/// assert!((c.p + 0.125).abs() < 1e-15);
/// assert!(c.q.abs() < 1e-15);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Angular {
    /// Mode number.
    pub m: f64,
}

impl Default for Angular {
    fn default() -> Self { Self { m: 1.0 } }
}

impl Angular {
    /// Create a new operator for mode number `m`.
    pub fn new(m: f64) -> Self { Self { m } }
}

impl Operator for Angular {
    fn coefficients(&self, x: f64) -> Coefficients {
        let cos_x = x.cos();
        let cos_2x = (2.0 * x).cos();
        let mut sin_x = x.sin();
        if sin_x.abs() < SIN_FLOOR { sin_x = SIN_FLOOR; }

        let p = -0.5 * cos_x.powi(4);
        let q = -0.5 * (cos_x.powi(3) * cos_2x / sin_x);
        let r = self.m.powi(2) * cos_x.powi(2) / (2.0 * sin_x.powi(2))
            - cos_x / sin_x;
        Coefficients { p, q, r }
    }
}

/// Operator with constant coefficients.
///
/// `Constant { p: -1.0, q: 0.0, r: 0.0 }` gives `u'' + λu = 0`, whose
/// Dirichlet eigenvalues on (0, L) are (nπ/L)².
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Constant {
    pub p: f64,
    pub q: f64,
    pub r: f64,
}

impl Constant {
    /// `u'' + λu = 0`.
    pub fn string() -> Self { Self { p: -1.0, q: 0.0, r: 0.0 } }
}

impl Operator for Constant {
    fn coefficients(&self, _x: f64) -> Coefficients {
        Coefficients { p: self.p, q: self.q, r: self.r }
    }
}
