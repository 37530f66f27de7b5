//! Functions to find zeros in array-sampled (continuous) functions via Lagrange
//! interpolation.
//!
//! ```
//! use ndarray as nd;
//! use slshoot::interp::{ Zero, find_zeros };
//!
//! let x: nd::Array1<f64> = nd::Array::linspace(-5.0, 5.0, 1000);
//! let y = x.mapv(|xk| (xk + 3.0) * (xk - 0.5) * (xk - 2.0));
//! let zeros = find_zeros(&x, &y, Zero::All).unwrap();
//! assert!(
//!     [-3.0, 0.5, 2.0].into_iter()
//!         .zip(zeros)
//!         .all(|(expected, computed)| (computed - expected).abs() < 1e-6)
//! )
//! ```

use std::cmp;
use log::warn;
use ndarray as nd;
use num_traits::Num;
use crate::error::*;

pub type InterpResult<T> = Result<T, InterpError>;

/// Specifies a set of zeros to look for in [`find_zeros`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Zero {
    /// Points at which a function changes from positive to negative.
    Falling,
    /// Points at which a function changes from negative to positive.
    Rising,
    /// Either/both of the above.
    All,
}

impl Zero {
    fn matches<A>(&self, a: &A, b: &A) -> bool
    where A: PartialEq + PartialOrd
    {
        match self {
            Self::Falling if a > b => true,
            Self::Rising if a < b => true,
            Self::All if a != b => true,
            _ => false,
        }
    }
}

/// A located zero of a sampled function.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Crossing<A> {
    /// Index of the first sample at or past the zero; the zero lies between
    /// samples `index - 1` and `index` (or exactly on `index`).
    pub index: usize,
    /// Interpolated location of the zero.
    pub x: A,
}

/// Compute the value of a sampled function via a Lagrange polynomial.
pub fn lagrange<S, T, A>(
    data_x: &nd::ArrayBase<S, nd::Ix1>,
    data_y: &nd::ArrayBase<T, nd::Ix1>,
    x: A,
) -> InterpResult<A>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Num + Copy
{
    LengthError::check(data_x, data_y)?;
    let res: A
        = data_x.iter().zip(data_y).enumerate()
        .map(|(j, (xj, yj))| {
            let xj = *xj;
            let inner
                = data_x.iter().enumerate()
                .filter(|(m, _)| *m != j)
                .map(|(_, xm)| (x - *xm) / (xj - *xm))
                .fold(A::one(), A::mul);
            *yj * inner
        })
        .fold(A::zero(), A::add);
    Ok(res)
}

/// Return all zeros of a given kind in a sampled function, along with the
/// index of the sample that bounds each one from above.
///
/// Each zero is located by inverse Lagrange interpolation over (up to) four
/// samples around the sign change, so the function must be locally invertible
/// on the scale of a few grid points. A sample that is exactly zero is
/// reported as-is and not counted again on the following interval.
pub fn find_crossings<S, T, A>(
    data_x: &nd::ArrayBase<S, nd::Ix1>,
    data_y: &nd::ArrayBase<T, nd::Ix1>,
    kind: Zero,
) -> InterpResult<Vec<Crossing<A>>>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Num + PartialOrd + Copy,
{
    LengthError::check(data_x, data_y)?;
    LagrangeError::check(data_x)?;
    let n = data_x.len();
    let z = A::zero();
    let crossings: Vec<Crossing<A>>
        = data_x.iter().zip(data_y).zip(data_y.iter().skip(1))
        .enumerate()
        .filter_map(|(i, ((_, yi), yip1))| {
            let j = i + 1;
            if *yip1 == z {
                Some(Ok(Crossing { index: j, x: data_x[j] }))
            } else if *yi != z && *yi * *yip1 < z && kind.matches(yi, yip1) {
                let il = j.saturating_sub(2);
                let ir = cmp::min(n, j + 2);
                if ir - il < 4 {
                    warn!(
                        "interp::find_crossings: attempting to interpolate \
                        near an edge of the given data; some accuracy may be \
                        lost"
                    );
                }
                let interp
                    = lagrange(
                        &data_y.slice(nd::s![il..ir]),
                        &data_x.slice(nd::s![il..ir]),
                        z,
                    )
                    .map(|x| Crossing { index: j, x });
                Some(interp)
            } else {
                None
            }
        })
        .collect::<InterpResult<_>>()?;
    Ok(crossings)
}

/// Return a list of all zeros of a given kind in a sampled function.
///
/// See [`find_crossings`].
pub fn find_zeros<S, T, A>(
    data_x: &nd::ArrayBase<S, nd::Ix1>,
    data_y: &nd::ArrayBase<T, nd::Ix1>,
    kind: Zero,
) -> InterpResult<Vec<A>>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Num + PartialOrd + Copy,
{
    find_crossings(data_x, data_y, kind)
        .map(|cc| cc.into_iter().map(|c| c.x).collect())
}
