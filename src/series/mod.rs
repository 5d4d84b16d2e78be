//! Series expansions y = sum c_i F_i(x) over a family of polynomials.
//!
//! Power series are evaluated with the Horner scheme, Legendre and Chebyshev
//! series with the Clenshaw recursion. Every series offers its derivative and
//! primitive as another series of the same kind, its integral and first
//! moment over its domain, and a lin-lin table that reproduces it.
//!
//! ```rust
//! use tabulated::linearisation::ToleranceConvergence;
//! use tabulated::series::LegendreSeries;
//! use tabulated::Function1D;
//!
//! // P_2(x) = (3 x^2 - 1) / 2
//! let series = LegendreSeries::new(vec![0.0, 0.0, 1.0]).unwrap();
//! assert_eq!(series.evaluate(1.0).unwrap(), 1.0);
//! assert_eq!(series.derivative().coefficients(), &[0.0, 3.0]);
//!
//! let table = series.linearise(&ToleranceConvergence::with_tolerance(1e-3)).unwrap();
//! assert_eq!(table.x().first(), Some(&-1.0));
//! assert_eq!(table.x().last(), Some(&1.0));
//! ```
//!
//! References
//! * Numerical Recipes, 3rd edition, sections 5.1 and 5.4

pub mod chebyshev;
pub mod legendre;
pub mod polynomial;

pub use chebyshev::ChebyshevSeries;
pub use legendre::LegendreSeries;
pub use polynomial::PolynomialSeries;

use num_traits::Float;

use crate::domain::Domain;
use crate::error::{DomainError, Error, ValidationError};
use crate::function::Function1D;
use crate::linearisation::{grid, Convergence};
use crate::table::InterpolationTable;
use crate::utils::cast;

/// Evaluate the power series `c_0 + c_1 x + c_2 x^2 + ...` with the Horner
/// scheme. Coefficients run from lowest to highest order.
///
/// ```rust
/// use tabulated::series::horner;
///
/// assert_eq!(horner(&[1.0, 2.0, 3.0], 2.0), 17.0);
/// ```
#[inline]
pub fn horner<T: Float>(coefficients: &[T], x: T) -> T {
    coefficients
        .iter()
        .rev()
        .fold(T::zero(), |y, &c| y * x + c)
}

/// Evaluate `c_0 F_0(x) + c_1 F_1(x) + ...` with the Clenshaw recursion for
/// functions obeying `F_(k+1)(x) = a(k, x) F_k(x) + b(k, x) F_(k-1)(x)`.
/// Coefficients run from lowest to highest order.
///
/// ```rust
/// use tabulated::series::clenshaw;
///
/// // Chebyshev: T_(k+1) = 2 x T_k - T_(k-1), so 2 T_0 + T_2 at x = 0.5 is 1.5
/// let y = clenshaw(&[2.0, 0.0, 1.0], |_, x| 2.0 * x, |_, _| -1.0, 1.0, 0.5, 0.5);
/// assert_eq!(y, 1.5);
/// ```
#[inline]
pub fn clenshaw<T, A, B>(coefficients: &[T], a: A, b: B, f0: T, f1: T, x: T) -> T
where
    T: Float,
    A: Fn(usize, T) -> T,
    B: Fn(usize, T) -> T,
{
    let Some((&c0, rest)) = coefficients.split_first() else {
        return T::zero();
    };
    let mut y1 = T::zero();
    let mut y2 = T::zero();
    for (i, &c) in rest.iter().enumerate().rev() {
        let k = i + 1;
        let y = a(k, x) * y1 + b(k + 1, x) * y2 + c;
        y2 = y1;
        y1 = y;
    }
    b(1, x) * f0 * y2 + f1 * y1 + c0 * f0
}

pub(crate) fn verify_coefficients<T>(coefficients: &[T]) -> Result<(), ValidationError> {
    if coefficients.is_empty() {
        Err(ValidationError::NoCoefficients)
    } else {
        Ok(())
    }
}

/// The domain limits of a series, failing on an open domain
pub(crate) fn limits<T: Float>(
    domain: Domain<T>,
    operation: &'static str,
) -> Result<(T, T), DomainError> {
    domain
        .limits()
        .ok_or(DomainError::OpenDomain { operation })
}

/// `DomainError::OutsideDomain` unless `x` lies in `domain`
#[inline]
pub(crate) fn check_inside<T: Float>(domain: &Domain<T>, x: T) -> Result<(), DomainError> {
    if domain.is_inside(x) {
        Ok(())
    } else {
        Err(DomainError::OutsideDomain {
            x: x.to_f64().unwrap_or(f64::NAN),
        })
    }
}

/// The Chebyshev-Lobatto points of order `n` on `[lower, upper]`, in
/// ascending order. A polynomial of order `n` is fixed by its values there.
fn lobatto<T: Float>(lower: T, upper: T, n: usize) -> Vec<T> {
    let half: T = cast(0.5);
    let middle = half * (lower + upper);
    let width = half * (upper - lower);
    let pi: T = cast(core::f64::consts::PI);
    (0..=n)
        .rev()
        .map(|k| match k {
            0 => upper,
            k if k == n => lower,
            k => middle + width * (pi * cast::<T, _>(k) / cast::<T, _>(n)).cos(),
        })
        .collect()
}

/// Linearise a series of the given order on `[lower, upper]`. Straight lines
/// are tabulated exactly on the limits; higher orders are bisected starting
/// from the Chebyshev-Lobatto points of their order and the `candidates`.
pub(crate) fn linearise_series<T, F, C>(
    series: &F,
    order: usize,
    lower: T,
    upper: T,
    candidates: &[T],
    convergence: &C,
) -> Result<InterpolationTable<T>, Error>
where
    T: Float,
    F: Function1D<T> + ?Sized,
    C: Convergence<T> + ?Sized,
{
    if order < 2 {
        let y = vec![series.evaluate(lower)?, series.evaluate(upper)?];
        return Ok(InterpolationTable::new(vec![lower, upper], y)?);
    }

    let mut points = lobatto(lower, upper, order);
    points.extend_from_slice(candidates);
    InterpolationTable::from_function(&grid(lower, upper, &points), series, convergence)
}
