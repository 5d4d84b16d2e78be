//! Tabulated one-dimensional functions y = f(x).
//!
//! A table is a sorted grid of x values with their y values, split into
//! regions that each interpolate with one law (histogram, lin-lin, lin-log,
//! log-lin or log-log). Tables evaluate pointwise, integrate in closed form,
//! linearise adaptively into an equivalent lin-lin table, and combine
//! arithmetically over the union of their grids. Polynomial, Legendre and
//! Chebyshev series linearise into the same tables.
//!
//! ```rust
//! use tabulated::linearisation::ToleranceConvergence;
//! use tabulated::{Function1D, InterpolationTable, InterpolationType};
//!
//! let a = InterpolationTable::with_interpolant(
//!     vec![1.0f64, 2.0, 4.0],
//!     vec![1.0, 4.0, 16.0],
//!     InterpolationType::LogLog,
//! )
//! .unwrap();
//! assert!((a.evaluate(3.0).unwrap() - 9.0).abs() < 1e-12);
//!
//! // Arithmetic needs lin-lin tables
//! let a = a.linearise(&ToleranceConvergence::new(1e-4, 1e-10)).unwrap();
//! let b = InterpolationTable::new(vec![2.0, 5.0], vec![1.0, 1.0]).unwrap();
//! let sum = (&a + &b).unwrap();
//!
//! assert_eq!(sum.evaluate(1.0).unwrap(), 1.0);
//! assert_eq!(sum.evaluate(5.0).unwrap(), 1.0);
//! assert!((sum.evaluate(3.0).unwrap() - 10.0).abs() < 1e-2);
//! ```
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod domain;
pub mod error;
pub mod function;
pub mod integration;
pub mod interpolation;
pub mod linearisation;
pub mod series;
pub mod table;
pub mod unionisation;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::Domain;
pub use error::{DomainError, Error, ValidationError};
pub use function::Function1D;
pub use integration::AnalyticalIntegrator;
pub use interpolation::{
    Histogram, InterpolationType, Interpolator, LinearLinear, LinearLog, LogLinear, LogLog,
};
pub use series::{ChebyshevSeries, LegendreSeries, PolynomialSeries};
pub use table::InterpolationTable;
