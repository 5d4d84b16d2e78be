//! Adaptive linearisation: approximating a function by lin-lin panels to a
//! requested accuracy.
//!
//! The [`Lineariser`] bisects the panels of an initial grid, with a
//! pluggable [`Split`] strategy picking the bisection point and a pluggable
//! [`Convergence`] criterion accepting panels. [`grid`] assembles an initial
//! grid from the domain limits and any externally known points of interest,
//! such as the roots of the derivatives of the function.

pub mod convergence;
pub mod lineariser;
pub mod split;

pub use convergence::{Convergence, ToleranceConvergence};
pub use lineariser::Lineariser;
pub use split::{LogarithmicMidpointSplit, MidpointSplit, Split};

use core::cmp::Ordering;

use itertools::Itertools;
use num_traits::Float;

use crate::domain::Domain;

/// An initial linearisation grid on `[lower, upper]`: both limits plus every
/// candidate strictly inside the domain, sorted and without duplicates.
///
/// ```rust
/// use tabulated::linearisation::grid;
///
/// let g = grid(0.0, 10.0, &[5.0, -1.0, 2.0, 5.0, 10.0, f64::NAN]);
/// assert_eq!(g, vec![0.0, 2.0, 5.0, 10.0]);
/// ```
pub fn grid<T: Float>(lower: T, upper: T, candidates: &[T]) -> Vec<T> {
    let domain = Domain::interval(lower, upper);
    candidates
        .iter()
        .copied()
        .filter(|&x| domain.is_contained(x))
        .chain([lower, upper])
        .sorted_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .dedup()
        .collect()
}
