//! Convergence criteria deciding whether a panel is linear enough.

use num_traits::Float;

use crate::utils::hundred_epsilon;

/// Decide whether a trial value (interpolated lin-lin on the panel) is an
/// acceptable approximation of the reference value (the true function value
/// at the same location).
///
/// Any closure with the same signature is a convergence criterion.
pub trait Convergence<T> {
    fn converged(
        &self,
        trial: T,
        reference: T,
        x_left: T,
        x_right: T,
        y_left: T,
        y_right: T,
    ) -> bool;
}

impl<T, F> Convergence<T> for F
where
    F: Fn(T, T, T, T, T, T) -> bool,
{
    #[inline]
    fn converged(
        &self,
        trial: T,
        reference: T,
        x_left: T,
        x_right: T,
        y_left: T,
        y_right: T,
    ) -> bool {
        self(trial, reference, x_left, x_right, y_left, y_right)
    }
}

/// A relative tolerance with an absolute threshold.
///
/// A trial value and reference value are converged when they are equal, or
/// when `|trial - reference| < max(tolerance * |reference|, threshold)`.
/// The threshold takes over for references close to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceConvergence<T> {
    tolerance: T,
    threshold: T,
}

impl<T: Float> ToleranceConvergence<T> {
    pub fn new(tolerance: T, threshold: T) -> Self {
        Self {
            tolerance,
            threshold,
        }
    }

    /// A relative tolerance with the default absolute threshold
    pub fn with_tolerance(tolerance: T) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// The relative tolerance
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// The lowest absolute difference that is always accepted
    pub fn threshold(&self) -> T {
        self.threshold
    }
}

impl<T: Float> Default for ToleranceConvergence<T> {
    /// Both tolerance and threshold at 100 machine epsilon
    fn default() -> Self {
        Self::new(hundred_epsilon(), hundred_epsilon())
    }
}

impl<T: Float> Convergence<T> for ToleranceConvergence<T> {
    #[inline]
    fn converged(&self, trial: T, reference: T, _: T, _: T, _: T, _: T) -> bool {
        if trial == reference {
            return true;
        }
        let diff = (trial - reference).abs();
        diff < (self.tolerance * reference.abs()).max(self.threshold)
    }
}
