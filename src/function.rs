//! The evaluable-function contract shared by tables and plain closures.

use num_traits::Float;

use crate::domain::Domain;
use crate::error::DomainError;

/// A one-dimensional function y = f(x).
///
/// Any closure `Fn(T) -> T` is a function on the open domain, which is how
/// arbitrary functions are handed to the lineariser.
pub trait Function1D<T: Float> {
    /// Evaluate the function at a single location.
    ///
    /// It is highly recommended to inline implementations of this function.
    ///
    /// # Errors
    /// * If the function is not defined for the data at this location
    fn evaluate(&self, x: T) -> Result<T, DomainError>;

    /// The domain of the function
    fn domain(&self) -> Domain<T> {
        Domain::Open
    }

    /// Evaluate the function at a set of locations.
    ///
    /// # Errors
    /// * If the lengths of `locs` and `out` differ
    /// * If any single evaluation fails
    #[inline]
    fn evaluate_into(&self, locs: &[T], out: &mut [T]) -> Result<(), DomainError> {
        if locs.len() != out.len() {
            return Err(DomainError::OutputLength {
                locations: locs.len(),
                output: out.len(),
            });
        }

        for i in 0..locs.len() {
            out[i] = self.evaluate(locs[i])?;
        }

        Ok(())
    }

    /// Evaluate the function at a set of locations, allocating
    /// for the output values for convenience.
    #[inline]
    fn evaluate_alloc(&self, locs: &[T]) -> Result<Vec<T>, DomainError> {
        let mut out = vec![T::zero(); locs.len()];
        self.evaluate_into(locs, &mut out)?;
        Ok(out)
    }
}

impl<T, F> Function1D<T> for F
where
    T: Float,
    F: Fn(T) -> T,
{
    #[inline]
    fn evaluate(&self, x: T) -> Result<T, DomainError> {
        Ok(self(x))
    }
}
