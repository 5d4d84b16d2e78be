//! Legendre series `c_0 P_0(x) + c_1 P_1(x) + ... + c_n P_n(x)` on `[-1, 1]`.
//!
//! Evaluation uses the Clenshaw recursion with the three-term relation
//! `P_(k+1)(x) = (2k+1)/(k+1) x P_k(x) - k/(k+1) P_(k-1)(x)`.
use num_traits::Float;

use super::{check_inside, clenshaw, linearise_series, verify_coefficients};
use crate::domain::Domain;
use crate::error::{DomainError, Error, ValidationError};
use crate::function::Function1D;
use crate::linearisation::Convergence;
use crate::table::InterpolationTable;
use crate::utils::cast;

/// Sum of Legendre polynomials, coefficients from lowest to highest order
#[inline]
fn legendre<T: Float>(coefficients: &[T], x: T) -> T {
    let a = |k: usize, x: T| cast::<T, _>(2 * k + 1) / cast(k + 1) * x;
    let b = |k: usize, _: T| -cast::<T, _>(k) / cast(k + 1);
    clenshaw(coefficients, a, b, T::one(), x, x)
}

/// A Legendre series of order n, defined on `[-1, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendreSeries<T> {
    coefficients: Vec<T>,
}

impl<T: Float> LegendreSeries<T> {
    /// # Errors
    /// * If there are no coefficients
    pub fn new(coefficients: Vec<T>) -> Result<Self, ValidationError> {
        verify_coefficients(&coefficients)?;
        Ok(Self { coefficients })
    }

    /// The Legendre coefficients, from lowest to highest order
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// The series order
    pub fn order(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// The derivative, from `P'_(n+1) = (2n+1) P_n + (2n-3) P_(n-2) + ...`
    pub fn derivative(&self) -> Self {
        let order = self.order();
        if order == 0 {
            return Self {
                coefficients: vec![T::zero()],
            };
        }

        let mut coefficients = vec![T::zero(); order];
        for i in 0..order {
            let c = self.coefficients[i + 1];
            for j in (0..=i).rev().step_by(2) {
                coefficients[j] = coefficients[j] + cast::<T, _>(2 * j + 1) * c;
            }
        }
        Self { coefficients }
    }

    /// The primitive that vanishes at `left`, from
    /// `(2n+1) P_n = P'_(n+1) - P'_(n-1)`
    pub fn primitive(&self, left: T) -> Self {
        let order = self.order();
        let mut coefficients = vec![T::zero(); order + 2];
        coefficients[1] = self.coefficients[0];
        for i in 1..=order {
            let c = self.coefficients[i] / cast(2 * i + 1);
            coefficients[i + 1] = coefficients[i + 1] + c;
            coefficients[i - 1] = coefficients[i - 1] - c;
        }
        coefficients[0] = coefficients[0] - legendre(&coefficients, left);
        Self { coefficients }
    }

    /// The integral over `[-1, 1]`; only `P_0` contributes.
    pub fn integral(&self) -> T {
        cast::<T, _>(2) * self.coefficients[0]
    }

    /// The integral of x times the series over `[-1, 1]`; since `x = P_1`,
    /// only `P_1` contributes.
    pub fn mean(&self) -> T {
        match self.coefficients.get(1) {
            Some(&c) => cast::<T, _>(2) * c / cast(3),
            None => T::zero(),
        }
    }

    /// A lin-lin table reproducing the series on `[-1, 1]` within the
    /// convergence criterion.
    ///
    /// # Errors
    /// * If the series cannot be evaluated, which only a non-finite
    ///   coefficient can cause
    pub fn linearise<C>(&self, convergence: &C) -> Result<InterpolationTable<T>, Error>
    where
        C: Convergence<T> + ?Sized,
    {
        self.linearise_with(&[], convergence)
    }

    /// As [`LegendreSeries::linearise`], with extra points such as the
    /// extrema and inflection points added to the initial grid.
    ///
    /// # Errors
    /// * See [`LegendreSeries::linearise`]
    pub fn linearise_with<C>(
        &self,
        candidates: &[T],
        convergence: &C,
    ) -> Result<InterpolationTable<T>, Error>
    where
        C: Convergence<T> + ?Sized,
    {
        let one = T::one();
        linearise_series(self, self.order(), -one, one, candidates, convergence)
    }
}

impl<T: Float> Function1D<T> for LegendreSeries<T> {
    #[inline]
    fn evaluate(&self, x: T) -> Result<T, DomainError> {
        check_inside(&self.domain(), x)?;
        Ok(legendre(&self.coefficients, x))
    }

    fn domain(&self) -> Domain<T> {
        Domain::interval(-T::one(), T::one())
    }
}
