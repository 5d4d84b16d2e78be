//! Chebyshev series `c_0 T_0(x) + c_1 T_1(x) + ... + c_n T_n(x)` on `[-1, 1]`.
//!
//! Evaluation uses the Clenshaw recursion with the three-term relation
//! `T_(k+1)(x) = 2 x T_k(x) - T_(k-1)(x)`.
use num_traits::Float;

use super::{check_inside, clenshaw, linearise_series, verify_coefficients};
use crate::domain::Domain;
use crate::error::{DomainError, Error, ValidationError};
use crate::function::Function1D;
use crate::linearisation::Convergence;
use crate::table::InterpolationTable;
use crate::utils::cast;

/// Sum of Chebyshev polynomials, coefficients from lowest to highest order
#[inline]
fn chebyshev<T: Float>(coefficients: &[T], x: T) -> T {
    let two: T = cast(2);
    clenshaw(coefficients, |_, x| two * x, |_, _| -T::one(), T::one(), x, x)
}

/// A Chebyshev series of order n, defined on `[-1, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChebyshevSeries<T> {
    coefficients: Vec<T>,
}

impl<T: Float> ChebyshevSeries<T> {
    /// # Errors
    /// * If there are no coefficients
    pub fn new(coefficients: Vec<T>) -> Result<Self, ValidationError> {
        verify_coefficients(&coefficients)?;
        Ok(Self { coefficients })
    }

    /// The Chebyshev coefficients, from lowest to highest order
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// The series order
    pub fn order(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// The derivative, from the backward recurrence
    /// `d_(k-1) = d_(k+1) + 2 k c_k` with the first term halved.
    pub fn derivative(&self) -> Self {
        let order = self.order();
        if order == 0 {
            return Self {
                coefficients: vec![T::zero()],
            };
        }

        let mut coefficients = vec![T::zero(); order];
        for k in (0..order).rev() {
            let next = coefficients.get(k + 2).copied().unwrap_or_else(T::zero);
            coefficients[k] = next + cast::<T, _>(2 * (k + 1)) * self.coefficients[k + 1];
        }
        coefficients[0] = coefficients[0] / cast(2);
        Self { coefficients }
    }

    /// The primitive that vanishes at `left`, from
    /// `2 int T_n = T_(n+1) / (n+1) - T_(n-1) / (n-1)`
    pub fn primitive(&self, left: T) -> Self {
        let order = self.order();
        let half: T = cast(0.5);
        let mut coefficients = vec![T::zero(); order + 2];
        coefficients[1] = self.coefficients[0];
        if order > 0 {
            coefficients[2] = half * half * self.coefficients[1];
        }
        for i in 2..=order {
            let c = half * self.coefficients[i];
            coefficients[i + 1] = coefficients[i + 1] + c / cast(i + 1);
            coefficients[i - 1] = coefficients[i - 1] - c / cast(i - 1);
        }
        coefficients[0] = coefficients[0] - chebyshev(&coefficients, left);
        Self { coefficients }
    }

    /// The integral over `[-1, 1]`, where `T_n` integrates to
    /// `2 / (1 - n^2)` for even n and to zero for odd n.
    pub fn integral(&self) -> T {
        let two: T = cast(2);
        self.coefficients
            .iter()
            .enumerate()
            .step_by(2)
            .fold(T::zero(), |sum, (n, &c)| {
                sum + two * c / (T::one() - cast::<T, _>(n * n))
            })
    }

    /// The integral of x times the series over `[-1, 1]`, using
    /// `x T_m = (T_(m+1) + T_(m-1)) / 2`.
    pub fn mean(&self) -> T {
        let one = T::one();
        let moment = |m: usize| {
            let (a, b) = (cast::<T, _>(m + 1), cast::<T, _>(m - 1));
            one / (one - a * a) + one / (one - b * b)
        };
        match self.coefficients.get(1) {
            None => T::zero(),
            Some(&c1) => self
                .coefficients
                .iter()
                .enumerate()
                .skip(3)
                .step_by(2)
                .fold(cast::<T, _>(2) * c1 / cast(3), |sum, (m, &c)| {
                    sum + c * moment(m)
                }),
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

    /// As [`ChebyshevSeries::linearise`], with extra points added to the
    /// initial grid.
    ///
    /// # Errors
    /// * See [`ChebyshevSeries::linearise`]
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

impl<T: Float> Function1D<T> for ChebyshevSeries<T> {
    #[inline]
    fn evaluate(&self, x: T) -> Result<T, DomainError> {
        check_inside(&self.domain(), x)?;
        Ok(chebyshev(&self.coefficients, x))
    }

    fn domain(&self) -> Domain<T> {
        Domain::interval(-T::one(), T::one())
    }
}
