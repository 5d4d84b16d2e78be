//! Power series `c_0 + c_1 x + ... + c_n x^n`.
use num_traits::Float;

use super::{check_inside, horner, limits, linearise_series, verify_coefficients};
use crate::domain::Domain;
use crate::error::{DomainError, Error, ValidationError};
use crate::function::Function1D;
use crate::linearisation::Convergence;
use crate::table::InterpolationTable;
use crate::utils::cast;

/// A polynomial of order n, defined on the open domain or on an interval.
///
/// Integration and linearisation need an interval domain.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialSeries<T> {
    domain: Domain<T>,
    coefficients: Vec<T>,
}

impl<T: Float> PolynomialSeries<T> {
    /// A polynomial on the open domain, with coefficients from lowest to
    /// highest order.
    ///
    /// # Errors
    /// * If there are no coefficients
    pub fn new(coefficients: Vec<T>) -> Result<Self, ValidationError> {
        Self::with_domain(Domain::Open, coefficients)
    }

    /// A polynomial on the interval `[lower, upper]`.
    ///
    /// # Errors
    /// * If there are no coefficients
    /// * If the limits are equal or not finite
    pub fn with_limits(lower: T, upper: T, coefficients: Vec<T>) -> Result<Self, ValidationError> {
        Self::with_domain(Domain::interval(lower, upper), coefficients)
    }

    /// A polynomial on any domain.
    ///
    /// # Errors
    /// * If there are no coefficients
    /// * If the domain is an interval whose limits are equal or not finite
    pub fn with_domain(domain: Domain<T>, coefficients: Vec<T>) -> Result<Self, ValidationError> {
        verify_coefficients(&coefficients)?;
        match domain.limits() {
            Some((lower, upper)) if !(lower.is_finite() && upper.is_finite() && lower < upper) => {
                Err(ValidationError::EmptyDomain)
            }
            _ => Ok(Self {
                domain,
                coefficients,
            }),
        }
    }

    /// The coefficients, from lowest to highest order
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// The polynomial order
    pub fn order(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// The derivative, on the same domain
    pub fn derivative(&self) -> Self {
        let coefficients = if self.order() == 0 {
            vec![T::zero()]
        } else {
            self.coefficients
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, &c)| c * cast(i))
                .collect()
        };
        Self {
            domain: self.domain,
            coefficients,
        }
    }

    /// The primitive that vanishes at `left`, on the same domain
    pub fn primitive(&self, left: T) -> Self {
        let mut coefficients = Vec::with_capacity(self.coefficients.len() + 1);
        coefficients.push(T::zero());
        coefficients.extend(
            self.coefficients
                .iter()
                .enumerate()
                .map(|(i, &c)| c / cast(i + 1)),
        );
        coefficients[0] = -horner(&coefficients, left);
        Self {
            domain: self.domain,
            coefficients,
        }
    }

    /// The integral over the domain.
    ///
    /// # Errors
    /// * If the domain is open
    pub fn integral(&self) -> Result<T, DomainError> {
        let (lower, upper) = limits(self.domain, "integral")?;
        Ok(horner(&self.primitive(lower).coefficients, upper))
    }

    /// The integral of x times the polynomial over the domain.
    ///
    /// # Errors
    /// * If the domain is open
    pub fn mean(&self) -> Result<T, DomainError> {
        let mut coefficients = Vec::with_capacity(self.coefficients.len() + 1);
        coefficients.push(T::zero());
        coefficients.extend_from_slice(&self.coefficients);
        let (lower, upper) = limits(self.domain, "mean")?;
        let shifted = Self {
            domain: self.domain,
            coefficients,
        };
        Ok(horner(&shifted.primitive(lower).coefficients, upper))
    }

    /// A lin-lin table reproducing the polynomial on its domain within the
    /// convergence criterion.
    ///
    /// # Errors
    /// * If the domain is open
    pub fn linearise<C>(&self, convergence: &C) -> Result<InterpolationTable<T>, Error>
    where
        C: Convergence<T> + ?Sized,
    {
        self.linearise_with(&[], convergence)
    }

    /// As [`PolynomialSeries::linearise`], with extra points such as the
    /// extrema and inflection points added to the initial grid.
    ///
    /// # Errors
    /// * If the domain is open
    pub fn linearise_with<C>(
        &self,
        candidates: &[T],
        convergence: &C,
    ) -> Result<InterpolationTable<T>, Error>
    where
        C: Convergence<T> + ?Sized,
    {
        let (lower, upper) = limits(self.domain, "linearisation")?;
        linearise_series(self, self.order(), lower, upper, candidates, convergence)
    }
}

impl<T: Float> Function1D<T> for PolynomialSeries<T> {
    #[inline]
    fn evaluate(&self, x: T) -> Result<T, DomainError> {
        check_inside(&self.domain, x)?;
        Ok(horner(&self.coefficients, x))
    }

    fn domain(&self) -> Domain<T> {
        self.domain
    }
}
