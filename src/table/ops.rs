//! Arithmetic on tables, with scalars and with other tables.
//!
//! Adding a constant or another table is only defined for lin-lin tables,
//! since no other law is preserved by addition. Scaling is defined for every
//! law. Two tables on different grids are combined on the union of their
//! grids, see [`crate::unionisation`].

use core::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Float;

use super::InterpolationTable;
use crate::error::DomainError;
use crate::unionisation::Unioniser;

impl<T: Float> InterpolationTable<T> {
    fn require_linearised(&self, operation: &'static str) -> Result<(), DomainError> {
        if self.linearised {
            Ok(())
        } else {
            Err(DomainError::NotLinearised { operation })
        }
    }

    fn map_y(&self, f: impl Fn(T) -> T) -> Self {
        let mut out = self.clone();
        out.y.iter_mut().for_each(|v| *v = f(*v));
        out
    }

    /// Add a constant to a lin-lin table.
    ///
    /// # Errors
    /// * If the table is not linearised
    pub fn add_scalar(&self, s: T) -> Result<Self, DomainError> {
        self.require_linearised("addition")?;
        Ok(self.map_y(|v| v + s))
    }

    /// Subtract a constant from a lin-lin table.
    ///
    /// # Errors
    /// * If the table is not linearised
    pub fn subtract_scalar(&self, s: T) -> Result<Self, DomainError> {
        self.require_linearised("subtraction")?;
        Ok(self.map_y(|v| v - s))
    }

    /// Multiply every value by a constant
    pub fn scale(&self, s: T) -> Self {
        self.map_y(|v| v * s)
    }

    /// Divide every value by a constant.
    ///
    /// # Errors
    /// * If the divisor is zero
    pub fn divide(&self, s: T) -> Result<Self, DomainError> {
        if s == T::zero() {
            return Err(DomainError::DivisionByZero);
        }
        Ok(self.map_y(|v| v / s))
    }

    /// Pointwise sum of two lin-lin tables.
    ///
    /// # Errors
    /// * If either table is not linearised
    pub fn add_table(&self, other: &Self) -> Result<Self, DomainError> {
        self.combine(other, "addition", |a, b| a + b)
    }

    /// Pointwise difference of two lin-lin tables.
    ///
    /// # Errors
    /// * If either table is not linearised
    pub fn subtract_table(&self, other: &Self) -> Result<Self, DomainError> {
        self.combine(other, "subtraction", |a, b| a - b)
    }

    /// Combine two lin-lin tables on the union of their grids. A jump whose
    /// halves end up with the same value is reduced to a single point.
    fn combine<F>(&self, other: &Self, operation: &'static str, op: F) -> Result<Self, DomainError>
    where
        F: Fn(T, T) -> T,
    {
        self.require_linearised(operation)?;
        other.require_linearised(operation)?;

        if self.x == other.x {
            let mut out = self.clone();
            out.y = self
                .y
                .iter()
                .zip(&other.y)
                .map(|(&a, &b)| op(a, b))
                .collect();
            return Ok(out);
        }

        let mut unioniser = Unioniser::new();
        unioniser.add_grid(&self.x);
        unioniser.add_grid(&other.x);
        unioniser.unionise();
        let left = unioniser.evaluate(&self.x, &self.y)?;
        let right = unioniser.evaluate(&other.x, &other.y)?;

        let grid = unioniser.grid();
        let values: Vec<T> = left.iter().zip(&right).map(|(&a, &b)| op(a, b)).collect();
        let mut x = Vec::with_capacity(grid.len());
        let mut y = Vec::with_capacity(grid.len());
        for i in 0..grid.len() {
            if i + 1 < grid.len() && grid[i] == grid[i + 1] && values[i] == values[i + 1] {
                continue;
            }
            x.push(grid[i]);
            y.push(values[i]);
        }

        Ok(Self::linear(x, y))
    }
}

impl<T: Float> Add for &InterpolationTable<T> {
    type Output = Result<InterpolationTable<T>, DomainError>;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_table(rhs)
    }
}

impl<T: Float> Sub for &InterpolationTable<T> {
    type Output = Result<InterpolationTable<T>, DomainError>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract_table(rhs)
    }
}

impl<T: Float> Add<T> for &InterpolationTable<T> {
    type Output = Result<InterpolationTable<T>, DomainError>;

    fn add(self, rhs: T) -> Self::Output {
        self.add_scalar(rhs)
    }
}

impl<T: Float> Sub<T> for &InterpolationTable<T> {
    type Output = Result<InterpolationTable<T>, DomainError>;

    fn sub(self, rhs: T) -> Self::Output {
        self.subtract_scalar(rhs)
    }
}

impl<T: Float> Mul<T> for &InterpolationTable<T> {
    type Output = InterpolationTable<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Float> Mul<T> for InterpolationTable<T> {
    type Output = InterpolationTable<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Float> Div<T> for &InterpolationTable<T> {
    type Output = Result<InterpolationTable<T>, DomainError>;

    fn div(self, rhs: T) -> Self::Output {
        self.divide(rhs)
    }
}

impl<T: Float> Neg for &InterpolationTable<T> {
    type Output = InterpolationTable<T>;

    fn neg(self) -> Self::Output {
        self.scale(-T::one())
    }
}

impl<T: Float> Neg for InterpolationTable<T> {
    type Output = InterpolationTable<T>;

    fn neg(self) -> Self::Output {
        self.scale(-T::one())
    }
}

/// Scalars on the left hand side, for each concrete float type
macro_rules! scalar_lhs {
    ($($t:ty),*) => {$(
        impl Add<&InterpolationTable<$t>> for $t {
            type Output = Result<InterpolationTable<$t>, DomainError>;

            fn add(self, rhs: &InterpolationTable<$t>) -> Self::Output {
                rhs.add_scalar(self)
            }
        }

        impl Sub<&InterpolationTable<$t>> for $t {
            type Output = Result<InterpolationTable<$t>, DomainError>;

            fn sub(self, rhs: &InterpolationTable<$t>) -> Self::Output {
                rhs.require_linearised("subtraction")?;
                Ok(rhs.map_y(|v| self - v))
            }
        }

        impl Mul<&InterpolationTable<$t>> for $t {
            type Output = InterpolationTable<$t>;

            fn mul(self, rhs: &InterpolationTable<$t>) -> Self::Output {
                rhs.scale(self)
            }
        }
    )*};
}

scalar_lhs!(f32, f64);
