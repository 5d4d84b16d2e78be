//! Pointwise interpolation laws on a single panel.
//!
//! A panel is the interval between two adjacent grid points together with
//! the values at both ends. Each law is a zero-sized marker type implementing
//! [`Interpolator`]; [`InterpolationType`] names the laws at runtime and
//! dispatches to the markers.
//!
//! | Law                 | Relationship               |
//! |---------------------|----------------------------|
//! | [`Histogram`]       | y is constant in x         |
//! | [`LinearLinear`]    | y is linear in x           |
//! | [`LinearLog`]       | y is linear in ln(x)       |
//! | [`LogLinear`]       | ln(y) is linear in x       |
//! | [`LogLog`]          | ln(y) is linear in ln(x)   |
//!
//! ```rust
//! use tabulated::interpolation::{InterpolationType, Interpolator, LinearLinear};
//!
//! let y = LinearLinear.interpolate(1.5, 1.0, 2.0, 4.0, 3.0).unwrap();
//! assert_eq!(y, 3.5);
//!
//! let y = InterpolationType::Histogram.interpolate(1.5, 1.0, 2.0, 4.0, 3.0).unwrap();
//! assert_eq!(y, 4.0);
//! ```

pub mod hold;
pub mod linear;
pub mod log;

pub use hold::Histogram;
pub use linear::{LinearLinear, LinearLog};
pub use log::{LogLinear, LogLog};

use num_traits::Float;

use crate::error::DomainError;
use crate::function::Function1D;

/// The interpolation law of a region of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationType {
    /// Constant or histogram interpolation
    Histogram,
    /// y is linear in x
    LinearLinear,
    /// y is linear in ln(x)
    LinearLog,
    /// ln(y) is linear in x
    LogLinear,
    /// ln(y) is linear in ln(x)
    LogLog,
}

impl InterpolationType {
    /// Evaluate this law on the panel `[x_left, x_right]`.
    ///
    /// # Errors
    /// * If the law takes the logarithm of a value that is not strictly positive
    #[inline]
    pub fn interpolate<T: Float>(
        self,
        x: T,
        x_left: T,
        x_right: T,
        y_left: T,
        y_right: T,
    ) -> Result<T, DomainError> {
        match self {
            InterpolationType::Histogram => {
                Histogram.interpolate(x, x_left, x_right, y_left, y_right)
            }
            InterpolationType::LinearLinear => {
                LinearLinear.interpolate(x, x_left, x_right, y_left, y_right)
            }
            InterpolationType::LinearLog => {
                LinearLog.interpolate(x, x_left, x_right, y_left, y_right)
            }
            InterpolationType::LogLinear => {
                LogLinear.interpolate(x, x_left, x_right, y_left, y_right)
            }
            InterpolationType::LogLog => LogLog.interpolate(x, x_left, x_right, y_left, y_right),
        }
    }

    /// Evaluate this law on a panel whose end points are functions of a
    /// second variable, see [`Interpolator::interpolate_nested`].
    #[inline]
    pub fn interpolate_nested<T, F, G>(
        self,
        x: T,
        x_left: T,
        x_right: T,
        left: &F,
        right: &G,
        y: T,
    ) -> Result<T, DomainError>
    where
        T: Float,
        F: Function1D<T> + ?Sized,
        G: Function1D<T> + ?Sized,
    {
        let (y_left, y_right) = (left.evaluate(y)?, right.evaluate(y)?);
        self.interpolate(x, x_left, x_right, y_left, y_right)
    }

    /// Whether the law is lin-lin
    #[inline]
    pub fn is_linear(self) -> bool {
        self == InterpolationType::LinearLinear
    }

    /// Whether the law interpolates on a logarithmic x axis
    #[inline]
    pub fn is_logarithmic_x(self) -> bool {
        matches!(self, InterpolationType::LinearLog | InterpolationType::LogLog)
    }
}

/// A pointwise interpolation law.
pub trait Interpolator<T: Float> {
    /// The runtime name of this law
    const TYPE: InterpolationType;

    /// Evaluate the law at `x` on the panel `[x_left, x_right]` with end point
    /// values `y_left` and `y_right`. The panel must have nonzero width.
    ///
    /// It is highly recommended to inline implementations of this function.
    ///
    /// # Errors
    /// * If the law takes the logarithm of a value that is not strictly positive
    fn interpolate(&self, x: T, x_left: T, x_right: T, y_left: T, y_right: T)
        -> Result<T, DomainError>;

    /// Evaluate the law on a panel whose end point values are themselves
    /// functions of a second variable `y`, i.e. `z = f(x, y)`. Both end point
    /// functions are evaluated at `y` first and the law is then applied to the
    /// two resulting values; no unit-base normalisation is performed.
    #[inline]
    fn interpolate_nested<F, G>(
        &self,
        x: T,
        x_left: T,
        x_right: T,
        left: &F,
        right: &G,
        y: T,
    ) -> Result<T, DomainError>
    where
        F: Function1D<T> + ?Sized,
        G: Function1D<T> + ?Sized,
    {
        let (y_left, y_right) = (left.evaluate(y)?, right.evaluate(y)?);
        self.interpolate(x, x_left, x_right, y_left, y_right)
    }
}

/// Two adjacent grid points and their values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel<T> {
    pub x_left: T,
    pub x_right: T,
    pub y_left: T,
    pub y_right: T,
}

impl<T: Float> Panel<T> {
    pub fn new(x_left: T, x_right: T, y_left: T, y_right: T) -> Self {
        Self {
            x_left,
            x_right,
            y_left,
            y_right,
        }
    }

    /// Whether the panel has zero width, i.e. it is a jump
    #[inline]
    pub fn is_jump(&self) -> bool {
        self.x_left == self.x_right
    }

    /// Restrict the panel to `[lower, upper]` (which must lie inside it),
    /// evaluating the new end points with `law`. End points that are not
    /// moved keep their stored value exactly.
    ///
    /// # Errors
    /// * If the law cannot be evaluated on this panel
    pub fn clip(&self, lower: T, upper: T, law: InterpolationType) -> Result<Self, DomainError> {
        let at = |x: T| -> Result<T, DomainError> {
            if x == self.x_left {
                Ok(self.y_left)
            } else if x == self.x_right {
                Ok(self.y_right)
            } else {
                law.interpolate(x, self.x_left, self.x_right, self.y_left, self.y_right)
            }
        };
        Ok(Self::new(lower, upper, at(lower)?, at(upper)?))
    }
}

/// Both y values must be strictly positive to take their logarithm
#[inline]
pub(crate) fn check_positive_y<T: Float>(y_left: T, y_right: T) -> Result<(), DomainError> {
    if y_left > T::zero() && y_right > T::zero() {
        Ok(())
    } else {
        Err(DomainError::NonPositiveValues {
            y_left: y_left.to_f64().unwrap_or(f64::NAN),
            y_right: y_right.to_f64().unwrap_or(f64::NAN),
        })
    }
}

/// Both x values must share a strict sign so that their ratio has a logarithm
#[inline]
pub(crate) fn check_log_x<T: Float>(x_left: T, x_right: T) -> Result<(), DomainError> {
    let zero = T::zero();
    if (x_left > zero && x_right > zero) || (x_left < zero && x_right < zero) {
        Ok(())
    } else {
        Err(DomainError::NonPositiveRatio {
            x_left: x_left.to_f64().unwrap_or(f64::NAN),
            x_right: x_right.to_f64().unwrap_or(f64::NAN),
        })
    }
}
