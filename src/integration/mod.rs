//! Closed-form integration of a single panel under each interpolation law.
//!
//! For every law both the integral (zeroth moment) and the first raw moment
//! (the integral of x·y) are available. A panel of zero width, i.e. a jump,
//! integrates to zero under every law. The second central moment is
//! available for histogram and lin-lin panels, see [`variance`].
//!
//! ```rust
//! use tabulated::integration::{first_moment, integrate};
//! use tabulated::InterpolationType;
//!
//! let law = InterpolationType::LinearLinear;
//! assert_eq!(integrate(law, 1.0, 2.0, 4.0, 3.0).unwrap(), 3.5);
//! assert_eq!(first_moment(InterpolationType::Histogram, 1.0, 3.0, 2.0, 7.0).unwrap(), 8.0);
//! ```
//!
//! References
//! * The log-log forms follow from y = y_left (x / x_left)^a with
//!   a = ln(y_right / y_left) / ln(x_right / x_left).

pub mod analytical;
pub mod variance;

pub use analytical::AnalyticalIntegrator;
pub use variance::{histogram_variance, linear_linear_variance, variance};

use num_traits::Float;

use crate::error::DomainError;
use crate::interpolation::{
    check_log_x, check_positive_y, Histogram, InterpolationType, Interpolator, LinearLinear,
    LinearLog, LogLinear, LogLog, Panel,
};
use crate::utils::{cast, is_close};

/// Analytic integration of an interpolation law over a panel.
pub trait Integrator<T: Float>: Interpolator<T> {
    /// The integral of y over `[x_left, x_right]`
    ///
    /// # Errors
    /// * If the law cannot be evaluated on this panel, or the closed form is singular
    fn integral(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> Result<T, DomainError>;

    /// The integral of x·y over `[x_left, x_right]`
    ///
    /// # Errors
    /// * If the law cannot be evaluated on this panel, or the closed form is singular
    fn first_moment(
        &self,
        x_left: T,
        x_right: T,
        y_left: T,
        y_right: T,
    ) -> Result<T, DomainError>;
}

/// Integral of y over a panel, dispatching on the law.
#[inline]
pub fn integrate<T: Float>(
    law: InterpolationType,
    x_left: T,
    x_right: T,
    y_left: T,
    y_right: T,
) -> Result<T, DomainError> {
    match law {
        InterpolationType::Histogram => Histogram.integral(x_left, x_right, y_left, y_right),
        InterpolationType::LinearLinear => LinearLinear.integral(x_left, x_right, y_left, y_right),
        InterpolationType::LinearLog => LinearLog.integral(x_left, x_right, y_left, y_right),
        InterpolationType::LogLinear => LogLinear.integral(x_left, x_right, y_left, y_right),
        InterpolationType::LogLog => LogLog.integral(x_left, x_right, y_left, y_right),
    }
}

/// Integral of x·y over a panel, dispatching on the law.
#[inline]
pub fn first_moment<T: Float>(
    law: InterpolationType,
    x_left: T,
    x_right: T,
    y_left: T,
    y_right: T,
) -> Result<T, DomainError> {
    match law {
        InterpolationType::Histogram => Histogram.first_moment(x_left, x_right, y_left, y_right),
        InterpolationType::LinearLinear => {
            LinearLinear.first_moment(x_left, x_right, y_left, y_right)
        }
        InterpolationType::LinearLog => LinearLog.first_moment(x_left, x_right, y_left, y_right),
        InterpolationType::LogLinear => LogLinear.first_moment(x_left, x_right, y_left, y_right),
        InterpolationType::LogLog => LogLog.first_moment(x_left, x_right, y_left, y_right),
    }
}

/// Integral of y over a [`Panel`]
#[inline]
pub fn integrate_panel<T: Float>(law: InterpolationType, p: &Panel<T>) -> Result<T, DomainError> {
    integrate(law, p.x_left, p.x_right, p.y_left, p.y_right)
}

/// Integral of x·y over a [`Panel`]
#[inline]
pub fn first_moment_panel<T: Float>(
    law: InterpolationType,
    p: &Panel<T>,
) -> Result<T, DomainError> {
    first_moment(law, p.x_left, p.x_right, p.y_left, p.y_right)
}

impl<T: Float> Integrator<T> for Histogram {
    #[inline]
    fn integral(&self, x_left: T, x_right: T, y_left: T, _y_right: T) -> Result<T, DomainError> {
        Ok(y_left * (x_right - x_left))
    }

    #[inline]
    fn first_moment(
        &self,
        x_left: T,
        x_right: T,
        y_left: T,
        _y_right: T,
    ) -> Result<T, DomainError> {
        let half: T = cast(0.5);
        Ok(half * y_left * (x_right - x_left) * (x_right + x_left))
    }
}

impl<T: Float> Integrator<T> for LinearLinear {
    #[inline]
    fn integral(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> Result<T, DomainError> {
        if x_left == x_right {
            return Ok(T::zero());
        }
        let half: T = cast(0.5);
        Ok(half * (x_right - x_left) * (y_left + y_right))
    }

    #[inline]
    fn first_moment(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> Result<T, DomainError> {
        if x_left == x_right {
            return Ok(T::zero());
        }
        // y = a x + b, so the primitive of x y is a x^3 / 3 + b x^2 / 2
        let delta = x_right - x_left;
        let a = (y_right - y_left) / delta / cast(3);
        let b = cast::<T, _>(0.5) * (x_right * y_left - x_left * y_right) / delta;
        Ok(x_right * x_right * (a * x_right + b) - x_left * x_left * (a * x_left + b))
    }
}

impl<T: Float> Integrator<T> for LinearLog {
    #[inline]
    fn integral(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> Result<T, DomainError> {
        if x_left == x_right {
            return Ok(T::zero());
        }
        check_log_x(x_left, x_right)?;
        let ratio = x_right / x_left;
        let l = ratio.ln();
        Ok((y_right - y_left) / l * x_left * (ratio * (l - T::one()) + T::one())
            + y_left * (x_right - x_left))
    }

    #[inline]
    fn first_moment(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> Result<T, DomainError> {
        if x_left == x_right {
            return Ok(T::zero());
        }
        check_log_x(x_left, x_right)?;
        // primitive of x ln(x / x_left) is x^2 ln(x / x_left) / 2 - x^2 / 4
        let l = (x_right / x_left).ln();
        let squares = x_right * x_right - x_left * x_left;
        let half: T = cast(0.5);
        let quarter: T = cast(0.25);
        Ok(half * y_left * squares
            + (y_right - y_left) / l * (half * x_right * x_right * l - quarter * squares))
    }
}

impl<T: Float> Integrator<T> for LogLinear {
    #[inline]
    fn integral(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> Result<T, DomainError> {
        if x_left == x_right {
            return Ok(T::zero());
        }
        check_positive_y(y_left, y_right)?;
        if y_left == y_right {
            return Histogram.integral(x_left, x_right, y_left, y_right);
        }
        let ratio = y_right / y_left;
        Ok(y_left * (x_right - x_left) / ratio.ln() * (ratio - T::one()))
    }

    #[inline]
    fn first_moment(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> Result<T, DomainError> {
        if x_left == x_right {
            return Ok(T::zero());
        }
        check_positive_y(y_left, y_right)?;
        if y_left == y_right {
            return Histogram.first_moment(x_left, x_right, y_left, y_right);
        }
        // primitive of x exp(k (x - x_left)) is exp(k (x - x_left)) (k x - 1) / k^2
        let ratio = y_right / y_left;
        let k = ratio.ln() / (x_right - x_left);
        Ok(y_left / k / k * ((k * x_right - T::one()) * ratio - (k * x_left - T::one())))
    }
}

impl<T: Float> Integrator<T> for LogLog {
    #[inline]
    fn integral(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> Result<T, DomainError> {
        if x_left == x_right {
            return Ok(T::zero());
        }
        check_positive_y(y_left, y_right)?;
        check_log_x(x_left, x_right)?;
        let ratio = x_right / x_left;
        let slope = (y_right / y_left).ln() / ratio.ln();
        check_pole(slope, -T::one())?;
        let exponent = slope + T::one();
        Ok(y_left * x_left * (ratio.powf(exponent) - T::one()) / exponent)
    }

    #[inline]
    fn first_moment(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> Result<T, DomainError> {
        if x_left == x_right {
            return Ok(T::zero());
        }
        check_positive_y(y_left, y_right)?;
        check_log_x(x_left, x_right)?;
        let ratio = x_right / x_left;
        let slope = (y_right / y_left).ln() / ratio.ln();
        let two: T = cast(2);
        check_pole(slope, -two)?;
        let exponent = slope + two;
        Ok(y_left * x_left * x_left * (ratio.powf(exponent) - T::one()) / exponent)
    }
}

/// The log-log closed forms divide by (slope - pole)
#[inline]
fn check_pole<T: Float>(slope: T, pole: T) -> Result<(), DomainError> {
    if is_close(slope, pole) {
        Err(DomainError::Singularity {
            slope: slope.to_f64().unwrap_or(f64::NAN),
            pole: pole.to_f64().unwrap_or(f64::NAN),
        })
    } else {
        Ok(())
    }
}
