//! Second central moment of a panel, the integral of (x - mean)^2 y, for the
//! histogram and lin-lin laws.
use num_traits::Float;

use crate::error::DomainError;
use crate::interpolation::InterpolationType;
use crate::utils::cast;

/// Integral of (x - mean)^2 y over a histogram panel
#[inline]
pub fn histogram_variance<T: Float>(
    mean: T,
    x_left: T,
    x_right: T,
    y_left: T,
    _y_right: T,
) -> T {
    let third: T = cast::<T, _>(1) / cast(3);
    let cubes = x_right * x_right * x_right - x_left * x_left * x_left;
    let squares = x_right * x_right - x_left * x_left;
    y_left * (third * cubes - mean * squares + mean * mean * (x_right - x_left))
}

/// Integral of (x - mean)^2 y over a lin-lin panel
#[inline]
pub fn linear_linear_variance<T: Float>(
    mean: T,
    x_left: T,
    x_right: T,
    y_left: T,
    y_right: T,
) -> T {
    if x_left == x_right {
        return T::zero();
    }
    // y = s x + c, so the primitive is a x^4 + b x^3 + c' x^2 + d x
    let delta = x_right - x_left;
    let slope = (y_right - y_left) / delta;
    let constant = (x_right * y_left - x_left * y_right) / delta;
    let two: T = cast(2);

    let a = slope / cast(4);
    let b = (constant - two * slope * mean) / cast(3);
    let c = (slope * mean - two * constant) * mean / two;
    let d = constant * mean * mean;
    let primitive = |x: T| (((a * x + b) * x + c) * x + d) * x;
    primitive(x_right) - primitive(x_left)
}

/// Integral of (x - mean)^2 y over a panel, dispatching on the law.
///
/// # Errors
/// * If the law is neither histogram nor lin-lin
#[inline]
pub fn variance<T: Float>(
    law: InterpolationType,
    mean: T,
    x_left: T,
    x_right: T,
    y_left: T,
    y_right: T,
) -> Result<T, DomainError> {
    match law {
        InterpolationType::Histogram => {
            Ok(histogram_variance(mean, x_left, x_right, y_left, y_right))
        }
        InterpolationType::LinearLinear => {
            Ok(linear_linear_variance(mean, x_left, x_right, y_left, y_right))
        }
        law => Err(DomainError::UnsupportedLaw {
            operation: "variance",
            law,
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::gauss_legendre;
    use approx::assert_relative_eq;

    #[test]
    fn test_histogram() {
        // y = 2 on [1, 3] about 2
        assert_relative_eq!(
            histogram_variance(2.0, 1.0, 3.0, 2.0, 5.0),
            4.0 / 3.0,
            epsilon = 1e-14
        );
        assert_eq!(histogram_variance(2.0, 1.5, 1.5, 2.0, 5.0), 0.0);
    }

    #[test]
    fn test_linear_linear() {
        // y = x on [0, 2] about 1
        assert_relative_eq!(
            linear_linear_variance(1.0, 0.0, 2.0, 0.0, 2.0),
            2.0 / 3.0,
            epsilon = 1e-14
        );
        assert_eq!(linear_linear_variance(1.0, 2.0, 2.0, 0.0, 2.0), 0.0);

        // y = 7 - 2 x on [0.5, 3] about 1.3
        let f = |x: f64| (x - 1.3) * (x - 1.3) * (7.0 - 2.0 * x);
        assert_relative_eq!(
            linear_linear_variance(1.3, 0.5, 3.0, 6.0, 1.0),
            gauss_legendre(&f, 0.5, 3.0, 1),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(
            variance(InterpolationType::Histogram, 2.0, 1.0, 3.0, 2.0, 5.0),
            Ok(histogram_variance(2.0, 1.0, 3.0, 2.0, 5.0))
        );
        assert_eq!(
            variance(InterpolationType::LinearLinear, 1.0, 0.0, 2.0, 0.0, 2.0),
            Ok(linear_linear_variance(1.0, 0.0, 2.0, 0.0, 2.0))
        );
        assert_eq!(
            variance(InterpolationType::LogLog, 1.0, 1.0, 2.0, 1.0, 2.0),
            Err(DomainError::UnsupportedLaw {
                operation: "variance",
                law: InterpolationType::LogLog
            })
        );
    }
}
