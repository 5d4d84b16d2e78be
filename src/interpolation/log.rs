//! Interpolation laws that are linear in ln(y)

use num_traits::Float;

use super::{check_log_x, check_positive_y, InterpolationType, Interpolator};
use crate::error::DomainError;

/// Logarithmic-linear interpolation: ln(y) is linear in x
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogLinear;

impl<T: Float> Interpolator<T> for LogLinear {
    const TYPE: InterpolationType = InterpolationType::LogLinear;

    #[inline]
    fn interpolate(
        &self,
        x: T,
        x_left: T,
        x_right: T,
        y_left: T,
        y_right: T,
    ) -> Result<T, DomainError> {
        check_positive_y(y_left, y_right)?;
        let t = (x - x_left) / (x_right - x_left);
        Ok(y_left * ((y_right / y_left).ln() * t).exp())
    }
}

/// Logarithmic-logarithmic interpolation: ln(y) is linear in ln(x)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogLog;

impl<T: Float> Interpolator<T> for LogLog {
    const TYPE: InterpolationType = InterpolationType::LogLog;

    #[inline]
    fn interpolate(
        &self,
        x: T,
        x_left: T,
        x_right: T,
        y_left: T,
        y_right: T,
    ) -> Result<T, DomainError> {
        check_positive_y(y_left, y_right)?;
        check_log_x(x_left, x_right)?;
        let t = (x / x_left).ln() / (x_right / x_left).ln();
        Ok(y_left * (y_right / y_left).powf(t))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::DomainError;
    use approx::assert_relative_eq;

    #[test]
    fn test_log_linear() {
        let law = LogLinear;
        for xi in [1.0_f64, 1.5, 2.0, 3.5, 4.0] {
            let expected = (4.0_f64.ln() + (0.25_f64).ln() * (xi - 1.0) / 3.0).exp();
            assert_relative_eq!(
                law.interpolate(xi, 1.0, 4.0, 4.0, 1.0).unwrap(),
                expected,
                epsilon = 1e-14
            );
        }
        assert_eq!(law.interpolate(1.0_f64, 1.0, 4.0, 4.0, 1.0).unwrap(), 4.0);
    }

    #[test]
    fn test_log_log() {
        let law = LogLog;
        // y = 4 / x on [1, 4] is exactly log-log
        for xi in [1.0_f64, 1.5, 2.0, 3.5, 4.0] {
            assert_relative_eq!(
                law.interpolate(xi, 1.0, 4.0, 4.0, 1.0).unwrap(),
                4.0 / xi,
                epsilon = 1e-14
            );
        }
    }

    #[test]
    fn test_non_positive_values() {
        let err = LogLinear.interpolate(1.5_f64, 1.0, 2.0, 0.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            DomainError::NonPositiveValues {
                y_left: 0.0,
                y_right: 1.0
            }
        );
        assert!(LogLinear.interpolate(1.5_f64, 1.0, 2.0, -1.0, -2.0).is_err());
        assert!(LogLog.interpolate(1.5_f64, 1.0, 2.0, 1.0, -2.0).is_err());
        assert!(LogLog.interpolate(0.5_f64, 0.0, 2.0, 1.0, 2.0).is_err());
    }
}
