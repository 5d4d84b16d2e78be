//! Interpolation laws that are linear in y

use num_traits::Float;

use super::{check_log_x, InterpolationType, Interpolator};
use crate::error::DomainError;

/// Linear-linear interpolation: y is linear in x
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearLinear;

impl<T: Float> Interpolator<T> for LinearLinear {
    const TYPE: InterpolationType = InterpolationType::LinearLinear;

    #[inline]
    fn interpolate(
        &self,
        x: T,
        x_left: T,
        x_right: T,
        y_left: T,
        y_right: T,
    ) -> Result<T, DomainError> {
        let slope = (y_right - y_left) / (x_right - x_left);
        let dx = x - x_left;
        Ok(y_left + slope * dx)
    }
}

/// Linear-logarithmic interpolation: y is linear in ln(x)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearLog;

impl<T: Float> Interpolator<T> for LinearLog {
    const TYPE: InterpolationType = InterpolationType::LinearLog;

    #[inline]
    fn interpolate(
        &self,
        x: T,
        x_left: T,
        x_right: T,
        y_left: T,
        y_right: T,
    ) -> Result<T, DomainError> {
        check_log_x(x_left, x_right)?;
        let t = (x / x_left).ln() / (x_right / x_left).ln();
        Ok(y_left + (y_right - y_left) * t)
    }
}
