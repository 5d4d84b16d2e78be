//! Piecewise-constant interpolation

use num_traits::Float;

use super::{InterpolationType, Interpolator};
use crate::error::DomainError;

/// Histogram interpolation: holds the left value over the whole panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Histogram;

impl<T: Float> Interpolator<T> for Histogram {
    const TYPE: InterpolationType = InterpolationType::Histogram;

    #[inline]
    fn interpolate(
        &self,
        _x: T,
        _x_left: T,
        _x_right: T,
        y_left: T,
        _y_right: T,
    ) -> Result<T, DomainError> {
        Ok(y_left)
    }
}
