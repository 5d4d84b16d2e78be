//! Strategies for picking the point at which a panel is bisected.

use num_traits::Float;

use crate::utils::cast;

/// Pick a point inside `[x_left, x_right]` at which to split a panel that
/// has not converged.
///
/// The lineariser accepts a panel unconditionally when the returned value is
/// not strictly inside it, which bounds the bisection depth.
pub trait Split<T> {
    fn split(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> T;
}

impl<T, F> Split<T> for F
where
    F: Fn(T, T, T, T) -> T,
{
    #[inline]
    fn split(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
        self(x_left, x_right, y_left, y_right)
    }
}

/// Split at the arithmetic midpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MidpointSplit;

impl<T: Float> Split<T> for MidpointSplit {
    #[inline]
    fn split(&self, x_left: T, x_right: T, _: T, _: T) -> T {
        (x_left + x_right) / cast(2)
    }
}

/// Split at the geometric midpoint, i.e. the midpoint on a logarithmic axis.
///
/// Panels that straddle zero have no geometric midpoint and are split at the
/// arithmetic midpoint instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogarithmicMidpointSplit;

impl<T: Float> Split<T> for LogarithmicMidpointSplit {
    #[inline]
    fn split(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
        let zero = T::zero();
        let two: T = cast(2);
        if x_left > zero && x_right > zero {
            ((x_left.ln() + x_right.ln()) / two).exp()
        } else if x_left < zero && x_right < zero {
            -(((-x_left).ln() + (-x_right).ln()) / two).exp()
        } else {
            MidpointSplit.split(x_left, x_right, y_left, y_right)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_midpoint() {
        assert_eq!(MidpointSplit.split(1.0, 4.0, 0.0, 0.0), 2.5);
        assert_eq!(MidpointSplit.split(-3.0_f32, -1.0, 0.0, 0.0), -2.0);
    }

    #[test]
    fn test_logarithmic_midpoint() {
        let m = LogarithmicMidpointSplit.split(1.0, 100.0, 0.0, 0.0);
        assert!((m - 10.0_f64).abs() < 1e-12);

        let m = LogarithmicMidpointSplit.split(-100.0, -1.0, 0.0, 0.0);
        assert!((m + 10.0_f64).abs() < 1e-12);

        // No geometric midpoint across zero
        assert_eq!(LogarithmicMidpointSplit.split(-1.0, 3.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn test_closure() {
        let third = |xl: f64, xr: f64, _: f64, _: f64| xl + (xr - xl) / 3.0;
        assert_eq!(third.split(0.0, 3.0, 0.0, 0.0), 1.0);
    }
}
