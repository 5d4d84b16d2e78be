//! Convenience methods for constructing grids in a way that echoes,
//! but does not exactly match, methods common in scripting languages,
//! plus the floating-point comparison used throughout the crate.
use num_traits::{Float, NumCast};

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let dx: T = (stop - start) / cast(n - 1);
            let mut out: Vec<T> = (0..n).map(|i| start + cast::<T, _>(i) * dx).collect();
            // Pin the endpoint so the grid covers the requested domain exactly
            out[n - 1] = stop;
            out
        }
    }
}

/// Generates logarithmically spaced values from start to stop,
/// including the endpoint. Both limits must be strictly positive.
pub fn logspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    let mut out: Vec<T> = linspace(start.ln(), stop.ln(), n)
        .into_iter()
        .map(T::exp)
        .collect();
    if n > 0 {
        out[0] = start;
        out[n - 1] = stop;
    }
    out
}

/// Check whether two values are close, using a relative tolerance on the sum
/// of their magnitudes and an absolute threshold for values near zero.
/// Both default to 100 machine epsilon in [`is_close`].
#[inline]
pub fn is_close_with<T: Float>(a: T, b: T, epsilon: T, threshold: T) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    let norm = a.abs() + b.abs();
    diff < (epsilon * norm).max(threshold)
}

/// Check whether two values are within 100 machine epsilon of one another
#[inline]
pub fn is_close<T: Float>(a: T, b: T) -> bool {
    let eps = hundred_epsilon::<T>();
    is_close_with(a, b, eps, eps)
}

/// 100 times the machine epsilon of the type
#[inline]
pub(crate) fn hundred_epsilon<T: Float>() -> T {
    cast::<T, _>(100) * T::epsilon()
}

/// Numeric conversion for small constants and indices, which are
/// representable in every floating-point type.
#[inline]
pub(crate) fn cast<T: Float, N: NumCast>(n: N) -> T {
    T::from(n).unwrap_or_else(T::nan)
}
