//! Domains over which a one-dimensional function is defined.

use num_traits::Float;

/// The domain of a function: either a closed interval or the whole real line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain<T> {
    /// The closed interval `[lower, upper]`
    Interval { lower: T, upper: T },
    /// No restriction on the independent variable
    Open,
}

impl<T: Float> Domain<T> {
    /// Build an interval domain, ordering the limits.
    pub fn interval(a: T, b: T) -> Self {
        Domain::Interval {
            lower: a.min(b),
            upper: a.max(b),
        }
    }

    /// Whether `x` lies in the domain, limits included.
    #[inline]
    pub fn is_inside(&self, x: T) -> bool {
        match *self {
            Domain::Interval { lower, upper } => lower <= x && x <= upper,
            Domain::Open => true,
        }
    }

    /// Whether `x` lies strictly inside the domain, limits excluded.
    #[inline]
    pub fn is_contained(&self, x: T) -> bool {
        match *self {
            Domain::Interval { lower, upper } => lower < x && x < upper,
            Domain::Open => true,
        }
    }

    /// The lower and upper limit, if any
    pub fn limits(&self) -> Option<(T, T)> {
        match *self {
            Domain::Interval { lower, upper } => Some((lower, upper)),
            Domain::Open => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Domain;

    #[test]
    fn test_interval() {
        let d = Domain::interval(4.0, 1.0);
        assert_eq!(
            d,
            Domain::Interval {
                lower: 1.0,
                upper: 4.0
            }
        );
        assert!(d.is_inside(1.0));
        assert!(d.is_inside(4.0));
        assert!(!d.is_inside(0.5));
        assert!(!d.is_contained(1.0));
        assert!(d.is_contained(2.5));
        assert_eq!(d.limits(), Some((1.0, 4.0)));
    }

    #[test]
    fn test_open() {
        let d = Domain::<f64>::Open;
        assert!(d.is_inside(-1e300));
        assert!(d.is_contained(f64::MAX));
        assert_eq!(d.limits(), None);
    }
}
