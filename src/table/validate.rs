//! Validation of tabulated data and normalisation of its regions.

use core::cmp::Ordering;

use num_traits::Float;

use crate::error::ValidationError;
use crate::interpolation::InterpolationType;

/// Validate tabulated data and place a region boundary on the first point of
/// every jump, so that no region contains a jump in its interior.
///
/// A boundary on the second point of a jump is moved to the first point. A
/// jump inside a region splits that region in two, both with the same law.
///
/// # Errors
/// * If there are fewer than 2 points
/// * If x and y have different lengths
/// * If boundaries and interpolants have different lengths, or are empty
/// * If the last boundary is not the last point
/// * If the first boundary is the first point
/// * If the boundaries are not strictly increasing
/// * If the x values are not sorted
/// * If there is a jump at the first or last point
/// * If an x value occurs more than twice
pub(crate) fn process_boundaries<T: Float>(
    x: &[T],
    y: &[T],
    mut boundaries: Vec<usize>,
    mut interpolants: Vec<InterpolationType>,
) -> Result<(Vec<usize>, Vec<InterpolationType>), ValidationError> {
    let n = x.len();
    if n < 2 || y.len() < 2 {
        return Err(ValidationError::InsufficientPoints { x: n, y: y.len() });
    }
    if n != y.len() {
        return Err(ValidationError::LengthMismatch { x: n, y: y.len() });
    }
    if boundaries.len() != interpolants.len() {
        return Err(ValidationError::RegionMismatch {
            boundaries: boundaries.len(),
            interpolants: interpolants.len(),
        });
    }
    match boundaries.last() {
        None => return Err(ValidationError::NoRegions),
        Some(&last) if last != n - 1 => {
            return Err(ValidationError::LastBoundary {
                expected: n - 1,
                found: last,
            })
        }
        Some(_) => {}
    }
    if boundaries[0] == 0 {
        return Err(ValidationError::EmptyFirstRegion);
    }
    if let Some(region) = (1..boundaries.len()).find(|&r| boundaries[r] <= boundaries[r - 1]) {
        return Err(ValidationError::UnsortedBoundaries { region });
    }
    let ascending = |i: usize| {
        matches!(
            x[i].partial_cmp(&x[i - 1]),
            Some(Ordering::Greater | Ordering::Equal)
        )
    };
    if let Some(index) = (1..n).find(|&i| !ascending(i)) {
        return Err(ValidationError::NotSorted { index });
    }
    if x[0] == x[1] {
        return Err(ValidationError::JumpAtStart);
    }
    if x[n - 2] == x[n - 1] {
        return Err(ValidationError::JumpAtEnd);
    }
    if let Some(index) = (0..n - 2).find(|&i| x[i] == x[i + 2]) {
        return Err(ValidationError::TooManyRepeats { index });
    }

    for i in (1..n - 2).filter(|&i| x[i] == x[i + 1]) {
        let p = boundaries.partition_point(|&b| b < i + 1);
        let on_first = p > 0 && boundaries[p - 1] == i;
        let on_second = boundaries.get(p) == Some(&(i + 1));
        match (on_first, on_second) {
            // A region holding nothing but the jump disappears
            (true, true) => {
                boundaries.remove(p);
                interpolants.remove(p);
            }
            (false, true) => boundaries[p] = i,
            (true, false) => {}
            (false, false) => {
                let law = interpolants[p];
                boundaries.insert(p, i);
                interpolants.insert(p, law);
            }
        }
    }

    Ok((boundaries, interpolants))
}

#[cfg(test)]
mod test {
    use super::*;
    use InterpolationType::{Histogram, LinearLinear, LogLog};

    fn process(
        x: &[f64],
        boundaries: Vec<usize>,
        interpolants: Vec<InterpolationType>,
    ) -> Result<(Vec<usize>, Vec<InterpolationType>), ValidationError> {
        let y = vec![1.0; x.len()];
        process_boundaries(x, &y, boundaries, interpolants)
    }

    #[test]
    fn test_errors() {
        use ValidationError::*;

        assert_eq!(
            process_boundaries(&[1.0], &[1.0], vec![0], vec![LinearLinear]),
            Err(InsufficientPoints { x: 1, y: 1 })
        );
        assert_eq!(
            process_boundaries(&[1.0, 2.0], &[1.0, 2.0, 3.0], vec![1], vec![LinearLinear]),
            Err(LengthMismatch { x: 2, y: 3 })
        );
        assert_eq!(
            process(&[1.0, 2.0], vec![1], vec![]),
            Err(RegionMismatch {
                boundaries: 1,
                interpolants: 0
            })
        );
        assert_eq!(process(&[1.0, 2.0], vec![], vec![]), Err(NoRegions));
        assert_eq!(
            process(&[1.0, 2.0, 3.0], vec![1], vec![LinearLinear]),
            Err(LastBoundary {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            process(&[1.0, 2.0, 3.0], vec![0, 2], vec![Histogram, LinearLinear]),
            Err(EmptyFirstRegion)
        );
        assert_eq!(
            process(&[1.0, 2.0, 3.0], vec![2, 2], vec![LinearLinear, LogLog]),
            Err(UnsortedBoundaries { region: 1 })
        );
        assert_eq!(
            process(&[1.0, 3.0, 2.0], vec![2], vec![LinearLinear]),
            Err(NotSorted { index: 2 })
        );
        assert_eq!(
            process(&[1.0, f64::NAN, 2.0], vec![2], vec![LinearLinear]),
            Err(NotSorted { index: 1 })
        );
        assert_eq!(
            process(&[1.0, 1.0, 2.0], vec![2], vec![LinearLinear]),
            Err(JumpAtStart)
        );
        assert_eq!(
            process(&[1.0, 2.0, 2.0], vec![2], vec![LinearLinear]),
            Err(JumpAtEnd)
        );
        assert_eq!(
            process(&[1.0, 2.0, 2.0, 2.0, 3.0], vec![4], vec![LinearLinear]),
            Err(TooManyRepeats { index: 1 })
        );
    }

    #[test]
    fn test_jump_inside_region() {
        assert_eq!(
            process(&[1.0, 2.0, 2.0, 3.0], vec![3], vec![LogLog]),
            Ok((vec![1, 3], vec![LogLog, LogLog]))
        );
        assert_eq!(
            process(&[1.0, 2.0, 2.0, 3.0, 3.0, 4.0], vec![5], vec![LinearLinear]),
            Ok((vec![1, 3, 5], vec![LinearLinear; 3]))
        );
    }

    #[test]
    fn test_jump_on_boundary() {
        // Boundary on the first point is kept
        assert_eq!(
            process(&[1.0, 2.0, 2.0, 3.0], vec![1, 3], vec![Histogram, LogLog]),
            Ok((vec![1, 3], vec![Histogram, LogLog]))
        );
        // Boundary on the second point moves to the first
        assert_eq!(
            process(&[1.0, 2.0, 2.0, 3.0], vec![2, 3], vec![Histogram, LogLog]),
            Ok((vec![1, 3], vec![Histogram, LogLog]))
        );
        // A region made of the jump alone is dropped
        assert_eq!(
            process(
                &[1.0, 2.0, 2.0, 3.0],
                vec![1, 2, 3],
                vec![Histogram, LinearLinear, LogLog]
            ),
            Ok((vec![1, 3], vec![Histogram, LogLog]))
        );
    }
}
