//! Union of tabulation grids, used to bring tables onto a common grid
//! before combining them pointwise.
//!
//! The union of two sorted grids is their multiset union: a value that occurs
//! twice in either grid (a jump) occurs twice in the union. Where one grid
//! starts after the other, its first value is duplicated in the union so that
//! its function can drop to zero outside its domain with a jump rather than
//! a slope; the same holds where one grid ends before the other.
//!
//! ```rust
//! use tabulated::unionisation::unionise;
//!
//! let grid = unionise(&[1.0, 4.0], &[2.0, 3.0]);
//! assert_eq!(grid, vec![1.0, 2.0, 2.0, 3.0, 3.0, 4.0]);
//! ```

use core::cmp::Ordering;

use itertools::{EitherOrBoth, Itertools};
use num_traits::Float;

use crate::error::DomainError;
use crate::interpolation::InterpolationType;

/// Index of the first value that is not less than `x`
#[inline]
pub(crate) fn lower_bound<T: Float>(grid: &[T], x: T) -> usize {
    grid.partition_point(|&v| v < x)
}

/// Whether the first occurrence of `x` in `grid` is followed by a second one
#[inline]
fn is_jump<T: Float>(grid: &[T], x: T) -> bool {
    let i = lower_bound(grid, x);
    grid.get(i) == Some(&x) && grid.get(i + 1) == Some(&x)
}

/// Duplicate `x` unless its first occurrence is already followed by a copy
fn insert_jump<T: Float>(grid: &mut Vec<T>, x: T) {
    let i = lower_bound(grid, x);
    if grid.get(i + 1) != Some(&x) {
        grid.insert(i, x);
    }
}

/// The union of two sorted grids, with a jump inserted at the start (end) of
/// the grid that starts later (ends earlier) when the limits differ.
pub fn unionise<T: Float>(a: &[T], b: &[T]) -> Vec<T> {
    let mut grid: Vec<T> = a
        .iter()
        .merge_join_by(b.iter(), |x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal))
        .map(|pair| match pair {
            EitherOrBoth::Both(&x, _) | EitherOrBoth::Left(&x) | EitherOrBoth::Right(&x) => x,
        })
        .collect();

    if let (Some(&a_first), Some(&b_first)) = (a.first(), b.first()) {
        if a_first != b_first {
            insert_jump(&mut grid, a_first.max(b_first));
        }
    }
    if let (Some(&a_last), Some(&b_last)) = (a.last(), b.last()) {
        if a_last != b_last {
            insert_jump(&mut grid, a_last.min(b_last));
        }
    }

    grid
}

/// Collects any number of grids and unionises them, then re-expresses
/// tabulated data defined on any of the original grids on the union grid.
#[derive(Debug, Clone, Default)]
pub struct Unioniser<'a, T> {
    grids: Vec<&'a [T]>,
    grid: Vec<T>,
}

impl<'a, T: Float> Unioniser<'a, T> {
    pub fn new() -> Self {
        Self {
            grids: Vec::new(),
            grid: Vec::new(),
        }
    }

    /// Add a sorted grid to the set to be unionised
    pub fn add_grid(&mut self, grid: &'a [T]) {
        self.grids.push(grid);
    }

    /// The number of grids added so far
    pub fn number_grids(&self) -> usize {
        self.grids.len()
    }

    /// Unionise all grids added so far, smallest first.
    pub fn unionise(&mut self) -> &[T] {
        let mut grids = self.grids.clone();
        grids.sort_by_key(|g| g.len());

        self.grid = match grids.split_first() {
            Some((first, rest)) => rest
                .iter()
                .fold(first.to_vec(), |union, grid| unionise(&union, grid)),
            None => Vec::new(),
        };

        &self.grid
    }

    /// The union grid produced by the last call to [`Unioniser::unionise`]
    pub fn grid(&self) -> &[T] {
        &self.grid
    }

    /// Remove all grids and the union grid
    pub fn clear(&mut self) {
        self.grids.clear();
        self.grid.clear();
    }

    /// Whether data on `grid` can be re-expressed on the union grid: every
    /// value must be present, every jump must be present as a jump, and a
    /// first or last value that is not also the first or last value of the
    /// union must be a jump in the union.
    pub fn is_compatible(&self, grid: &[T]) -> bool {
        let union = &self.grid;
        let (Some(&first), Some(&last)) = (grid.first(), grid.last()) else {
            return true;
        };

        let present = grid.iter().all(|&x| union.get(lower_bound(union, x)) == Some(&x));
        let jumps = grid
            .windows(2)
            .filter(|w| w[0] == w[1])
            .all(|w| is_jump(union, w[0]));
        let front = union.first() == Some(&first) || is_jump(union, first);
        let back = union.last() == Some(&last) || is_jump(union, last);

        present && jumps && front && back
    }

    /// Lin-lin data `(x, y)` on the union grid, see
    /// [`Unioniser::evaluate_regions`].
    ///
    /// # Errors
    /// * If the lengths of `x` and `y` differ
    pub fn evaluate(&self, x: &[T], y: &[T]) -> Result<Vec<T>, DomainError> {
        let last = x.len().saturating_sub(1);
        self.evaluate_regions(x, y, &[last], &[InterpolationType::LinearLinear])
    }

    /// The values on the union grid of the tabulated data `(x, y)` with the
    /// given interpolation regions. Union grid points between two foreign
    /// points are interpolated with the law of the foreign panel; union grid
    /// points outside the foreign domain are zero. The union grid must be
    /// compatible with `x`.
    ///
    /// # Errors
    /// * If the lengths of `x` and `y` differ
    /// * If the lengths of `boundaries` and `interpolants` differ, or are zero
    /// * If a law cannot be evaluated on a foreign panel
    pub fn evaluate_regions(
        &self,
        x: &[T],
        y: &[T],
        boundaries: &[usize],
        interpolants: &[InterpolationType],
    ) -> Result<Vec<T>, DomainError> {
        if x.len() != y.len() {
            return Err(DomainError::OutputLength {
                locations: x.len(),
                output: y.len(),
            });
        }
        if boundaries.len() != interpolants.len() || interpolants.is_empty() {
            return Err(DomainError::RegionLength {
                boundaries: boundaries.len(),
                interpolants: interpolants.len(),
            });
        }

        let grid = &self.grid;
        let mut result = vec![T::zero(); grid.len()];
        let Some(&first) = x.first() else {
            return Ok(result);
        };

        // Skip the zero half of a jump inserted at the start of the data
        let mut k = lower_bound(grid, first);
        if grid.get(k + 1) == Some(&first) {
            k += 1;
        }

        let mut t = 0;
        let mut region = 0;
        while k < grid.len() {
            if grid[k] < x[t] {
                let law = interpolants[region.min(interpolants.len() - 1)];
                result[k] = law.interpolate(grid[k], x[t - 1], x[t], y[t - 1], y[t])?;
            } else {
                result[k] = y[t];
                t += 1;
                if t == x.len() {
                    break;
                }
                if boundaries.get(region).is_some_and(|&b| t > b) {
                    region += 1;
                }
            }
            k += 1;
        }

        Ok(result)
    }

    /// Map the interpolation regions of data on the grid `x` onto indices of
    /// the union grid. Lin-lin regions are added before and after the foreign
    /// domain when it does not cover the union grid.
    pub fn update_boundaries_and_interpolants(
        &self,
        x: &[T],
        boundaries: &[usize],
        interpolants: &[InterpolationType],
    ) -> (Vec<usize>, Vec<InterpolationType>) {
        let grid = &self.grid;
        let n = grid.len();
        let mut new_boundaries = Vec::with_capacity(boundaries.len() + 2);
        let mut new_interpolants = Vec::with_capacity(interpolants.len() + 2);

        let (Some(&first), Some(&last)) = (x.first(), x.last()) else {
            return (vec![n.saturating_sub(1)], vec![InterpolationType::LinearLinear]);
        };

        if grid.first().is_some_and(|&g| first > g) {
            new_boundaries.push(lower_bound(grid, first));
            new_interpolants.push(InterpolationType::LinearLinear);
        }

        let ends_early = grid.last().is_some_and(|&g| last < g);
        for (r, (&b, &law)) in boundaries.iter().zip(interpolants).enumerate() {
            let is_last = r + 1 == boundaries.len();
            if is_last && !ends_early {
                new_boundaries.push(n - 1);
            } else {
                new_boundaries.push(lower_bound(grid, x[b]));
            }
            new_interpolants.push(law);
        }

        if ends_early {
            new_boundaries.push(n - 1);
            new_interpolants.push(InterpolationType::LinearLinear);
        }

        (new_boundaries, new_interpolants)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use InterpolationType::{Histogram, LinearLinear, LogLog};

    #[test]
    fn test_unionise_duplicates() {
        // Jumps inside either grid survive
        assert_eq!(
            unionise(&[1.0, 2.0, 2.0, 3.0], &[1.0, 2.0, 3.0]),
            vec![1.0, 2.0, 2.0, 3.0]
        );
        assert_eq!(
            unionise(&[1.0, 2.0, 2.0, 3.0], &[1.0, 1.5, 2.0, 2.0, 3.0]),
            vec![1.0, 1.5, 2.0, 2.0, 3.0]
        );
        assert_eq!(
            unionise(&[1.0, 2.0, 3.0], &[1.0, 2.5, 2.5, 3.0]),
            vec![1.0, 2.0, 2.5, 2.5, 3.0]
        );
    }

    #[test]
    fn test_unionise_limits() {
        assert_eq!(
            unionise(&[1.0, 4.0], &[2.0, 3.0]),
            vec![1.0, 2.0, 2.0, 3.0, 3.0, 4.0]
        );
        assert_eq!(unionise(&[1.0, 4.0], &[2.0, 4.0]), vec![1.0, 2.0, 2.0, 4.0]);
        assert_eq!(unionise(&[2.0, 4.0], &[1.0, 4.0]), vec![1.0, 2.0, 2.0, 4.0]);
        assert_eq!(unionise(&[1.0, 3.0], &[1.0, 4.0]), vec![1.0, 3.0, 3.0, 4.0]);
        assert_eq!(unionise(&[1.0, 2.0], &[]), vec![1.0, 2.0]);
    }

    #[test]
    fn test_unionise_existing_jump() {
        // Only the element after the first occurrence is inspected: an
        // existing jump at the start of the later grid is not duplicated again
        assert_eq!(
            unionise(&[1.0, 4.0], &[2.0, 2.0, 3.0]),
            vec![1.0, 2.0, 2.0, 3.0, 3.0, 4.0]
        );
        // Likewise at the end of the grid that ends earlier
        assert_eq!(
            unionise(&[1.0, 2.0, 2.0, 4.0], &[1.0, 2.0]),
            vec![1.0, 2.0, 2.0, 4.0]
        );
        assert_eq!(
            unionise(&[1.0, 2.0], &[1.0, 2.0, 2.0, 4.0]),
            vec![1.0, 2.0, 2.0, 4.0]
        );
    }

    #[test]
    fn test_unionise_distinct_jumps() {
        assert_eq!(
            unionise(&[1.0, 2.0, 2.0, 4.0], &[1.0, 3.0, 3.0, 4.0]),
            vec![1.0, 2.0, 2.0, 3.0, 3.0, 4.0]
        );
        // Each jump keeps exactly two copies next to a synthetic one
        assert_eq!(
            unionise(&[0.0, 2.0, 2.0, 5.0], &[1.0, 3.0, 3.0, 4.0]),
            vec![0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0, 5.0]
        );
    }

    #[test]
    fn test_unioniser() {
        let a = [0.0, 10.0];
        let b = [1.0, 2.0, 3.0];
        let c = [2.0, 5.0, 6.0, 7.0];

        let mut unioniser = Unioniser::new();
        unioniser.add_grid(&c);
        unioniser.add_grid(&a);
        unioniser.add_grid(&b);
        assert_eq!(unioniser.number_grids(), 3);

        let expected = [0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 5.0, 6.0, 7.0, 7.0, 10.0];
        assert_eq!(unioniser.unionise(), &expected);
        assert_eq!(unioniser.grid(), &expected);

        assert!(unioniser.is_compatible(&a));
        assert!(unioniser.is_compatible(&b));
        assert!(unioniser.is_compatible(&c));
        assert!(unioniser.is_compatible(&[1.0, 2.0, 2.0, 10.0]));
        // Missing value
        assert!(!unioniser.is_compatible(&[0.0, 4.0]));
        // 5 is not a jump in the union
        assert!(!unioniser.is_compatible(&[2.0, 5.0]));
        // 6 is not a jump in the union
        assert!(!unioniser.is_compatible(&[0.0, 6.0, 6.0, 10.0]));

        unioniser.clear();
        assert_eq!(unioniser.number_grids(), 0);
        assert!(unioniser.grid().is_empty());
        assert!(unioniser.unionise().is_empty());
    }

    #[test]
    fn test_evaluate() {
        let (xa, ya) = ([1.0, 4.0], [1.0, 4.0]);
        let (xb, yb) = ([2.0, 3.0], [5.0, 7.0]);
        let mut unioniser = Unioniser::new();
        unioniser.add_grid(&xa);
        unioniser.add_grid(&xb);
        unioniser.unionise();

        assert_eq!(
            unioniser.evaluate(&xa, &ya).unwrap(),
            vec![1.0, 2.0, 2.0, 3.0, 3.0, 4.0]
        );
        assert_eq!(
            unioniser.evaluate(&xb, &yb).unwrap(),
            vec![0.0, 0.0, 5.0, 7.0, 0.0, 0.0]
        );
        assert!(unioniser.evaluate(&xb, &ya[..1]).is_err());
    }

    #[test]
    fn test_evaluate_regions() {
        let x = [1.0, 2.0, 3.0];
        let y = [1.0, 2.0, 4.0];
        let other = [1.0, 1.5, 2.5, 3.0];
        let mut unioniser = Unioniser::new();
        unioniser.add_grid(&x);
        unioniser.add_grid(&other);
        unioniser.unionise();

        let values = unioniser
            .evaluate_regions(&x, &y, &[1, 2], &[Histogram, LinearLinear])
            .unwrap();
        assert_eq!(values, vec![1.0, 1.0, 2.0, 3.0, 4.0]);

        // Log-log on a panel with a zero value
        let y = [1.0, 0.0, 4.0];
        assert!(unioniser
            .evaluate_regions(&x, &y, &[2], &[LogLog])
            .is_err());

        // Every region needs a law
        assert_eq!(
            unioniser.evaluate_regions(&x, &y, &[1, 2], &[Histogram]),
            Err(DomainError::RegionLength {
                boundaries: 2,
                interpolants: 1
            })
        );
    }

    #[test]
    fn test_update_boundaries_and_interpolants() {
        let (xa, xb) = ([1.0, 4.0], [2.0, 3.0]);
        let mut unioniser = Unioniser::new();
        unioniser.add_grid(&xa);
        unioniser.add_grid(&xb);
        unioniser.unionise();

        assert_eq!(
            unioniser.update_boundaries_and_interpolants(&xa, &[1], &[LogLog]),
            (vec![5], vec![LogLog])
        );
        assert_eq!(
            unioniser.update_boundaries_and_interpolants(&xb, &[1], &[LogLog]),
            (vec![1, 3, 5], vec![LinearLinear, LogLog, LinearLinear])
        );

        let x = [1.0, 2.0, 3.0, 4.0];
        let mut unioniser = Unioniser::new();
        unioniser.add_grid(&x);
        unioniser.add_grid(&xb);
        unioniser.unionise();
        assert_eq!(
            unioniser.update_boundaries_and_interpolants(&x, &[1, 3], &[Histogram, LogLog]),
            (vec![1, 5], vec![Histogram, LogLog])
        );
    }
}
