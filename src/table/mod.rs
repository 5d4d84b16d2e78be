//! Tabulated one-dimensional functions with one interpolation law per region.
//!
//! An [`InterpolationTable`] holds sorted x values, their y values, and a set
//! of interpolation regions. Region `r` ends at the point `boundaries[r]`
//! and interpolates with `interpolants[r]`; the last region ends at the last
//! point. An x value may occur twice in a row, which is a jump (a
//! discontinuity) in the function, and every jump sits on a region boundary.
//!
//! ```rust
//! use tabulated::{Function1D, InterpolationTable, InterpolationType};
//!
//! let table = InterpolationTable::with_interpolant(
//!     vec![1.0, 2.0, 3.0, 4.0],
//!     vec![4.0, 3.0, 2.0, 1.0],
//!     InterpolationType::Histogram,
//! )
//! .unwrap();
//!
//! assert_eq!(table.evaluate(1.5).unwrap(), 4.0);
//! assert_eq!(table.evaluate(5.0).unwrap(), 0.0);
//! assert_eq!(table.integral().unwrap(), 9.0);
//! ```

mod ops;
mod validate;

use core::ops::RangeInclusive;

use itertools::Itertools;
use num_traits::Float;

use crate::domain::Domain;
use crate::error::{DomainError, Error, ValidationError};
use crate::function::Function1D;
use crate::integration::{first_moment_panel, integrate_panel, variance};
use crate::interpolation::{InterpolationType, Panel};
use crate::linearisation::{
    Convergence, Lineariser, LogarithmicMidpointSplit, MidpointSplit, Split,
};
use crate::unionisation::Unioniser;

use validate::process_boundaries;

/// A tabulated function y = f(x) on `[x[0], x[n - 1]]`, zero outside.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationTable<T> {
    x: Vec<T>,
    y: Vec<T>,
    boundaries: Vec<usize>,
    interpolants: Vec<InterpolationType>,
    linearised: bool,
}

impl<T: Float> InterpolationTable<T> {
    /// A lin-lin table.
    ///
    /// # Errors
    /// * See [`InterpolationTable::with_regions`]
    pub fn new(x: Vec<T>, y: Vec<T>) -> Result<Self, ValidationError> {
        Self::with_interpolant(x, y, InterpolationType::LinearLinear)
    }

    /// A table with a single interpolation law. Regions are split at jumps.
    ///
    /// # Errors
    /// * See [`InterpolationTable::with_regions`]
    pub fn with_interpolant(
        x: Vec<T>,
        y: Vec<T>,
        interpolant: InterpolationType,
    ) -> Result<Self, ValidationError> {
        let last = x.len().saturating_sub(1);
        Self::with_regions(x, y, vec![last], vec![interpolant])
    }

    /// A table with explicit interpolation regions. Region boundaries are
    /// moved onto, or inserted at, the first point of every jump.
    ///
    /// # Errors
    /// * If there are fewer than 2 points, or x and y differ in length
    /// * If boundaries and interpolants differ in length, or are empty
    /// * If the last boundary is not the last point, the first boundary is the
    ///   first point, or the boundaries are not strictly increasing
    /// * If the x values are not sorted, a value occurs more than twice, or
    ///   there is a jump at either end
    pub fn with_regions(
        x: Vec<T>,
        y: Vec<T>,
        boundaries: Vec<usize>,
        interpolants: Vec<InterpolationType>,
    ) -> Result<Self, ValidationError> {
        let (boundaries, interpolants) = process_boundaries(&x, &y, boundaries, interpolants)?;
        let linearised = interpolants.iter().all(|law| law.is_linear());
        Ok(Self {
            x,
            y,
            boundaries,
            interpolants,
            linearised,
        })
    }

    /// A lin-lin table from data known to be valid, with a region boundary
    /// on every jump
    fn linear(x: Vec<T>, y: Vec<T>) -> Self {
        let n = x.len();
        let mut boundaries: Vec<usize> = (0..n.saturating_sub(1))
            .filter(|&i| x[i] == x[i + 1])
            .collect();
        boundaries.push(n.saturating_sub(1));
        let interpolants = vec![InterpolationType::LinearLinear; boundaries.len()];
        Self {
            x,
            y,
            boundaries,
            interpolants,
            linearised: true,
        }
    }

    /// Linearise a function on the sorted, unique initial `grid` by bisecting
    /// panels at their midpoint.
    ///
    /// # Errors
    /// * If the function cannot be evaluated
    /// * If the grid has fewer than 2 points or is not sorted
    pub fn from_function<F, C>(grid: &[T], function: &F, convergence: &C) -> Result<Self, Error>
    where
        F: Function1D<T> + ?Sized,
        C: Convergence<T> + ?Sized,
    {
        Self::linearise_function(grid, function, convergence, &MidpointSplit)
    }

    /// Linearise a function on the sorted, unique initial `grid` with a
    /// custom split strategy.
    ///
    /// # Errors
    /// * If the function cannot be evaluated
    /// * If the grid has fewer than 2 points or is not sorted
    pub fn linearise_function<F, C, S>(
        grid: &[T],
        function: &F,
        convergence: &C,
        split: &S,
    ) -> Result<Self, Error>
    where
        F: Function1D<T> + ?Sized,
        C: Convergence<T> + ?Sized,
        S: Split<T> + ?Sized,
    {
        let mut lineariser = Lineariser::new();
        lineariser.linearise(grid, |x| function.evaluate(x), convergence, split)?;
        let (x, y) = lineariser.finish();
        Ok(Self::new(x, y)?)
    }

    /// The x values
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// The y values
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// The index of the last point of each region
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// The interpolation law of each region
    pub fn interpolants(&self) -> &[InterpolationType] {
        &self.interpolants
    }

    pub fn number_points(&self) -> usize {
        self.x.len()
    }

    pub fn number_regions(&self) -> usize {
        self.boundaries.len()
    }

    /// Whether every region is lin-lin
    pub fn is_linearised(&self) -> bool {
        self.linearised
    }

    /// The law of the panel between points `i` and `i + 1`
    #[inline]
    fn panel_interpolant(&self, i: usize) -> InterpolationType {
        self.interpolants[self.boundaries.partition_point(|&b| b < i + 1)]
    }

    /// Every panel with its law, jumps included
    pub(crate) fn panels(&self) -> impl Iterator<Item = (InterpolationType, Panel<T>)> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .tuple_windows()
            .enumerate()
            .map(move |(i, ((&xl, &yl), (&xr, &yr)))| {
                (self.panel_interpolant(i), Panel::new(xl, xr, yl, yr))
            })
    }

    /// Every region with its law and its points. A region that follows a
    /// jump starts on the second point of the jump.
    pub(crate) fn regions(
        &self,
    ) -> impl Iterator<Item = (InterpolationType, RangeInclusive<usize>)> + '_ {
        self.boundaries
            .iter()
            .zip(&self.interpolants)
            .enumerate()
            .map(move |(r, (&end, &law))| {
                let start = match r {
                    0 => 0,
                    _ => {
                        let previous = self.boundaries[r - 1];
                        if self.x[previous] == self.x[previous + 1] {
                            previous + 1
                        } else {
                            previous
                        }
                    }
                };
                (law, start..=end)
            })
    }

    /// The integral over the whole table.
    ///
    /// # Errors
    /// * If a closed form is undefined on one of the panels
    pub fn integral(&self) -> Result<T, DomainError> {
        self.panels().try_fold(T::zero(), |sum, (law, panel)| {
            Ok(sum + integrate_panel(law, &panel)?)
        })
    }

    /// The running integral from the first point up to every point.
    ///
    /// # Errors
    /// * If a closed form is undefined on one of the panels
    pub fn cumulative_integral(&self) -> Result<Vec<T>, DomainError> {
        let mut sum = T::zero();
        let mut out = Vec::with_capacity(self.x.len());
        out.push(sum);
        for (law, panel) in self.panels() {
            sum = sum + integrate_panel(law, &panel)?;
            out.push(sum);
        }
        Ok(out)
    }

    /// The integral of x times the table over the whole table.
    ///
    /// # Errors
    /// * If a closed form is undefined on one of the panels
    pub fn mean(&self) -> Result<T, DomainError> {
        self.panels().try_fold(T::zero(), |sum, (law, panel)| {
            Ok(sum + first_moment_panel(law, &panel)?)
        })
    }

    /// The integral of (x - mean)^2 times the table over the whole table.
    ///
    /// # Errors
    /// * If the table has a region that is neither histogram nor lin-lin
    pub fn variance(&self, mean: T) -> Result<T, DomainError> {
        self.panels().try_fold(T::zero(), |sum, (law, p)| {
            Ok(sum + variance(law, mean, p.x_left, p.x_right, p.y_left, p.y_right)?)
        })
    }

    /// A lin-lin table that reproduces this one within the convergence
    /// criterion. Histogram regions are reproduced exactly by a jump at every
    /// interior point, lin-lin regions are copied, and the other laws are
    /// bisected panel by panel (at the geometric midpoint for laws on a
    /// logarithmic x axis). A linearised table is returned unchanged.
    ///
    /// # Errors
    /// * If a law cannot be evaluated on one of the panels
    pub fn linearise<C>(&self, convergence: &C) -> Result<Self, DomainError>
    where
        C: Convergence<T> + ?Sized,
    {
        if self.linearised {
            return Ok(self.clone());
        }

        let mut x = Vec::with_capacity(self.x.len());
        let mut y = Vec::with_capacity(self.y.len());
        let mut push = |xv: T, yv: T| {
            if x.last() != Some(&xv) || y.last() != Some(&yv) {
                x.push(xv);
                y.push(yv);
            }
        };

        let mut lineariser = Lineariser::new();
        for (law, range) in self.regions() {
            let (xs, ys) = (&self.x[range.clone()], &self.y[range]);
            match law {
                InterpolationType::Histogram => {
                    for k in 0..xs.len() - 1 {
                        push(xs[k], ys[k]);
                        push(xs[k + 1], ys[k]);
                    }
                }
                InterpolationType::LinearLinear => {
                    for k in 0..xs.len() {
                        push(xs[k], ys[k]);
                    }
                }
                _ => {
                    lineariser.clear();
                    for k in 0..xs.len() - 1 {
                        let (xl, xr, yl, yr) = (xs[k], xs[k + 1], ys[k], ys[k + 1]);
                        let f = |v: T| law.interpolate(v, xl, xr, yl, yr);
                        let split: &dyn Split<T> = if law.is_logarithmic_x() {
                            &LogarithmicMidpointSplit
                        } else {
                            &MidpointSplit
                        };
                        lineariser.panel(xl, xr, yl, yr, f, convergence, split)?;
                    }
                    for (&xv, &yv) in lineariser.x().iter().zip(lineariser.y()) {
                        push(xv, yv);
                    }
                }
            }
        }

        Ok(Self::linear(x, y))
    }

    /// This table expressed on the union grid of `unioniser`, with its laws
    /// carried over and zero lin-lin regions where the union grid extends
    /// beyond this table.
    ///
    /// # Errors
    /// * If this table's grid is not compatible with the union grid
    /// * If a law cannot be evaluated at one of the new grid points
    pub fn rebase(&self, unioniser: &Unioniser<'_, T>) -> Result<Self, Error> {
        if !unioniser.is_compatible(&self.x) {
            return Err(ValidationError::IncompatibleGrid.into());
        }
        let y =
            unioniser.evaluate_regions(&self.x, &self.y, &self.boundaries, &self.interpolants)?;
        let (boundaries, interpolants) = unioniser.update_boundaries_and_interpolants(
            &self.x,
            &self.boundaries,
            &self.interpolants,
        );
        Ok(Self::with_regions(
            unioniser.grid().to_vec(),
            y,
            boundaries,
            interpolants,
        )?)
    }
}

impl<T: Float> Function1D<T> for InterpolationTable<T> {
    /// The tabulated value at a grid point (the second value at a jump), the
    /// law of the enclosing panel between grid points, and zero outside the
    /// table.
    #[inline]
    fn evaluate(&self, x: T) -> Result<T, DomainError> {
        let n = self.x.len();
        let i = self.x.partition_point(|&v| v <= x);

        if i == 0 {
            return Ok(T::zero());
        }
        if i == n {
            return Ok(if x == self.x[n - 1] {
                self.y[n - 1]
            } else {
                T::zero()
            });
        }
        if self.x[i - 1] == x {
            return Ok(self.y[i - 1]);
        }

        self.panel_interpolant(i - 1)
            .interpolate(x, self.x[i - 1], self.x[i], self.y[i - 1], self.y[i])
    }

    fn domain(&self) -> Domain<T> {
        Domain::interval(self.x[0], self.x[self.x.len() - 1])
    }
}
