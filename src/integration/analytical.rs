//! Analytical integration of a table over a set of successive intervals,
//! e.g. to collapse a tabulated function onto a coarser group structure.
//!
//! ```rust
//! use tabulated::{AnalyticalIntegrator, InterpolationTable};
//!
//! let table = InterpolationTable::new(vec![1.0, 4.0], vec![4.0, 1.0]).unwrap();
//! let integrator = AnalyticalIntegrator::new(vec![0.0, 2.0, 4.0, 5.0]).unwrap();
//!
//! let groups = integrator.integrate(&table).unwrap();
//! assert_eq!(groups, vec![3.5, 4.0, 0.0]);
//! ```
use num_traits::Float;

use super::{first_moment_panel, integrate_panel, variance};
use crate::error::{DomainError, ValidationError};
use crate::interpolation::{InterpolationType, Panel};
use crate::table::InterpolationTable;

/// Integrates tables over the intervals `[g_0, g_1], [g_1, g_2], ...` defined
/// by a sorted set of unique integration boundaries.
///
/// Each table panel is clipped to every interval it overlaps and integrated
/// in closed form with its own interpolation law. Parts of an interval
/// outside the table contribute nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticalIntegrator<T> {
    boundaries: Vec<T>,
}

impl<T: Float> AnalyticalIntegrator<T> {
    /// Build an integrator from its integration boundaries.
    ///
    /// # Errors
    /// * If there are fewer than 2 boundaries
    /// * If the boundaries are not sorted and unique
    pub fn new(boundaries: Vec<T>) -> Result<Self, ValidationError> {
        if boundaries.len() < 2 {
            return Err(ValidationError::InsufficientIntervals(boundaries.len()));
        }
        if let Some(index) = (1..boundaries.len()).find(|&i| boundaries[i] <= boundaries[i - 1])
        {
            return Err(ValidationError::IntervalBoundaries { index });
        }

        Ok(Self { boundaries })
    }

    /// Build an integrator for the single interval `[a, b]`.
    pub fn from_limits(a: T, b: T) -> Result<Self, ValidationError> {
        Self::new(vec![a, b])
    }

    /// The integration boundaries
    pub fn boundaries(&self) -> &[T] {
        &self.boundaries
    }

    /// The number of integration intervals
    pub fn number_intervals(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Integral of the table over each interval.
    ///
    /// # Errors
    /// * If a closed form is undefined on one of the (clipped) panels
    pub fn integrate(&self, table: &InterpolationTable<T>) -> Result<Vec<T>, DomainError> {
        self.accumulate(table, integrate_panel)
    }

    /// Integral of the table over each interval; an alias of
    /// [`AnalyticalIntegrator::integrate`].
    pub fn zeroth_moment(&self, table: &InterpolationTable<T>) -> Result<Vec<T>, DomainError> {
        self.integrate(table)
    }

    /// Integral of x times the table over each interval.
    ///
    /// # Errors
    /// * If a closed form is undefined on one of the (clipped) panels
    pub fn first_moment(&self, table: &InterpolationTable<T>) -> Result<Vec<T>, DomainError> {
        self.accumulate(table, first_moment_panel)
    }

    /// Integral of x times the table over each interval; an alias of
    /// [`AnalyticalIntegrator::first_moment`].
    pub fn mean(&self, table: &InterpolationTable<T>) -> Result<Vec<T>, DomainError> {
        self.first_moment(table)
    }

    /// Integral of (x - mean)^2 times the table over each interval.
    ///
    /// # Errors
    /// * If the table has a region that is neither histogram nor lin-lin
    pub fn variance(
        &self,
        table: &InterpolationTable<T>,
        mean: T,
    ) -> Result<Vec<T>, DomainError> {
        self.accumulate(table, |law, p| {
            variance(law, mean, p.x_left, p.x_right, p.y_left, p.y_right)
        })
    }

    fn accumulate<F>(
        &self,
        table: &InterpolationTable<T>,
        integrator: F,
    ) -> Result<Vec<T>, DomainError>
    where
        F: Fn(InterpolationType, &Panel<T>) -> Result<T, DomainError>,
    {
        let g = &self.boundaries;
        let mut result = vec![T::zero(); self.number_intervals()];

        for (law, panel) in table.panels() {
            if panel.is_jump() {
                continue;
            }

            // First interval whose lower limit is at or below the panel start
            let mut k = g.partition_point(|&v| v <= panel.x_left).saturating_sub(1);
            while k + 1 < g.len() && g[k] < panel.x_right {
                let lower = g[k].max(panel.x_left);
                let upper = g[k + 1].min(panel.x_right);
                if lower < upper {
                    result[k] = result[k] + integrator(law, &panel.clip(lower, upper, law)?)?;
                }
                k += 1;
            }
        }

        Ok(result)
    }
}
