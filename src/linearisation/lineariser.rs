//! Adaptive bisection of a function into a lin-lin table.

use num_traits::Float;

use super::{Convergence, Split};

/// Produces lin-lin tabulated data for a function by bisecting every panel
/// of an initial grid until linear interpolation on each panel is accepted
/// by a convergence criterion.
///
/// Bisection runs on an explicit work stack, so the depth is bounded by the
/// floating-point resolution of the panel and not by the call stack. The
/// buffers are reused between calls.
///
/// ```rust
/// use tabulated::linearisation::{Lineariser, MidpointSplit, ToleranceConvergence};
///
/// let mut lineariser = Lineariser::new();
/// let convergence = ToleranceConvergence::new(1e-3, 1e-10);
/// lineariser
///     .linearise(&[1.0, 2.0], |x: f64| Ok::<_, ()>(x * x), &convergence, &MidpointSplit)
///     .unwrap();
///
/// assert_eq!(lineariser.x().len(), 17);
/// assert_eq!(lineariser.y()[16], 4.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lineariser<T> {
    x: Vec<T>,
    y: Vec<T>,
    xbuffer: Vec<T>,
    ybuffer: Vec<T>,
}

impl<T: Float> Lineariser<T> {
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            xbuffer: Vec::new(),
            ybuffer: Vec::new(),
        }
    }

    /// The linearised x values so far
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// The linearised y values so far
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// Discard the current result
    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
    }

    /// Hand over the linearised data, leaving the lineariser empty
    pub fn finish(&mut self) -> (Vec<T>, Vec<T>) {
        (std::mem::take(&mut self.x), std::mem::take(&mut self.y))
    }

    /// Linearise `function` on the sorted initial `grid`, replacing the
    /// current result. Every grid point is kept in the result.
    ///
    /// # Errors
    /// * If any evaluation of the function fails
    pub fn linearise<F, E, C, S>(
        &mut self,
        grid: &[T],
        mut function: F,
        convergence: &C,
        split: &S,
    ) -> Result<(), E>
    where
        F: FnMut(T) -> Result<T, E>,
        C: Convergence<T> + ?Sized,
        S: Split<T> + ?Sized,
    {
        self.clear();

        let Some((&first, rest)) = grid.split_first() else {
            return Ok(());
        };
        let (mut x_left, mut y_left) = (first, function(first)?);
        self.x.push(x_left);
        self.y.push(y_left);

        for &x_right in rest {
            let y_right = function(x_right)?;
            self.panel(
                x_left,
                x_right,
                y_left,
                y_right,
                &mut function,
                convergence,
                split,
            )?;
            (x_left, y_left) = (x_right, y_right);
        }

        Ok(())
    }

    /// Linearise a single panel, appending its points to the current result.
    /// The left point is only appended when the result is empty; otherwise it
    /// is assumed to be the last point already in the result.
    ///
    /// # Errors
    /// * If any evaluation of the function fails
    #[allow(clippy::too_many_arguments)]
    pub fn panel<F, E, C, S>(
        &mut self,
        x_left: T,
        x_right: T,
        y_left: T,
        y_right: T,
        mut function: F,
        convergence: &C,
        split: &S,
    ) -> Result<(), E>
    where
        F: FnMut(T) -> Result<T, E>,
        C: Convergence<T> + ?Sized,
        S: Split<T> + ?Sized,
    {
        if self.x.is_empty() {
            self.x.push(x_left);
            self.y.push(y_left);
        }

        self.xbuffer.clear();
        self.ybuffer.clear();
        self.xbuffer.push(x_right);
        self.ybuffer.push(y_right);

        let (mut xl, mut yl) = (x_left, y_left);
        while let (Some(&xr), Some(&yr)) = (self.xbuffer.last(), self.ybuffer.last()) {
            let xm = split.split(xl, xr, yl, yr);

            let accepted = if xl < xm && xm < xr {
                let ym = function(xm)?;
                let trial = yl + (yr - yl) * (xm - xl) / (xr - xl);
                if convergence.converged(trial, ym, xl, xr, yl, yr) {
                    true
                } else {
                    self.xbuffer.push(xm);
                    self.ybuffer.push(ym);
                    false
                }
            } else {
                // The panel cannot be resolved any further
                true
            };

            if accepted {
                self.xbuffer.pop();
                self.ybuffer.pop();
                self.x.push(xr);
                self.y.push(yr);
                (xl, yl) = (xr, yr);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::linearisation::{LogarithmicMidpointSplit, MidpointSplit, ToleranceConvergence};
    use crate::utils::linspace;

    #[test]
    fn test_quadratic() {
        let mut lineariser = Lineariser::new();
        let convergence = ToleranceConvergence::new(1e-3, 1e-10);
        lineariser
            .linearise(
                &[1.0, 2.0],
                |x: f64| Ok::<_, ()>(x * x),
                &convergence,
                &MidpointSplit,
            )
            .unwrap();

        // The curvature is uniform, so every panel converges at the same depth
        let expected = linspace(1.0, 2.0, 17);
        assert_eq!(lineariser.x().len(), expected.len());
        for i in 0..expected.len() {
            assert_eq!(lineariser.x()[i], expected[i]);
            assert_eq!(lineariser.y()[i], expected[i] * expected[i]);
        }
    }

    #[test]
    fn test_keeps_grid_and_accuracy() {
        let f = |x: f64| (x / 3.0).sin() + 2.0;
        let grid = [0.0, 1.5, 2.0, 7.0];
        let convergence = ToleranceConvergence::new(1e-4, 1e-10);

        let mut lineariser = Lineariser::new();
        lineariser
            .linearise(&grid, |x| Ok::<_, ()>(f(x)), &convergence, &MidpointSplit)
            .unwrap();
        let (x, y) = lineariser.finish();
        assert!(lineariser.x().is_empty());

        for g in grid {
            assert!(x.contains(&g));
        }
        assert!(x.windows(2).all(|w| w[0] < w[1]));

        // Lin-lin interpolation between the points is accurate
        for i in 0..x.len() - 1 {
            let xm = 0.5 * (x[i] + x[i + 1]);
            let trial = 0.5 * (y[i] + y[i + 1]);
            assert!((trial - f(xm)).abs() < 1e-4 * f(xm).abs() * 1.01);
        }
    }

    #[test]
    fn test_tolerance_ordering() {
        let f = |x: f64| x.exp();
        let mut lineariser = Lineariser::new();
        let mut sizes = Vec::new();
        for tolerance in [1e-2, 1e-3, 1e-4, 1e-5] {
            lineariser
                .linearise(
                    &[0.0, 3.0],
                    |x| Ok::<_, ()>(f(x)),
                    &ToleranceConvergence::new(tolerance, 1e-12),
                    &MidpointSplit,
                )
                .unwrap();
            sizes.push(lineariser.x().len());
        }
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_logarithmic_split() {
        // A power law is resolved in the log domain
        let f = |x: f64| 1.0 / x;
        let mut lineariser = Lineariser::new();
        lineariser
            .linearise(
                &[1.0, 1000.0],
                |x| Ok::<_, ()>(f(x)),
                &ToleranceConvergence::new(1e-3, 1e-12),
                &LogarithmicMidpointSplit,
            )
            .unwrap();
        let x = lineariser.x();
        assert_eq!(x[0], 1.0);
        assert_eq!(x[x.len() - 1], 1000.0);
        assert!(x.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_unresolvable_panel() {
        // A split that never lands strictly inside accepts the panel as is
        let split = |xl: f64, _: f64, _: f64, _: f64| xl;
        let mut lineariser = Lineariser::new();
        lineariser
            .linearise(
                &[0.0, 1.0, 2.0],
                |x: f64| Ok::<_, ()>(x * x * x),
                &ToleranceConvergence::default(),
                &split,
            )
            .unwrap();
        assert_eq!(lineariser.x(), &[0.0, 1.0, 2.0]);
        assert_eq!(lineariser.y(), &[0.0, 1.0, 8.0]);
    }

    #[test]
    fn test_error_propagation() {
        let mut lineariser = Lineariser::new();
        let result = lineariser.linearise(
            &[0.0, 2.0],
            |x: f64| if x > 0.7 && x < 1.5 { Err("bad") } else { Ok(x * x) },
            &ToleranceConvergence::default(),
            &MidpointSplit,
        );
        assert_eq!(result, Err("bad"));
    }

    #[test]
    fn test_empty_grid() {
        let mut lineariser = Lineariser::<f64>::new();
        lineariser
            .linearise(&[], |x| Ok::<_, ()>(x), &ToleranceConvergence::default(), &MidpointSplit)
            .unwrap();
        assert!(lineariser.x().is_empty());
    }
}
