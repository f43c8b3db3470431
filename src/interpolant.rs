use crate::error::SplineError;
use crate::evaluate::{evaluate_segment, Evaluation};
use crate::extrema::{find_in_column, Extremum};
use crate::integrate::integrate_column;
use crate::locate::locate;

/// Read-only spline operations, shared by [SplineTable](crate::SplineTable)
/// and [SplineTableView](crate::SplineTableView).
///
/// All operations require the column to have been set up; before setup the
/// curvature is zero and the spline degenerates to a piecewise linear
/// interpolant.
pub trait Interpolant {
    /// The shared abscissa, strictly increasing.
    fn abscissa(&self) -> &[f64];

    /// Number of value columns.
    fn columns(&self) -> usize;

    /// Knot values of one column. Panics if the index is out of range.
    fn values(&self, spline: usize) -> &[f64];

    /// Knot curvatures (second derivatives) of one column. Panics if the
    /// index is out of range.
    fn curvature(&self, spline: usize) -> &[f64];

    /// Evaluates one column at `x`, returning value, first and second
    /// derivative together.
    ///
    /// # Errors
    /// [SplineError::InvalidArgument] if the column index is out of range or
    /// `x` lies outside the table domain.
    ///
    /// # Example
    /// ```
    /// use assert_approx_eq::assert_approx_eq;
    /// use multispline::{BoundaryCondition, Interpolant, SplineTable};
    ///
    /// let mut table = SplineTable::new(
    ///     vec![0.0, 1.0, 2.0, 3.0],
    ///     vec![vec![0.0, 1.0, 0.0, 1.0]],
    /// ).unwrap();
    /// table.set_up(0, BoundaryCondition::natural(), BoundaryCondition::natural()).unwrap();
    ///
    /// let evaluation = table.evaluate(0, 0.5).unwrap();
    /// assert_approx_eq!(0.75, evaluation.value, 1e-9);
    /// assert!(table.evaluate(0, 3.5).is_err());
    /// ```
    fn evaluate(&self, spline: usize, x: f64) -> Result<Evaluation, SplineError> {
        self.check_column(spline)?;
        let abscissa = self.abscissa();
        if x < abscissa[0] || x > abscissa[abscissa.len() - 1] {
            return Err(SplineError::InvalidArgument("x is out of range".to_string()));
        }

        let segment = locate(abscissa, x);
        Ok(evaluate_segment(&segment, self.values(spline), self.curvature(spline)))
    }

    /// Finds all local extrema of one column over the full domain, ordered
    /// by position. Stationary points whose second derivative vanishes are
    /// not reported.
    ///
    /// # Errors
    /// [SplineError::InvalidArgument] if the column index is out of range.
    fn find_extrema(&self, spline: usize) -> Result<Vec<Extremum>, SplineError> {
        self.check_column(spline)?;
        Ok(find_in_column(
            self.abscissa(),
            self.values(spline),
            self.curvature(spline),
        ))
    }

    /// Exact definite integral of one column over `[a, b]`.
    ///
    /// # Errors
    /// [SplineError::InvalidArgument] if the column index is out of range,
    /// either bound lies outside the table domain, or `a > b`.
    fn integrate(&self, spline: usize, a: f64, b: f64) -> Result<f64, SplineError> {
        self.check_column(spline)?;
        let abscissa = self.abscissa();
        let (min_x, max_x) = (abscissa[0], abscissa[abscissa.len() - 1]);
        if a < min_x || a > max_x || b < min_x || b > max_x {
            return Err(SplineError::InvalidArgument(
                "integration bounds are out of range".to_string(),
            ));
        }
        if a > b {
            return Err(SplineError::InvalidArgument(
                "lower integration bound is greater than upper bound".to_string(),
            ));
        }

        Ok(integrate_column(abscissa, self.values(spline), self.curvature(spline), a, b))
    }

    /// Exact definite integral of one column over the full domain.
    fn integrate_full(&self, spline: usize) -> Result<f64, SplineError> {
        let abscissa = self.abscissa();
        self.integrate(spline, abscissa[0], abscissa[abscissa.len() - 1])
    }

    #[doc(hidden)]
    fn check_column(&self, spline: usize) -> Result<(), SplineError> {
        if spline >= self.columns() {
            return Err(SplineError::InvalidArgument(format!(
                "spline index {} is out of range, table has {} columns",
                spline,
                self.columns()
            )));
        }
        Ok(())
    }
}
