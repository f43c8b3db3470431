use crate::boundary::BoundaryCondition;
use crate::builder::set_up_column;
use crate::error::SplineError;
use crate::interpolant::Interpolant;
use crate::solver::{LuSolver, TridiagonalSolver};

/// Spline table owning its storage: one shared abscissa and m independent
/// value columns, each interpolated by its own C2 cubic spline.
///
/// Lifecycle: construct from raw arrays (validated, curvature zeroed), call
/// [SplineTable::set_up] once per column, then evaluate, find extrema or
/// integrate through the [Interpolant] trait.
///
/// A descending abscissa is accepted and reversed together with every value
/// column during construction.
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
/// assert_approx_eq!(1.0, table.evaluate(0, 1.0).unwrap().value, 1e-9);
/// assert_approx_eq!(1.5, table.integrate_full(0).unwrap(), 1e-9);
/// ```
pub struct SplineTable {
    abscissa: Vec<f64>,
    values: Vec<Vec<f64>>,
    curvature: Vec<Vec<f64>>,
}

impl SplineTable {
    /// Creates a table from an abscissa and its value columns.
    ///
    /// The abscissa must be strictly monotonic (either direction) with at
    /// least 2 knots, and every column must match its length. Curvature
    /// storage is allocated and zeroed; each column interpolates linearly
    /// until it is set up.
    ///
    /// # Errors
    /// [SplineError::InvalidArgument] on shape mismatch or a non-monotonic
    /// abscissa, [SplineError::OutOfMemory] if curvature allocation fails.
    pub fn new(abscissa: Vec<f64>, values: Vec<Vec<f64>>) -> Result<Self, SplineError> {
        let size = abscissa.len();
        if size < 2 {
            return Err(SplineError::InvalidArgument(
                "spline table must have at least 2 knots".to_string(),
            ));
        }
        if values.is_empty() {
            return Err(SplineError::InvalidArgument(
                "spline table must have at least one value column".to_string(),
            ));
        }
        for (index, column) in values.iter().enumerate() {
            if column.len() != size {
                return Err(SplineError::InvalidArgument(format!(
                    "value column {} has length {}, expected {}",
                    index,
                    column.len(),
                    size
                )));
            }
        }

        let mut abscissa = abscissa;
        let mut values = values;
        check_xyh(&mut abscissa, &mut values)?;

        let mut curvature = Vec::with_capacity(values.len());
        for _ in 0..values.len() {
            curvature.push(zeroed_column(size)?);
        }

        Ok(SplineTable { abscissa, values, curvature })
    }

    /// Computes the curvature column for one spline using the default
    /// LU-backed tridiagonal solver.
    ///
    /// # Errors
    /// [SplineError::InvalidArgument] if the column index is out of range,
    /// [SplineError::Algorithm] if the solve fails.
    pub fn set_up(
        &mut self,
        spline: usize,
        lower: BoundaryCondition,
        upper: BoundaryCondition,
    ) -> Result<(), SplineError> {
        self.set_up_with(spline, lower, upper, &LuSolver)
    }

    /// Same as [SplineTable::set_up] with an explicit solver strategy.
    pub fn set_up_with(
        &mut self,
        spline: usize,
        lower: BoundaryCondition,
        upper: BoundaryCondition,
        solver: &dyn TridiagonalSolver,
    ) -> Result<(), SplineError> {
        self.check_column(spline)?;
        set_up_column(
            &self.abscissa,
            &self.values[spline],
            &mut self.curvature[spline],
            lower,
            upper,
            solver,
        )
    }
}

impl Interpolant for SplineTable {
    fn abscissa(&self) -> &[f64] {
        &self.abscissa
    }

    fn columns(&self) -> usize {
        self.values.len()
    }

    fn values(&self, spline: usize) -> &[f64] {
        &self.values[spline]
    }

    fn curvature(&self, spline: usize) -> &[f64] {
        &self.curvature[spline]
    }
}

/// Spline table borrowing caller-supplied buffers.
///
/// Behaves like [SplineTable] but never allocates, copies or frees: the
/// abscissa, value columns and curvature columns all live in the caller's
/// storage and outlive the view. The curvature buffers are zeroed at
/// construction and overwritten by setup.
///
/// Note that when the abscissa is supplied in descending order, the reversal
/// performed during validation mutates the caller's buffers in place; the
/// reordered data remains visible after the view is dropped.
pub struct SplineTableView<'a> {
    abscissa: &'a mut [f64],
    values: Vec<&'a mut [f64]>,
    curvature: Vec<&'a mut [f64]>,
}

impl<'a> SplineTableView<'a> {
    /// Creates a view over caller-owned buffers, one slice per value and
    /// curvature column. Shape requirements match [SplineTable::new], plus
    /// the curvature columns must mirror the value columns exactly.
    pub fn new(
        abscissa: &'a mut [f64],
        values: Vec<&'a mut [f64]>,
        curvature: Vec<&'a mut [f64]>,
    ) -> Result<Self, SplineError> {
        let size = abscissa.len();
        if size < 2 {
            return Err(SplineError::InvalidArgument(
                "spline table must have at least 2 knots".to_string(),
            ));
        }
        if values.is_empty() {
            return Err(SplineError::InvalidArgument(
                "spline table must have at least one value column".to_string(),
            ));
        }
        if curvature.len() != values.len() {
            return Err(SplineError::InvalidArgument(format!(
                "{} curvature columns for {} value columns",
                curvature.len(),
                values.len()
            )));
        }
        for (index, column) in values.iter().enumerate() {
            if column.len() != size {
                return Err(SplineError::InvalidArgument(format!(
                    "value column {} has length {}, expected {}",
                    index,
                    column.len(),
                    size
                )));
            }
        }
        for (index, column) in curvature.iter().enumerate() {
            if column.len() != size {
                return Err(SplineError::InvalidArgument(format!(
                    "curvature column {} has length {}, expected {}",
                    index,
                    column.len(),
                    size
                )));
            }
        }

        let mut values = values;
        let mut curvature = curvature;
        check_xyh(abscissa, &mut values)?;
        for column in curvature.iter_mut() {
            column.fill(0.0);
        }

        Ok(SplineTableView { abscissa, values, curvature })
    }

    /// Computes the curvature column for one spline using the default
    /// LU-backed tridiagonal solver. The result is written into the
    /// caller-supplied curvature buffer.
    pub fn set_up(
        &mut self,
        spline: usize,
        lower: BoundaryCondition,
        upper: BoundaryCondition,
    ) -> Result<(), SplineError> {
        self.set_up_with(spline, lower, upper, &LuSolver)
    }

    /// Same as [SplineTableView::set_up] with an explicit solver strategy.
    pub fn set_up_with(
        &mut self,
        spline: usize,
        lower: BoundaryCondition,
        upper: BoundaryCondition,
        solver: &dyn TridiagonalSolver,
    ) -> Result<(), SplineError> {
        self.check_column(spline)?;
        set_up_column(
            self.abscissa,
            self.values[spline],
            self.curvature[spline],
            lower,
            upper,
            solver,
        )
    }
}

impl Interpolant for SplineTableView<'_> {
    fn abscissa(&self) -> &[f64] {
        self.abscissa
    }

    fn columns(&self) -> usize {
        self.values.len()
    }

    fn values(&self, spline: usize) -> &[f64] {
        self.values[spline]
    }

    fn curvature(&self, spline: usize) -> &[f64] {
        self.curvature[spline]
    }
}

/// Reverses a descending abscissa together with every value column, then
/// requires strict monotonic growth.
fn check_xyh<C: AsMut<[f64]>>(abscissa: &mut [f64], values: &mut [C]) -> Result<(), SplineError> {
    if abscissa[0] > abscissa[abscissa.len() - 1] {
        abscissa.reverse();
        for column in values.iter_mut() {
            column.as_mut().reverse();
        }
    }

    for pair in abscissa.windows(2) {
        if pair[1] <= pair[0] {
            return Err(SplineError::InvalidArgument(
                "abscissa values must be strictly increasing".to_string(),
            ));
        }
    }
    Ok(())
}

fn zeroed_column(size: usize) -> Result<Vec<f64>, SplineError> {
    let mut column = Vec::new();
    column
        .try_reserve_exact(size)
        .map_err(|_| SplineError::OutOfMemory(size))?;
    column.resize(size, 0.0);
    Ok(column)
}
