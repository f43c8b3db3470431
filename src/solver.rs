use nalgebra::{DMatrix, DVector};

use crate::error::SplineError;

/// Strategy interface for the tridiagonal solve performed during spline setup.
///
/// The system is given by its three diagonals: `sub` (below the main
/// diagonal, length n-1), `diag` (length n) and `sup` (above, length n-1).
/// On success `rhs` is overwritten with the solution vector.
///
/// The crate ships [LuSolver] as default backend; supplying a custom
/// implementation is mainly useful for testing and for callers that already
/// carry a specialized tridiagonal routine.
pub trait TridiagonalSolver {
    fn solve(
        &self,
        sub: &[f64],
        diag: &[f64],
        sup: &[f64],
        rhs: &mut [f64],
    ) -> Result<(), SplineError>;
}

/// Default solver backend, dense LU factorization from nalgebra.
///
/// Spline systems are small (one row per knot), so the dense factorization
/// is adequate despite ignoring the band structure.
pub struct LuSolver;

impl TridiagonalSolver for LuSolver {
    fn solve(
        &self,
        sub: &[f64],
        diag: &[f64],
        sup: &[f64],
        rhs: &mut [f64],
    ) -> Result<(), SplineError> {
        let n = diag.len();
        if sub.len() != n - 1 || sup.len() != n - 1 || rhs.len() != n {
            return Err(SplineError::InvalidArgument(
                "tridiagonal system diagonals have inconsistent lengths".to_string(),
            ));
        }

        let mut matrix = DMatrix::<f64>::zeros(n, n);
        for i in 0..n {
            matrix[(i, i)] = diag[i];
        }
        for i in 0..n - 1 {
            matrix[(i + 1, i)] = sub[i];
            matrix[(i, i + 1)] = sup[i];
        }

        let rhs_vector = DVector::<f64>::from_column_slice(rhs);
        match matrix.lu().solve(&rhs_vector) {
            Some(solution) => {
                rhs.copy_from_slice(solution.as_slice());
                Ok(())
            }
            None => Err(SplineError::Algorithm(
                "tridiagonal factorization failed".to_string(),
            )),
        }
    }
}
