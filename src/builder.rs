use crate::boundary::BoundaryCondition;
use crate::error::SplineError;
use crate::solver::TridiagonalSolver;

/// Assembles and solves the tridiagonal curvature system for one column.
///
/// Smoothness of the first derivative across each interior knot i gives
///   dl/6 * c[i-1] + (dl+du)/3 * c[i] + du/6 * c[i+1]
///     = (y[i+1]-y[i])/du + (y[i-1]-y[i])/dl
/// with dl = x[i]-x[i-1] and du = x[i+1]-x[i]; the boundary conditions fill
/// the first and last row. The solution vector is written into `curvature`.
pub(crate) fn set_up_column(
    abscissa: &[f64],
    values: &[f64],
    curvature: &mut [f64],
    lower: BoundaryCondition,
    upper: BoundaryCondition,
    solver: &dyn TridiagonalSolver,
) -> Result<(), SplineError> {
    let size = abscissa.len();

    let mut sub = vec![0.0; size - 1];
    let mut diag = vec![0.0; size];
    let mut sup = vec![0.0; size - 1];
    let mut rhs = vec![0.0; size];

    for i in 1..size - 1 {
        let dl = abscissa[i] - abscissa[i - 1];
        let du = abscissa[i + 1] - abscissa[i];

        sub[i - 1] = dl / 6.0;
        diag[i] = (dl + du) / 3.0;
        sup[i] = du / 6.0;
        rhs[i] = (values[i + 1] - values[i]) / du + (values[i - 1] - values[i]) / dl;
    }

    match lower {
        BoundaryCondition::Clamped(derivative) => {
            let dl = abscissa[1] - abscissa[0];
            diag[0] = dl / 3.0;
            sup[0] = dl / 6.0;
            rhs[0] = (values[1] - values[0]) / dl - derivative;
        }
        BoundaryCondition::SecondDerivative(derivative) => {
            diag[0] = 1.0;
            sup[0] = 0.0;
            rhs[0] = derivative;
        }
    }

    match upper {
        BoundaryCondition::Clamped(derivative) => {
            let du = abscissa[size - 1] - abscissa[size - 2];
            sub[size - 2] = du / 6.0;
            diag[size - 1] = du / 3.0;
            rhs[size - 1] = derivative - (values[size - 1] - values[size - 2]) / du;
        }
        BoundaryCondition::SecondDerivative(derivative) => {
            sub[size - 2] = 0.0;
            diag[size - 1] = 1.0;
            rhs[size - 1] = derivative;
        }
    }

    solver.solve(&sub, &diag, &sup, &mut rhs)?;
    curvature.copy_from_slice(&rhs);
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use crate::solver::LuSolver;

    use super::*;

    #[test]
    fn natural_boundary_pins_endpoint_curvature_to_zero() {
        let eps = 1e-12;
        let abscissa = vec![0.0, 1.0, 2.0, 3.0];
        let values = vec![0.0, 1.0, 0.0, 1.0];
        let mut curvature = vec![0.0; 4];

        set_up_column(
            &abscissa,
            &values,
            &mut curvature,
            BoundaryCondition::natural(),
            BoundaryCondition::natural(),
            &LuSolver,
        )
        .unwrap();

        assert_approx_eq!(curvature[0], 0.0, eps);
        assert_approx_eq!(curvature[1], -4.0, eps);
        assert_approx_eq!(curvature[2], 4.0, eps);
        assert_approx_eq!(curvature[3], 0.0, eps);
    }

    #[test]
    fn clamped_spline_over_parabola_recovers_constant_curvature() {
        // knots lay on f(x) = x^2, clamped to its exact slopes; the spline
        // must then be x^2 itself, so every knot curvature is 2
        let eps = 1e-9;
        let abscissa = vec![0.0, 0.9, 1.1, 1.7, 2.0];
        let values: Vec<f64> = abscissa.iter().map(|x| x * x).collect();
        let mut curvature = vec![0.0; 5];

        set_up_column(
            &abscissa,
            &values,
            &mut curvature,
            BoundaryCondition::Clamped(0.0),
            BoundaryCondition::Clamped(4.0),
            &LuSolver,
        )
        .unwrap();

        for c in curvature {
            assert_approx_eq!(c, 2.0, eps);
        }
    }

    #[test]
    fn specified_second_derivatives_are_taken_verbatim() {
        let eps = 1e-12;
        let abscissa = vec![0.0, 1.0];
        let values = vec![2.0, -1.0];
        let mut curvature = vec![0.0; 2];

        set_up_column(
            &abscissa,
            &values,
            &mut curvature,
            BoundaryCondition::SecondDerivative(3.5),
            BoundaryCondition::SecondDerivative(-0.5),
            &LuSolver,
        )
        .unwrap();

        assert_approx_eq!(curvature[0], 3.5, eps);
        assert_approx_eq!(curvature[1], -0.5, eps);
    }

    #[test]
    fn solver_failure_is_propagated() {
        struct FailingSolver;

        impl TridiagonalSolver for FailingSolver {
            fn solve(
                &self,
                _sub: &[f64],
                _diag: &[f64],
                _sup: &[f64],
                _rhs: &mut [f64],
            ) -> Result<(), SplineError> {
                Err(SplineError::Algorithm("stub failure".to_string()))
            }
        }

        let abscissa = vec![0.0, 1.0, 2.0];
        let values = vec![0.0, 1.0, 0.0];
        let mut curvature = vec![0.0; 3];

        let result = set_up_column(
            &abscissa,
            &values,
            &mut curvature,
            BoundaryCondition::natural(),
            BoundaryCondition::natural(),
            &FailingSolver,
        );

        assert!(matches!(result, Err(SplineError::Algorithm(_))));
    }
}
