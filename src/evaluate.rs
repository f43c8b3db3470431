use crate::locate::Segment;

/// Spline value and derivatives at a single query point, as returned by
/// [Interpolant::evaluate](crate::Interpolant::evaluate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Interpolated function value.
    pub value: f64,
    /// First derivative of the interpolant.
    pub first_derivative: f64,
    /// Second derivative of the interpolant.
    pub second_derivative: f64,
}

/// Symmetric cubic formula over one bracketing segment.
///
/// With `hl = curvature[l]*d/6` and `hu = curvature[u]*d/6` the piece is
///   f = t*y[l] + s*y[u] + d*(t*(t^2-1)*hl + s*(s^2-1)*hu)
/// which reproduces the knot values at s = 0 and s = 1 regardless of the
/// curvatures, and whose second derivative interpolates the curvatures
/// linearly across the interval.
pub(crate) fn evaluate_segment(segment: &Segment, values: &[f64], curvature: &[f64]) -> Evaluation {
    let Segment { lower, upper, width, s, t } = *segment;

    let y_lower = values[lower];
    let y_upper = values[upper];
    let h_lower = curvature[lower] * width / 6.0;
    let h_upper = curvature[upper] * width / 6.0;

    let value = t * y_lower
        + s * y_upper
        + width * (t * (t * t - 1.0) * h_lower + s * (s * s - 1.0) * h_upper);
    let first_derivative = (y_upper - y_lower) / width
        - (3.0 * t * t - 1.0) * h_lower
        + (3.0 * s * s - 1.0) * h_upper;
    let second_derivative = 6.0 * (t * h_lower + s * h_upper) / width;

    Evaluation {
        value,
        first_derivative,
        second_derivative,
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use crate::locate::segment_at;

    use super::*;

    #[test]
    fn knot_values_are_reproduced_for_any_curvature() {
        let eps = 1e-12;
        let abscissa = vec![1.0, 3.0];
        let values = vec![-2.0, 5.0];
        let curvature = vec![4.5, -1.25];

        let at_lower = evaluate_segment(&segment_at(&abscissa, 0, 1.0), &values, &curvature);
        let at_upper = evaluate_segment(&segment_at(&abscissa, 0, 3.0), &values, &curvature);

        assert_approx_eq!(at_lower.value, -2.0, eps);
        assert_approx_eq!(at_upper.value, 5.0, eps);
    }

    #[test]
    fn second_derivative_interpolates_curvature_linearly() {
        let eps = 1e-12;
        let abscissa = vec![0.0, 2.0];
        let values = vec![1.0, 1.0];
        let curvature = vec![6.0, -6.0];

        let at_lower = evaluate_segment(&segment_at(&abscissa, 0, 0.0), &values, &curvature);
        let at_middle = evaluate_segment(&segment_at(&abscissa, 0, 1.0), &values, &curvature);
        let at_upper = evaluate_segment(&segment_at(&abscissa, 0, 2.0), &values, &curvature);

        assert_approx_eq!(at_lower.second_derivative, 6.0, eps);
        assert_approx_eq!(at_middle.second_derivative, 0.0, eps);
        assert_approx_eq!(at_upper.second_derivative, -6.0, eps);
    }

    #[test]
    fn zero_curvature_degenerates_to_linear_interpolation() {
        let eps = 1e-12;
        let abscissa = vec![0.0, 4.0];
        let values = vec![1.0, 3.0];
        let curvature = vec![0.0, 0.0];

        let evaluation = evaluate_segment(&segment_at(&abscissa, 0, 1.0), &values, &curvature);

        assert_approx_eq!(evaluation.value, 1.5, eps);
        assert_approx_eq!(evaluation.first_derivative, 0.5, eps);
        assert_approx_eq!(evaluation.second_derivative, 0.0, eps);
    }
}
