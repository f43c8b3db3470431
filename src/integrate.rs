use crate::locate::{locate, Segment};

/// Definite integral of one spline column over `[a, b]`, both inside the
/// domain with `a <= b`; validation is done by the caller.
///
/// The integral is accumulated interval by interval from the closed-form
/// antiderivative of the cubic piece. The interval containing `a`
/// contributes from `a` to its upper knot, the interval containing `b` from
/// its lower knot to `b`, everything in between contributes in full.
pub(crate) fn integrate_column(abscissa: &[f64], values: &[f64], curvature: &[f64], a: f64, b: f64) -> f64 {
    let head = locate(abscissa, a);
    let tail = locate(abscissa, b);

    let mut total = -antiderivative(&head, values, curvature);

    for interval in head.lower..tail.lower {
        let full = Segment {
            lower: interval,
            upper: interval + 1,
            width: abscissa[interval + 1] - abscissa[interval],
            s: 1.0,
            t: 0.0,
        };
        total += antiderivative(&full, values, curvature);
    }

    total + antiderivative(&tail, values, curvature)
}

/// Antiderivative of the cubic piece at local position s, normalized so the
/// value at the lower knot (s = 0) is zero.
fn antiderivative(segment: &Segment, values: &[f64], curvature: &[f64]) -> f64 {
    let Segment { lower, upper, width, s, t } = *segment;

    let y_lower = values[lower];
    let y_upper = values[upper];
    let h_lower = curvature[lower] * width / 6.0;
    let h_upper = curvature[upper] * width / 6.0;

    let lower_shape = t * t / 2.0 - t * t * t * t / 4.0 - 0.25;
    let upper_shape = s * s * s * s / 4.0 - s * s / 2.0;

    width
        * (y_lower * (s - s * s / 2.0)
            + y_upper * s * s / 2.0
            + width * (h_lower * lower_shape + h_upper * upper_shape))
}
