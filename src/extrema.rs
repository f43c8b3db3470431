use crate::evaluate::evaluate_segment;
use crate::locate::Segment;

/// Classification of a local extremum by the sign of the second derivative
/// of the interpolant at the stationary point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKind {
    Minimum,
    Maximum,
}

/// A local extremum of one spline column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    /// Abscissa of the stationary point.
    pub x: f64,
    /// Spline value at the stationary point.
    pub value: f64,
    pub kind: ExtremumKind,
}

/// Scans every interval for stationary points of the cubic piece.
///
/// In the normalized coordinate s the first derivative is the quadratic
///   3*(hu-hl)*s^2 + 6*hl*s + (y[u]-y[l])/d - 2*hl - hu
/// (hl, hu as in the evaluation formula). Roots are kept for s in [0, 1) on
/// every interval but the last, [0, 1] on the last, so a stationary point on
/// a shared interior knot is counted once. Stationary points with vanishing
/// second derivative are saddle points and are skipped.
pub(crate) fn find_in_column(abscissa: &[f64], values: &[f64], curvature: &[f64]) -> Vec<Extremum> {
    let number_of_intervals = abscissa.len() - 1;
    let mut extrema = Vec::new();

    for interval in 0..number_of_intervals {
        let width = abscissa[interval + 1] - abscissa[interval];
        let h_lower = curvature[interval] * width / 6.0;
        let h_upper = curvature[interval + 1] * width / 6.0;

        let a = 3.0 * (h_upper - h_lower);
        let b = 6.0 * h_lower;
        let c = (values[interval + 1] - values[interval]) / width - 2.0 * h_lower - h_upper;

        let is_last = interval == number_of_intervals - 1;
        let mut roots = stationary_roots(a, b, c);
        roots.sort_by(f64::total_cmp);

        for s in roots {
            let in_range = if is_last {
                (0.0..=1.0).contains(&s)
            } else {
                (0.0..1.0).contains(&s)
            };
            if !in_range {
                continue;
            }

            let segment = Segment {
                lower: interval,
                upper: interval + 1,
                width,
                s,
                t: 1.0 - s,
            };
            let evaluation = evaluate_segment(&segment, values, curvature);

            let kind = if evaluation.second_derivative > 0.0 {
                ExtremumKind::Minimum
            } else if evaluation.second_derivative < 0.0 {
                ExtremumKind::Maximum
            } else {
                continue;
            };

            extrema.push(Extremum {
                x: abscissa[interval] + width * s,
                value: evaluation.value,
                kind,
            });
        }
    }

    extrema
}

fn stationary_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a == 0.0 {
        // equal scaled curvatures, the derivative is linear in s
        if b == 0.0 {
            return Vec::new();
        }
        return vec![-c / b];
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        Vec::new()
    } else if discriminant == 0.0 {
        vec![-b / (2.0 * a)]
    } else {
        let root = discriminant.sqrt();
        vec![(-b + root) / (2.0 * a), (-b - root) / (2.0 * a)]
    }
}
