/// Bracketing interval of a query point together with its normalized
/// interpolation factors. `s` grows from 0 at the lower knot to 1 at the
/// upper knot, `t = 1 - s` runs the other way.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segment {
    pub lower: usize,
    pub upper: usize,
    pub width: f64,
    pub s: f64,
    pub t: f64,
}

/// Fast-path bracketing of `at` within the abscissa, no validation.
/// Callers must ensure `abscissa[0] <= at <= abscissa[n-1]`.
pub(crate) fn locate(abscissa: &[f64], at: f64) -> Segment {
    let size = abscissa.len();
    let mut min = 0;
    let mut max = size - 1;

    while max - min > 1 {
        let mid = (min + max) / 2;
        if at < abscissa[mid] {
            max = mid;
        } else {
            min = mid;
        }
    }

    segment_at(abscissa, min, at)
}

pub(crate) fn segment_at(abscissa: &[f64], interval: usize, at: f64) -> Segment {
    let width = abscissa[interval + 1] - abscissa[interval];
    Segment {
        lower: interval,
        upper: interval + 1,
        width,
        s: (at - abscissa[interval]) / width,
        t: (abscissa[interval + 1] - at) / width,
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn brackets_interior_point() {
        let abscissa = vec![0.0, 1.0, 2.5, 4.0];

        let segment = locate(&abscissa, 1.75);

        assert_eq!(1, segment.lower);
        assert_eq!(2, segment.upper);
        assert_approx_eq!(segment.width, 1.5, 1e-12);
        assert_approx_eq!(segment.s, 0.5, 1e-12);
        assert_approx_eq!(segment.t, 0.5, 1e-12);
    }

    #[test]
    fn domain_ends_map_to_first_and_last_interval() {
        let abscissa = vec![0.0, 1.0, 2.5, 4.0];

        let segment = locate(&abscissa, 0.0);
        assert_eq!(0, segment.lower);
        assert_approx_eq!(segment.s, 0.0, 1e-12);

        let segment = locate(&abscissa, 4.0);
        assert_eq!(2, segment.lower);
        assert_approx_eq!(segment.s, 1.0, 1e-12);
    }

    #[test]
    fn query_on_interior_knot_starts_its_right_interval() {
        let abscissa = vec![0.0, 1.0, 2.5, 4.0];

        let segment = locate(&abscissa, 2.5);

        assert_eq!(2, segment.lower);
        assert_approx_eq!(segment.s, 0.0, 1e-12);
        assert_approx_eq!(segment.t, 1.0, 1e-12);
    }
}
