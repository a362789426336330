//! Piecewise-linear mapping from scroll progress to visual parameters.
//!
//! A [`Keyframes`] set maps the shared progress scalar to one visual
//! parameter (offset, opacity, scale, rotation). Several independent sets
//! may sample the same progress value to drive parameters in parallel.

/// Monotonic `(progress, value)` control points.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes {
    points: Vec<(f64, f64)>,
}

impl Keyframes {
    /// Control points must be sorted by progress.
    pub fn new<P: Into<Vec<(f64, f64)>>>(points: P) -> Self {
        let points = points.into();
        debug_assert!(
            points.windows(2).all(|pair| pair[0].0 <= pair[1].0),
            "keyframes must be sorted by progress"
        );
        Self { points }
    }

    /// Interpolated value at `progress`, clamped to the first/last control
    /// point outside the covered range.
    pub fn sample(&self, progress: f64) -> f64 {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return 0.0,
        };
        if progress <= first.0 {
            return first.1;
        }
        if progress >= last.0 {
            return last.1;
        }
        for pair in self.points.windows(2) {
            let (p0, v0) = pair[0];
            let (p1, v1) = pair[1];
            if progress <= p1 {
                // Duplicate stops step straight to the later value.
                if p1 - p0 <= f64::EPSILON {
                    return v1;
                }
                let t = (progress - p0) / (p1 - p0);
                return v0 + (v1 - v0) * t;
            }
        }
        last.1
    }
}

/// Two-point convenience mapping, clamped at both ends. A degenerate input
/// range yields the start output rather than dividing by zero.
pub fn map_range(progress: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (i0, i1) = input;
    let (o0, o1) = output;
    if (i1 - i0).abs() <= f64::EPSILON {
        return o0;
    }
    let t = ((progress - i0) / (i1 - i0)).clamp(0.0, 1.0);
    o0 + (o1 - o0) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_between_control_points() {
        let frames = Keyframes::new([(0.0, 1.1), (0.5, 1.0), (1.0, 1.1)]);
        assert_eq!(frames.sample(0.0), 1.1);
        assert_eq!(frames.sample(0.25), 1.05);
        assert_eq!(frames.sample(0.5), 1.0);
        assert_eq!(frames.sample(0.75), 1.05);
    }

    #[test]
    fn clamps_to_boundary_outputs() {
        let frames = Keyframes::new([(0.2, 10.0), (0.8, 50.0)]);
        assert_eq!(frames.sample(-3.0), 10.0);
        assert_eq!(frames.sample(0.0), 10.0);
        assert_eq!(frames.sample(1.0), 50.0);
        assert_eq!(frames.sample(42.0), 50.0);
    }

    #[test]
    fn handles_sparse_and_degenerate_sets() {
        assert_eq!(Keyframes::new(vec![]).sample(0.5), 0.0);
        assert_eq!(Keyframes::new([(0.5, 7.0)]).sample(0.1), 7.0);
        assert_eq!(Keyframes::new([(0.5, 7.0)]).sample(0.9), 7.0);
        // Duplicate progress stops do not divide by zero.
        let step = Keyframes::new([(0.0, 0.0), (0.5, 1.0), (0.5, 2.0), (1.0, 3.0)]);
        assert_eq!(step.sample(0.5), 1.0);
        assert_eq!(step.sample(0.75), 2.5);
    }

    #[test]
    fn map_range_clamps_and_survives_zero_width_input() {
        assert_eq!(map_range(0.5, (0.0, 1.0), (0.0, 100.0)), 50.0);
        assert_eq!(map_range(-1.0, (0.0, 1.0), (0.0, 100.0)), 0.0);
        assert_eq!(map_range(2.0, (0.0, 1.0), (0.0, 100.0)), 100.0);
        assert_eq!(map_range(0.3, (0.4, 0.4), (5.0, 9.0)), 5.0);
    }
}
