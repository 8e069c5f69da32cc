use nalgebra as na;

pub const AXES: [usize; 2] = [0, 1];

/// Per-axis slope differences up to this many pixels, before scaling, still
/// count as equal.
///
/// Normalized f32 coordinates put up to `size * 2^-25` pixels of rounding on
/// every position read back, so a slope carries up to `size * 2^-23`.
pub const SLOPE_TOLERANCE: f64 = 1e-2;

/// Absolute per-axis difference, axes are never combined into a magnitude.
#[inline]
pub fn axis_difference(a: &na::Vector2<f64>, b: &na::Vector2<f64>, axis: usize) -> f64 {
    (a[axis] - b[axis]).abs()
}

/// First axis whose scaled difference is above `threshold` by more than
/// `SLOPE_TOLERANCE * scale`, together with that difference.
pub fn first_exceeding_axis(
    a: &na::Vector2<f64>,
    b: &na::Vector2<f64>,
    scale: f64,
    threshold: f64,
) -> Option<(usize, f64)> {
    AXES.iter()
        .map(|&axis| (axis, axis_difference(a, b, axis) * scale))
        .find(|&(_, diff)| diff > threshold + SLOPE_TOLERANCE * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_difference() {
        let a = na::Vector2::new(1.0, -3.0);
        let b = na::Vector2::new(4.0, 1.0);
        assert_eq!(axis_difference(&a, &b, 0), 3.0);
        assert_eq!(axis_difference(&a, &b, 1), 4.0);
    }

    #[test]
    fn test_first_exceeding_axis() {
        let a = na::Vector2::new(0.0, 0.0);
        let b = na::Vector2::new(2.0, 3.0);

        assert_eq!(first_exceeding_axis(&a, &b, 1.0, 1.0), Some((0, 2.0)));
        assert_eq!(first_exceeding_axis(&a, &b, 1.0, 2.5), Some((1, 3.0)));
        assert_eq!(first_exceeding_axis(&a, &b, 1.0, 3.0), None);
        assert_eq!(first_exceeding_axis(&a, &b, 2.0, 5.0), Some((1, 6.0)));
    }

    #[test]
    fn test_equal_vectors_never_exceed() {
        let a = na::Vector2::new(5.0, 5.0);
        assert_eq!(first_exceeding_axis(&a, &a, 10.0, 0.0), None);
    }

    #[test]
    fn test_rounding_noise_is_not_a_difference() {
        let a = na::Vector2::new(3.2e-5, -1.7e-5);
        let b = na::Vector2::zeros();
        assert_eq!(first_exceeding_axis(&a, &b, 1.0, 0.0), None);
        assert_eq!(first_exceeding_axis(&a, &b, 20.0, 0.0), None);
        // noise of a 3840 px clip, scaled by a long window
        let c = na::Vector2::new(9.2e-4, 0.0);
        assert_eq!(first_exceeding_axis(&c, &b, 1000.0, 0.0), None);
        assert_eq!(
            first_exceeding_axis(&na::Vector2::new(0.5, 0.0), &b, 1.0, 0.0),
            Some((0, 0.5))
        );
    }
}
