/// Linear mapping of `value` from [in_min, in_max] onto [out_min, out_max].
/// The value is not clamped; callers clamp first where the domain demands it.
#[must_use]
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (value - in_min) / (in_max - in_min) * (out_max - out_min)
}

#[cfg(test)]
mod tests {
    use super::map_range;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    #[test]
    fn endpoints_map_to_endpoints() {
        assert_approx_eq(map_range(1.0, 1.0, 500.0, 0.0, 100.0), 0.0);
        assert_approx_eq(map_range(500.0, 1.0, 500.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn midpoint_maps_to_midpoint() {
        assert_approx_eq(map_range(0.5, 0.0, 1.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn unclamped_values_extrapolate() {
        assert_approx_eq(map_range(2.0, 0.0, 1.0, 0.0, 10.0), 20.0);
        assert_approx_eq(map_range(-1.0, 0.0, 1.0, 0.0, 10.0), -10.0);
    }

    #[test]
    fn inverted_output_range_flips_direction() {
        assert_approx_eq(map_range(0.25, 0.0, 1.0, 100.0, 0.0), 75.0);
    }
}
