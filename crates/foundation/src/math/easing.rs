/// Cubic ease-out: fast start, gentle landing.
///
/// `t` is clamped to `[0, 1]`, so callers may pass raw elapsed/duration
/// ratios. The endpoints are exact: `ease_out_cubic(1.0) == 1.0`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = clamp_unit(t);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp to `[0, 1]`, mapping NaN to 0.
pub fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_cubic_endpoints_are_exact() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.5), 1.0);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
    }

    #[test]
    fn ease_out_cubic_front_loads_progress() {
        // 1 - 0.5^3
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        assert!(ease_out_cubic(0.25) > 0.25);
    }

    #[test]
    fn clamp_unit_handles_nan() {
        assert_eq!(clamp_unit(f64::NAN), 0.0);
    }

    #[test]
    fn lerp_hits_both_ends() {
        assert_eq!(lerp(-850.0, -800.0, 0.0), -850.0);
        assert_eq!(lerp(-850.0, -800.0, 1.0), -800.0);
    }
}
