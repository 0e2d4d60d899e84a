//! Time primitives. Timestamps are host milliseconds (`DOMHighResTimeStamp`).

/// Milliseconds between two timestamps, never below `floor_ms`.
///
/// Guards rate computations against zero or backwards clock deltas.
pub fn elapsed_at_least(from_ms: f64, to_ms: f64, floor_ms: f64) -> f64 {
    let dt = to_ms - from_ms;
    if dt.is_nan() { floor_ms } else { dt.max(floor_ms) }
}

/// Fraction of `duration_ms` covered since `start_ms`, clamped to `[0, 1]`.
///
/// A non-positive duration counts as already complete.
pub fn progress(start_ms: f64, now_ms: f64, duration_ms: f64) -> f64 {
    if !(duration_ms > 0.0) {
        return 1.0;
    }
    crate::math::clamp_unit((now_ms - start_ms) / duration_ms)
}
