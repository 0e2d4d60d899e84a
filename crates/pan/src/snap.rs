use foundation::math::{ease_out_cubic, lerp};
use foundation::time::progress;

/// Eased return of the offset to a bound.
///
/// The clock starts at the first sampled frame, so the animation does not
/// depend on the host's event and frame timestamps sharing an origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SnapBack {
    from: f64,
    to: f64,
    duration_ms: f64,
    start_ms: Option<f64>,
}

impl SnapBack {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            start_ms: None,
        }
    }

    /// Starts the clock at `start_ms` instead of the first sample.
    pub fn started_at(mut self, start_ms: f64) -> Self {
        self.start_ms = Some(start_ms);
        self
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Offset at `now_ms` and whether the animation has finished.
    ///
    /// The final sample lands exactly on the target.
    pub fn sample(&mut self, now_ms: f64) -> (f64, bool) {
        let start = *self.start_ms.get_or_insert(now_ms);
        let p = progress(start, now_ms, self.duration_ms);
        if p >= 1.0 {
            (self.to, true)
        } else {
            (lerp(self.from, self.to, ease_out_cubic(p)), false)
        }
    }
}
