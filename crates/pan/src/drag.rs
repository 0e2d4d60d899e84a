use foundation::time::elapsed_at_least;

use crate::bounds::PanBounds;
use crate::config::OverdragPolicy;
use crate::pointer::PointerSample;

/// Smallest time step (ms) used when estimating velocity.
const MIN_SAMPLE_DT_MS: f64 = 1.0;

/// State of one pointer drag, from press to release.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragSession {
    start_pointer_x: f64,
    start_offset: f64,
    last_x: f64,
    last_ms: f64,
    velocity: f64,
}

impl DragSession {
    pub fn begin(sample: PointerSample, offset: f64) -> Self {
        Self {
            start_pointer_x: sample.x,
            start_offset: offset,
            last_x: sample.x,
            last_ms: sample.timestamp_ms,
            velocity: 0.0,
        }
    }

    /// Records a move and returns the unconstrained offset it implies.
    pub fn track(&mut self, sample: PointerSample) -> f64 {
        let dt = elapsed_at_least(self.last_ms, sample.timestamp_ms, MIN_SAMPLE_DT_MS);
        self.velocity = (sample.x - self.last_x) / dt;
        self.last_x = sample.x;
        self.last_ms = sample.timestamp_ms;
        sample.x - (self.start_pointer_x - self.start_offset)
    }

    /// Latest velocity estimate in px/ms.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn start_offset(&self) -> f64 {
        self.start_offset
    }
}

/// Applies the bounds to a raw drag offset.
///
/// Content that fits the viewport stays centered whatever the pointer does.
pub fn resolve_drag_offset(candidate: f64, bounds: &PanBounds, policy: OverdragPolicy) -> f64 {
    if !bounds.is_pannable() || !candidate.is_finite() {
        return bounds.clamp(candidate);
    }
    match bounds.violated_bound(candidate) {
        Some(bound) => policy.resolve(bound, candidate),
        None => candidate,
    }
}
