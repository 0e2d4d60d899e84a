use crate::bounds::PanBounds;
use crate::config::PanConfig;

/// Inertial motion after a fast release.
///
/// Decay is applied once per frame rather than per unit of time, so the
/// travelled distance depends on the display rate. At 60 Hz this matches the
/// nominal `frame_scale_ms`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Momentum {
    velocity: f64,
}

/// Outcome of one momentum frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MomentumStep {
    /// Still moving; the new offset is inside the bounds.
    Moving(f64),
    /// Slowed below the stop threshold at this offset.
    Settled(f64),
    /// Left the bounds; `bound` is the edge that was crossed.
    Escaped { offset: f64, bound: f64 },
}

impl Momentum {
    /// `velocity` is the release speed in px/ms.
    pub fn new(velocity: f64) -> Self {
        Self { velocity }
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Whether a release at `velocity` should coast.
    pub fn should_start(velocity: f64, bounds: &PanBounds, config: &PanConfig) -> bool {
        config.momentum && bounds.is_pannable() && velocity.abs() > config.momentum_min_velocity
    }

    pub fn step(&mut self, offset: f64, bounds: &PanBounds, config: &PanConfig) -> MomentumStep {
        self.velocity *= config.deceleration;
        let displacement = self.velocity * config.frame_scale_ms;
        let next = offset + displacement;

        if let Some(bound) = bounds.violated_bound(next) {
            return MomentumStep::Escaped {
                offset: next,
                bound,
            };
        }
        if displacement.abs() <= config.momentum_stop_px {
            MomentumStep::Settled(next)
        } else {
            MomentumStep::Moving(next)
        }
    }
}
