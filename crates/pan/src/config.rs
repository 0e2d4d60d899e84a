use serde::{Deserialize, Serialize};

/// How a drag past the pan bounds is resolved.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum OverdragPolicy {
    /// Excess beyond the bound is scaled by `damping` (rubber band).
    Elastic { damping: f64 },
    /// The offset stops at the bound.
    HardClamp,
}

impl OverdragPolicy {
    /// Resolves `candidate` against a crossed `bound`.
    pub fn resolve(self, bound: f64, candidate: f64) -> f64 {
        match self {
            OverdragPolicy::Elastic { damping } => bound + (candidate - bound) * damping,
            OverdragPolicy::HardClamp => bound,
        }
    }
}

/// Tunables for the pan controller.
///
/// All fields have defaults, so a host may pass a partial JSON object.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanConfig {
    // ── Drag ─────────────────────────────────────────────────
    /// Rubber-band past the bounds while dragging. When false the offset is
    /// hard-clamped.
    pub elastic_overdrag: bool,
    /// Fraction of the excess kept when dragging past a bound.
    pub overdrag_damping: f64,

    // ── Momentum ─────────────────────────────────────────────
    /// Enable inertial motion after release.
    pub momentum: bool,
    /// Release speed (px/ms) above which momentum starts.
    pub momentum_min_velocity: f64,
    /// Velocity multiplier applied once per frame.
    pub deceleration: f64,
    /// Nominal frame length (ms) converting px/ms into px/frame.
    pub frame_scale_ms: f64,
    /// Per-frame displacement (px) at or below which momentum ends.
    pub momentum_stop_px: f64,

    // ── Snap-back ────────────────────────────────────────────
    /// Duration of the eased return to the nearest bound.
    pub snap_duration_ms: f64,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            elastic_overdrag: true,
            overdrag_damping: 0.3,

            momentum: true,
            momentum_min_velocity: 0.1,
            deceleration: 0.95,
            frame_scale_ms: 16.0,
            momentum_stop_px: 0.5,

            snap_duration_ms: 300.0,
        }
    }
}

impl PanConfig {
    pub fn hard_clamp() -> Self {
        Self {
            elastic_overdrag: false,
            ..Self::default()
        }
    }

    pub fn overdrag(&self) -> OverdragPolicy {
        if self.elastic_overdrag {
            OverdragPolicy::Elastic {
                damping: self.overdrag_damping,
            }
        } else {
            OverdragPolicy::HardClamp
        }
    }

    /// Brings every field into a range where the animations terminate.
    ///
    /// Non-finite values fall back to the default for that field.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        let pick = |v: f64, fallback: f64, lo: f64, hi: f64| {
            if v.is_finite() { v.clamp(lo, hi) } else { fallback }
        };
        Self {
            elastic_overdrag: self.elastic_overdrag,
            overdrag_damping: pick(self.overdrag_damping, d.overdrag_damping, 0.0, 1.0),
            momentum: self.momentum,
            momentum_min_velocity: pick(self.momentum_min_velocity, d.momentum_min_velocity, 0.0, 10.0),
            deceleration: pick(self.deceleration, d.deceleration, 0.0, 0.995),
            frame_scale_ms: pick(self.frame_scale_ms, d.frame_scale_ms, 1.0, 100.0),
            momentum_stop_px: pick(self.momentum_stop_px, d.momentum_stop_px, 0.01, 100.0),
            snap_duration_ms: pick(self.snap_duration_ms, d.snap_duration_ms, 0.0, 5000.0),
        }
    }

    /// Updates a single field by key. Returns `false` for unknown keys.
    ///
    /// Boolean fields treat values above 0.5 as true.
    pub fn set_field(&mut self, key: &str, value: f64) -> bool {
        match key {
            "elastic_overdrag" => self.elastic_overdrag = value > 0.5,
            "overdrag_damping" => self.overdrag_damping = value,
            "momentum" => self.momentum = value > 0.5,
            "momentum_min_velocity" => self.momentum_min_velocity = value,
            "deceleration" => self.deceleration = value,
            "frame_scale_ms" => self.frame_scale_ms = value,
            "momentum_stop_px" => self.momentum_stop_px = value,
            "snap_duration_ms" => self.snap_duration_ms = value,
            _ => return false,
        }
        *self = self.sanitized();
        true
    }
}
