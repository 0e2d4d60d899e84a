use pan::PanConfig;
use serde::{Deserialize, Serialize};

/// Finite values clamped into `[lo, hi]`; anything else takes `fallback`.
fn pick(v: f64, fallback: f64, lo: f64, hi: f64) -> f64 {
    if v.is_finite() { v.clamp(lo, hi) } else { fallback }
}

/// How a multi-entry marker fans out.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotspotMode {
    /// Tap opens the fan; a second tap or the idle delay closes it.
    #[default]
    Tap,
    /// Pointer enter opens the fan, leave closes it.
    Hover,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotspotConfig {
    pub mode: HotspotMode,
    /// Distance of fanned-out children from the base marker, px.
    pub radius_px: f64,
    /// Idle time before an open fan closes in tap mode, ms.
    pub collapse_delay_ms: f64,
}

impl Default for HotspotConfig {
    fn default() -> Self {
        Self {
            mode: HotspotMode::Tap,
            radius_px: 45.0,
            collapse_delay_ms: 3000.0,
        }
    }
}

impl HotspotConfig {
    /// Layout used by pointer-driven desktop pages.
    pub fn hover() -> Self {
        Self {
            mode: HotspotMode::Hover,
            radius_px: 34.0,
            ..Self::default()
        }
    }

    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            mode: self.mode,
            radius_px: pick(self.radius_px, d.radius_px, 0.0, 500.0),
            collapse_delay_ms: pick(self.collapse_delay_ms, d.collapse_delay_ms, 0.0, 600_000.0),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    pub enabled: bool,
    /// Vertical travel that must be exceeded, px.
    pub min_distance_px: f64,
    /// The gesture must finish within this time, ms.
    pub max_duration_ms: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_distance_px: 50.0,
            max_duration_ms: 500.0,
        }
    }
}

impl SwipeConfig {
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            enabled: self.enabled,
            min_distance_px: pick(self.min_distance_px, d.min_distance_px, 0.0, 10_000.0),
            max_duration_ms: pick(self.max_duration_ms, d.max_duration_ms, 0.0, 10_000.0),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub pan: PanConfig,
    pub hotspots: HotspotConfig,
    pub swipe: SwipeConfig,
    /// Slack when deciding whether a scrolled panel reached its bottom, px.
    pub scroll_tolerance_px: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            pan: PanConfig::default(),
            hotspots: HotspotConfig::default(),
            swipe: SwipeConfig::default(),
            scroll_tolerance_px: 10.0,
        }
    }
}

impl ViewerConfig {
    /// Every numeric field finite and in range, so timers and gestures fire.
    pub fn sanitized(self) -> Self {
        Self {
            pan: self.pan.sanitized(),
            hotspots: self.hotspots.sanitized(),
            swipe: self.swipe.sanitized(),
            scroll_tolerance_px: pick(self.scroll_tolerance_px, 10.0, 0.0, 1000.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_tap_mode_with_three_second_collapse() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.hotspots.mode, HotspotMode::Tap);
        assert_eq!(cfg.hotspots.radius_px, 45.0);
        assert_eq!(cfg.hotspots.collapse_delay_ms, 3000.0);
        assert_eq!(cfg.swipe.min_distance_px, 50.0);
        assert_eq!(cfg.scroll_tolerance_px, 10.0);
    }

    #[test]
    fn partial_json_fills_missing_fields() {
        let cfg: ViewerConfig = serde_json::from_str(
            r#"{ "hotspots": { "mode": "hover", "collapse_delay_ms": 500 },
                 "pan": { "elastic_overdrag": false } }"#,
        )
        .unwrap();
        assert_eq!(
            cfg.hotspots,
            HotspotConfig {
                mode: HotspotMode::Hover,
                radius_px: 45.0,
                collapse_delay_ms: 500.0,
            }
        );
        assert!(!cfg.pan.elastic_overdrag);
        assert_eq!(cfg.pan.overdrag_damping, 0.3);
        assert_eq!(cfg.swipe, SwipeConfig::default());
    }

    #[test]
    fn sanitizing_restores_unusable_timings() {
        let cfg = ViewerConfig {
            hotspots: HotspotConfig {
                collapse_delay_ms: f64::NAN,
                radius_px: -3.0,
                ..HotspotConfig::default()
            },
            swipe: SwipeConfig {
                max_duration_ms: f64::INFINITY,
                ..SwipeConfig::default()
            },
            scroll_tolerance_px: f64::NAN,
            ..ViewerConfig::default()
        }
        .sanitized();
        assert_eq!(cfg.hotspots.collapse_delay_ms, 3000.0);
        assert_eq!(cfg.hotspots.radius_px, 0.0);
        assert_eq!(cfg.swipe.max_duration_ms, 500.0);
        assert_eq!(cfg.scroll_tolerance_px, 10.0);
        assert_eq!(ViewerConfig::default().sanitized(), ViewerConfig::default());
    }
}
