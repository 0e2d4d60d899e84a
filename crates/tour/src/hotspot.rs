use formats::{HotspotPosition, HotspotSpec};
use foundation::math::{Vec2, fan_out};
use runtime::{DelayToken, DelayedAction};

use crate::config::{HotspotConfig, HotspotMode};

/// What the host should do after an interaction with a marker.
#[derive(Debug, Clone, PartialEq)]
pub enum HotspotReaction {
    Ignored,
    /// Open the detail view for this entry.
    OpenEntry(usize),
    /// The fan opened. Arm a timer for `collapse` when present.
    Expanded { collapse: Option<ScheduledCollapse> },
    Collapsed,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScheduledCollapse {
    pub token: DelayToken,
    pub delay_ms: f64,
}

/// One marker on the scene image and the children it fans out into.
#[derive(Debug, Clone)]
pub struct HotspotGroup {
    position: HotspotPosition,
    labels: Vec<String>,
    expanded: bool,
    collapse: DelayedAction,
}

impl HotspotGroup {
    pub fn new(spec: &HotspotSpec) -> Self {
        Self {
            position: spec.position,
            labels: spec.entries.iter().map(|e| e.label.clone()).collect(),
            expanded: false,
            collapse: DelayedAction::new(),
        }
    }

    pub fn position(&self) -> HotspotPosition {
        self.position
    }

    pub fn entry_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_multi(&self) -> bool {
        self.labels.len() > 1
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn label(&self, entry: usize) -> Option<&str> {
        self.labels.get(entry).map(String::as_str)
    }

    /// Tooltip shown on the base marker.
    pub fn base_label(&self) -> Option<&str> {
        self.label(0)
    }

    /// Pixel offsets of the children from the base, empty while collapsed.
    pub fn child_offsets(&self, config: &HotspotConfig) -> Vec<Vec2> {
        if self.expanded {
            fan_out(self.labels.len(), config.radius_px)
        } else {
            Vec::new()
        }
    }

    /// Click or tap on the base marker.
    pub fn tap_base(&mut self, now_ms: f64, config: &HotspotConfig) -> HotspotReaction {
        if !self.is_multi() {
            return if self.labels.is_empty() {
                HotspotReaction::Ignored
            } else {
                HotspotReaction::OpenEntry(0)
            };
        }
        match config.mode {
            HotspotMode::Tap if self.expanded => {
                self.collapse();
                HotspotReaction::Collapsed
            }
            HotspotMode::Tap => self.expand(now_ms, config),
            // The fan already follows the pointer in hover mode.
            HotspotMode::Hover => HotspotReaction::Ignored,
        }
    }

    pub fn pointer_enter(&mut self, now_ms: f64, config: &HotspotConfig) -> HotspotReaction {
        if config.mode != HotspotMode::Hover || !self.is_multi() || self.expanded {
            return HotspotReaction::Ignored;
        }
        self.expand(now_ms, config)
    }

    pub fn pointer_leave(&mut self, config: &HotspotConfig) -> HotspotReaction {
        if config.mode != HotspotMode::Hover || !self.collapse() {
            return HotspotReaction::Ignored;
        }
        HotspotReaction::Collapsed
    }

    /// Click on a fanned-out child: opens its entry and closes the fan.
    pub fn tap_child(&mut self, entry: usize) -> HotspotReaction {
        if !self.expanded || entry >= self.labels.len() {
            return HotspotReaction::Ignored;
        }
        self.collapse();
        HotspotReaction::OpenEntry(entry)
    }

    /// The idle timer armed by [`HotspotReaction::Expanded`] went off.
    ///
    /// Returns `true` if the fan closed. Stale tokens are ignored.
    pub fn collapse_due(&mut self, token: DelayToken, now_ms: f64) -> bool {
        if !self.collapse.fire(token, now_ms) {
            return false;
        }
        tracing::trace!("hotspot fan idle timeout");
        self.collapse()
    }

    /// Closes the fan. Returns `true` if it was open.
    pub fn collapse(&mut self) -> bool {
        self.collapse.cancel();
        std::mem::replace(&mut self.expanded, false)
    }

    fn expand(&mut self, now_ms: f64, config: &HotspotConfig) -> HotspotReaction {
        self.expanded = true;
        let collapse = match config.mode {
            HotspotMode::Tap => Some(ScheduledCollapse {
                token: self.collapse.schedule(now_ms, config.collapse_delay_ms),
                delay_ms: config.collapse_delay_ms,
            }),
            HotspotMode::Hover => None,
        };
        HotspotReaction::Expanded { collapse }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formats::EntrySpec;

    fn group(labels: &[&str]) -> HotspotGroup {
        HotspotGroup::new(&HotspotSpec {
            position: HotspotPosition { x: 40.0, y: 60.0 },
            entries: labels
                .iter()
                .map(|l| EntrySpec {
                    label: l.to_string(),
                    title: None,
                    author: String::new(),
                    text: None,
                    pdf: None,
                })
                .collect(),
        })
    }

    fn armed(reaction: HotspotReaction) -> ScheduledCollapse {
        match reaction {
            HotspotReaction::Expanded {
                collapse: Some(collapse),
            } => collapse,
            other => panic!("expected a scheduled collapse, got {other:?}"),
        }
    }

    #[test]
    fn single_entry_opens_directly() {
        let cfg = HotspotConfig::default();
        let mut g = group(&["Fresco"]);
        assert_eq!(g.tap_base(0.0, &cfg), HotspotReaction::OpenEntry(0));
        assert!(!g.is_expanded());
        assert!(g.child_offsets(&cfg).is_empty());
    }

    #[test]
    fn tap_fans_out_children_on_a_circle() {
        let cfg = HotspotConfig::default();
        let mut g = group(&["a", "b", "c", "d"]);
        let collapse = armed(g.tap_base(0.0, &cfg));
        assert_eq!(collapse.delay_ms, 3000.0);

        let offsets = g.child_offsets(&cfg);
        assert_eq!(offsets.len(), 4);
        assert!((offsets[0].x - 45.0).abs() < 1e-9 && offsets[0].y.abs() < 1e-9);
        assert!(offsets[1].x.abs() < 1e-9 && (offsets[1].y - 45.0).abs() < 1e-9);
        assert!((offsets[2].x + 45.0).abs() < 1e-9);
    }

    #[test]
    fn child_tap_opens_entry_and_collapses() {
        let cfg = HotspotConfig::default();
        let mut g = group(&["a", "b", "c"]);
        let collapse = armed(g.tap_base(0.0, &cfg));

        assert_eq!(g.tap_child(2), HotspotReaction::OpenEntry(2));
        assert!(!g.is_expanded());
        // The pending timer no longer does anything.
        assert!(!g.collapse_due(collapse.token, 5000.0));
    }

    #[test]
    fn second_tap_collapses_and_collapse_is_idempotent() {
        let cfg = HotspotConfig::default();
        let mut g = group(&["a", "b"]);
        armed(g.tap_base(0.0, &cfg));
        assert_eq!(g.tap_base(100.0, &cfg), HotspotReaction::Collapsed);
        assert!(!g.collapse());
        assert!(!g.collapse());
        assert_eq!(g.tap_child(0), HotspotReaction::Ignored);
    }

    #[test]
    fn idle_timeout_collapses_once() {
        let cfg = HotspotConfig::default();
        let mut g = group(&["a", "b", "c"]);
        let collapse = armed(g.tap_base(1000.0, &cfg));

        assert!(!g.collapse_due(collapse.token, 3999.0));
        assert!(g.is_expanded());
        assert!(g.collapse_due(collapse.token, 4000.0));
        assert!(!g.is_expanded());
        assert!(!g.collapse_due(collapse.token, 9000.0));
    }

    #[test]
    fn reopening_resets_the_idle_timer() {
        let cfg = HotspotConfig::default();
        let mut g = group(&["a", "b"]);
        let first = armed(g.tap_base(0.0, &cfg));
        g.tap_base(1000.0, &cfg);
        let second = armed(g.tap_base(2000.0, &cfg));

        assert!(!g.collapse_due(first.token, 3000.0));
        assert!(g.is_expanded());
        assert!(g.collapse_due(second.token, 5000.0));
    }

    #[test]
    fn hover_mode_follows_the_pointer() {
        let cfg = HotspotConfig::hover();
        let mut g = group(&["a", "b"]);
        assert_eq!(g.base_label(), Some("a"));

        assert_eq!(
            g.pointer_enter(0.0, &cfg),
            HotspotReaction::Expanded { collapse: None }
        );
        assert_eq!(g.child_offsets(&cfg)[0].x, 34.0);
        assert_eq!(g.tap_base(10.0, &cfg), HotspotReaction::Ignored);
        assert_eq!(g.pointer_leave(&cfg), HotspotReaction::Collapsed);
        assert_eq!(g.pointer_leave(&cfg), HotspotReaction::Ignored);
    }

    #[test]
    fn tap_mode_ignores_hover() {
        let cfg = HotspotConfig::default();
        let mut g = group(&["a", "b"]);
        assert_eq!(g.pointer_enter(0.0, &cfg), HotspotReaction::Ignored);
        assert!(!g.is_expanded());
    }
}
