use runtime::{AnimationSlot, AnimationTicket, StepOutcome};

use crate::bounds::PanBounds;
use crate::config::PanConfig;
use crate::drag::{DragSession, resolve_drag_offset};
use crate::momentum::{Momentum, MomentumStep};
use crate::pointer::{PointerDown, PointerSample};
use crate::snap::SnapBack;

#[derive(Debug, Copy, Clone, PartialEq)]
enum PanAnimation {
    Momentum(Momentum),
    Snap(SnapBack),
}

/// What the controller is doing right now.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum PanPhase {
    #[default]
    Idle,
    Dragging,
    Coasting,
    Snapping,
}

/// Owns the horizontal content offset and reconciles it with the measured
/// viewport and content widths.
///
/// The offset is written either by the active drag or by the active
/// animation, never both: pressing cancels any animation before the drag
/// takes over.
#[derive(Debug)]
pub struct PanController {
    config: PanConfig,
    bounds: PanBounds,
    offset: f64,
    drag: Option<DragSession>,
    animation: AnimationSlot<PanAnimation>,
}

impl Default for PanController {
    fn default() -> Self {
        Self::new(PanConfig::default())
    }
}

impl PanController {
    pub fn new(config: PanConfig) -> Self {
        Self {
            config: config.sanitized(),
            bounds: PanBounds::default(),
            offset: 0.0,
            drag: None,
            animation: AnimationSlot::new(),
        }
    }

    pub fn config(&self) -> &PanConfig {
        &self.config
    }

    /// Replaces the configuration. Takes effect from the next input or frame.
    pub fn set_config(&mut self, config: PanConfig) {
        self.config = config.sanitized();
    }

    /// Current content offset in px (the horizontal translation to render).
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn bounds(&self) -> &PanBounds {
        &self.bounds
    }

    pub fn phase(&self) -> PanPhase {
        if self.drag.is_some() {
            return PanPhase::Dragging;
        }
        match self.animation.active() {
            Some(PanAnimation::Momentum(_)) => PanPhase::Coasting,
            Some(PanAnimation::Snap(_)) => PanPhase::Snapping,
            None => PanPhase::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_active()
    }

    /// Recomputes bounds after a resize or a content size change.
    ///
    /// Unchanged bounds leave everything running. When the bounds change
    /// outside a drag, momentum that still fits keeps coasting; anything else
    /// is dropped and the offset is clamped into the new bounds at once.
    /// During a drag the next move picks up the new bounds. Returns the
    /// offset to render.
    pub fn measure(&mut self, viewport_width: f64, content_width: f64) -> f64 {
        let bounds = PanBounds::compute(viewport_width, content_width);
        if bounds == self.bounds {
            return self.offset;
        }
        tracing::debug!(
            min_x = bounds.min_x(),
            max_x = bounds.max_x(),
            pannable = bounds.is_pannable(),
            "pan bounds changed"
        );
        self.bounds = bounds;
        if self.drag.is_some() {
            return self.offset;
        }
        let coasting_inside = matches!(self.animation.active(), Some(PanAnimation::Momentum(_)))
            && self.bounds.contains(self.offset);
        if !coasting_inside {
            self.animation.cancel();
            self.offset = self.bounds.clamp(self.offset);
        }
        self.offset
    }

    /// Measures freshly loaded content and centers it.
    pub fn content_loaded(&mut self, viewport_width: f64, content_width: f64) -> f64 {
        self.drag = None;
        self.animation.cancel();
        self.bounds = PanBounds::compute(viewport_width, content_width);
        self.offset = self.bounds.centered();
        self.offset
    }

    /// Forgets the offset and any interaction, ready for a new scene image.
    pub fn reset(&mut self) {
        self.drag = None;
        self.animation.cancel();
        self.offset = 0.0;
    }

    /// Starts a drag. Returns `false` when the press does not belong to
    /// panning (hotspot target, secondary button).
    pub fn pointer_down(&mut self, down: PointerDown) -> bool {
        if !down.starts_pan() {
            return false;
        }
        if self.animation.cancel() {
            tracing::trace!(offset = self.offset, "drag interrupted animation");
        }
        self.drag = Some(DragSession::begin(down.sample, self.offset));
        true
    }

    /// Follows the pointer while dragging.
    ///
    /// Returns the new offset, or `None` when no drag is active. `Some` means
    /// the host should suppress native scrolling for this event.
    pub fn pointer_move(&mut self, sample: PointerSample) -> Option<f64> {
        let drag = self.drag.as_mut()?;
        let candidate = drag.track(sample);
        self.offset = resolve_drag_offset(candidate, &self.bounds, self.config.overdrag());
        Some(self.offset)
    }

    /// Ends the drag and starts momentum or snap-back.
    ///
    /// Returns the ticket of the started animation; the host advances it with
    /// [`PanController::tick`] once per frame.
    pub fn pointer_up(&mut self) -> Option<AnimationTicket> {
        let drag = self.drag.take()?;
        let velocity = drag.velocity();

        if Momentum::should_start(velocity, &self.bounds, &self.config) {
            tracing::debug!(velocity, offset = self.offset, "release: momentum");
            return Some(self.animation.start(PanAnimation::Momentum(Momentum::new(velocity))));
        }
        self.start_snap()
    }

    /// A cancelled pointer settles exactly like a release.
    pub fn pointer_cancel(&mut self) -> Option<AnimationTicket> {
        self.pointer_up()
    }

    fn start_snap(&mut self) -> Option<AnimationTicket> {
        let target = self.bounds.violated_bound(self.offset)?;
        tracing::debug!(from = self.offset, to = target, "release: snap back");
        let snap = SnapBack::new(self.offset, target, self.config.snap_duration_ms);
        Some(self.animation.start(PanAnimation::Snap(snap)))
    }

    /// Advances the animation identified by `ticket` to `now_ms`.
    ///
    /// A superseded ticket (a newer drag or animation took over) returns
    /// `Done` without touching the offset.
    pub fn tick(&mut self, ticket: AnimationTicket, now_ms: f64) -> StepOutcome {
        let Some(animation) = self.animation.current_mut(ticket) else {
            return StepOutcome::Done;
        };

        let outcome = match animation {
            PanAnimation::Momentum(momentum) => {
                match momentum.step(self.offset, &self.bounds, &self.config) {
                    MomentumStep::Moving(x) => {
                        self.offset = x;
                        StepOutcome::Continue
                    }
                    MomentumStep::Settled(x) => {
                        self.offset = x;
                        StepOutcome::Done
                    }
                    MomentumStep::Escaped { offset, bound } => {
                        self.offset = offset;
                        let snap = SnapBack::new(offset, bound, self.config.snap_duration_ms)
                            .started_at(now_ms);
                        *animation = PanAnimation::Snap(snap);
                        StepOutcome::Continue
                    }
                }
            }
            PanAnimation::Snap(snap) => {
                let (x, done) = snap.sample(now_ms);
                self.offset = x;
                if done {
                    StepOutcome::Done
                } else {
                    StepOutcome::Continue
                }
            }
        };

        if outcome == StepOutcome::Done {
            self.animation.finish(ticket);
        }
        outcome
    }
}
