/// Result of advancing an animation by one frame.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Schedule another frame.
    Continue,
    /// Stop scheduling frames.
    #[default]
    Done,
}

impl StepOutcome {
    pub fn is_continue(self) -> bool {
        matches!(self, StepOutcome::Continue)
    }
}

/// Identifies one started animation.
///
/// Frame callbacks carry the ticket they were scheduled with; a ticket from a
/// superseded animation no longer matches the slot and the frame exits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AnimationTicket(u64);

/// Holds at most one active animation.
///
/// Starting or cancelling bumps the generation, invalidating every ticket
/// handed out before.
#[derive(Debug)]
pub struct AnimationSlot<A> {
    generation: u64,
    active: Option<A>,
}

impl<A> Default for AnimationSlot<A> {
    fn default() -> Self {
        Self {
            generation: 0,
            active: None,
        }
    }
}

impl<A> AnimationSlot<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, animation: A) -> AnimationTicket {
        self.generation = self.generation.wrapping_add(1);
        self.active = Some(animation);
        AnimationTicket(self.generation)
    }

    /// Drops the active animation. Returns `true` if one was running.
    pub fn cancel(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        self.active.take().is_some()
    }

    /// Ends the animation identified by `ticket`, if it is still current.
    pub fn finish(&mut self, ticket: AnimationTicket) {
        if self.is_current(ticket) {
            self.active = None;
        }
    }

    pub fn is_current(&self, ticket: AnimationTicket) -> bool {
        self.active.is_some() && ticket.0 == self.generation
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&A> {
        self.active.as_ref()
    }

    /// The running animation, only when `ticket` is still current.
    pub fn current_mut(&mut self, ticket: AnimationTicket) -> Option<&mut A> {
        if ticket.0 == self.generation {
            self.active.as_mut()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimationSlot, StepOutcome};

    #[test]
    fn start_hands_out_current_ticket() {
        let mut slot = AnimationSlot::new();
        let t = slot.start("snap");
        assert!(slot.is_current(t));
        assert_eq!(slot.current_mut(t).copied(), Some("snap"));
    }

    #[test]
    fn restart_supersedes_previous_ticket() {
        let mut slot = AnimationSlot::new();
        let old = slot.start(1);
        let new = slot.start(2);
        assert!(!slot.is_current(old));
        assert!(slot.current_mut(old).is_none());
        assert_eq!(slot.current_mut(new).copied(), Some(2));
    }

    #[test]
    fn cancel_invalidates_ticket() {
        let mut slot = AnimationSlot::new();
        let t = slot.start(());
        assert!(slot.cancel());
        assert!(!slot.is_current(t));
        assert!(!slot.cancel());
    }

    #[test]
    fn finish_with_stale_ticket_keeps_new_animation() {
        let mut slot = AnimationSlot::new();
        let old = slot.start(1);
        let _new = slot.start(2);
        slot.finish(old);
        assert_eq!(slot.active().copied(), Some(2));
    }

    #[test]
    fn default_outcome_is_done() {
        assert_eq!(StepOutcome::default(), StepOutcome::Done);
        assert!(StepOutcome::Continue.is_continue());
    }
}
