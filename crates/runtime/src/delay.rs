/// Token for one scheduling of a [`DelayedAction`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DelayToken(u64);

/// A cancellable, resettable deadline.
///
/// The host owns the actual timer (`setTimeout` in the browser); when it
/// fires it hands back the token it was armed with. Rescheduling or
/// cancelling makes older tokens inert, so a stale timer can never trigger
/// the action.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DelayedAction {
    generation: u64,
    due_ms: Option<f64>,
}

impl DelayedAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms (or re-arms) the deadline `delay_ms` after `now_ms`.
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64) -> DelayToken {
        self.generation = self.generation.wrapping_add(1);
        self.due_ms = Some(now_ms + delay_ms.max(0.0));
        DelayToken(self.generation)
    }

    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.due_ms = None;
    }

    /// Consumes the deadline if `token` is current and the deadline passed.
    ///
    /// Returns `true` exactly once per armed deadline.
    pub fn fire(&mut self, token: DelayToken, now_ms: f64) -> bool {
        if token.0 != self.generation {
            return false;
        }
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DelayedAction;

    #[test]
    fn fires_once_after_deadline() {
        let mut d = DelayedAction::new();
        let t = d.schedule(1000.0, 3000.0);
        assert!(!d.fire(t, 3999.0));
        assert!(d.fire(t, 4000.0));
        assert!(!d.fire(t, 5000.0));
    }

    #[test]
    fn reschedule_invalidates_old_token() {
        let mut d = DelayedAction::new();
        let first = d.schedule(0.0, 500.0);
        let second = d.schedule(400.0, 500.0);
        assert!(!d.fire(first, 600.0));
        assert!(!d.fire(second, 600.0));
        assert!(d.fire(second, 900.0));
    }

    #[test]
    fn cancel_disarms() {
        let mut d = DelayedAction::new();
        let t = d.schedule(0.0, 10.0);
        d.cancel();
        assert!(!d.fire(t, 100.0));
        assert!(!d.fire(t, 1_000_000.0));
    }

    #[test]
    fn negative_delay_is_immediate() {
        let mut d = DelayedAction::new();
        let t = d.schedule(50.0, -10.0);
        assert!(!d.fire(t, 49.0));
        assert!(d.fire(t, 50.0));
    }
}
