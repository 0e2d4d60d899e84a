/// Handle returned by [`Observers::subscribe`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Callback<E> = Box<dyn FnMut(&E)>;

/// Ordered list of callbacks notified about events of type `E`.
///
/// Callbacks run synchronously in registration order. A callback must not
/// reach back into the owner of the list; it receives everything it needs in
/// the event value.
pub struct Observers<E> {
    next_id: u64,
    entries: Vec<(ObserverId, Callback<E>)>,
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<E> std::fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.entries.len())
            .finish()
    }
}

impl<E> Observers<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&E) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Returns `true` if the observer was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(eid, _)| *eid != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, event: &E) {
        tracing::trace!(observers = self.entries.len(), "notify");
        for (_, callback) in &mut self.entries {
            callback(event);
        }
    }
}
