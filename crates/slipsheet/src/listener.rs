//! Listener registration and broadcast for drawer notifications
//!
//! Registries are plain insertion-ordered lists: listeners are notified
//! synchronously in registration order, registering the same listener
//! twice notifies it twice, and removal takes the [`ListenerId`] handed
//! out at registration.

/// Receives open/close lifecycle notifications.
///
/// All methods have empty default bodies so implementors only override
/// the transitions they care about. `before_*` fires ahead of the state
/// change and the resize broadcast, `after_*` fires once both are done.
pub trait InteractionListener {
    /// Called before the drawer transitions to open.
    fn before_opened(&mut self) {}
    /// Called after the drawer has transitioned to open.
    fn after_opened(&mut self) {}
    /// Called before the drawer transitions to closed.
    fn before_closed(&mut self) {}
    /// Called after the drawer has transitioned to closed.
    fn after_closed(&mut self) {}
}

/// Receives the drawer's new extent whenever it changes, whether from a
/// drag, a fling, or an explicit open/close call.
pub trait ResizeListener {
    /// Called with the new size along the sizing axis, in logical pixels.
    fn resized(&mut self, size: f32);
}

impl<F: FnMut(f32)> ResizeListener for F {
    fn resized(&mut self, size: f32) {
        self(size)
    }
}

/// Handle identifying a registered listener for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Insertion-ordered listener list with id-based removal.
pub(crate) struct Registry<L: ?Sized> {
    entries: Vec<(ListenerId, Box<L>)>,
    next_id: u64,
}

impl<L: ?Sized> Registry<L> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub fn add(&mut self, listener: Box<L>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Removes the listener registered under `id`. Returns false if the
    /// id was never registered or was already removed.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut L> {
        self.entries.iter_mut().map(|(_, listener)| listener.as_mut())
    }
}
