use tracing::trace;

/// A set of listener slots for a statically declared family of events.
///
/// Implementors are record structs with one optional [`Listener`](crate::Listener)
/// slot per event; the associated [`Event`](ListenerSet::Event) enum carries the
/// event name (variant) and value (payload) together, so only declared events
/// are emittable. The [`listener_set!`](crate::listener_set) macro generates the
/// enum, the record, and this impl from one declaration.
pub trait ListenerSet: Default {
    /// The event type this set dispatches.
    type Event;

    /// Route an event to the listener registered for it, invoking it
    /// synchronously. Returns whether a listener ran.
    fn dispatch(&self, event: Self::Event) -> bool;
}

/// Per-invocation event dispatcher.
///
/// An observer holds at most one listener per event and never changes after
/// construction; dispatch does not alter the set. Bound callables construct a
/// fresh observer for every invocation (see [`bind`](crate::bind)), so nothing
/// is shared between calls.
pub struct Observer<L> {
    listeners: L,
}

impl<L: ListenerSet> Observer<L> {
    /// Create an observer with no listeners; every emit is a no-op.
    pub fn new() -> Self { Self { listeners: L::default() } }

    /// Create an observer seeded with the given listener set.
    pub fn with_listeners(listeners: L) -> Self { Self { listeners } }

    /// Synchronously invoke the listener registered for this event, if any.
    ///
    /// Emitting an event with no registered listener is not an error - the
    /// event is simply dropped. Returns the observer so emits can be chained.
    /// A panicking listener propagates unmodified to the caller.
    pub fn emit(&self, event: L::Event) -> &Self {
        if !self.listeners.dispatch(event) {
            trace!("emit without a registered listener");
        }
        self
    }
}

impl<L: ListenerSet> Default for Observer<L> {
    fn default() -> Self { Self::new() }
}

impl<L> std::fmt::Debug for Observer<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observer").finish_non_exhaustive()
    }
}
