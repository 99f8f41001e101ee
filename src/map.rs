use std::collections::HashMap;
use std::hash::Hash;

use crate::{IntoListener, Listener, ListenerSet};

/// Listener set keyed by an enumerated event name, for event families that
/// share a single value type. Events dispatch as `(name, value)` pairs.
///
/// Prefer a [`listener_set!`](crate::listener_set) record when events carry
/// different value types; the map shape trades that per-event typing for
/// runtime keying.
pub struct ListenerMap<K, T> {
    listeners: HashMap<K, Listener<T>>,
}

impl<K, T> Default for ListenerMap<K, T> {
    fn default() -> Self { Self { listeners: HashMap::new() } }
}

impl<K: Clone, T> Clone for ListenerMap<K, T> {
    fn clone(&self) -> Self { Self { listeners: self.listeners.clone() } }
}

impl<K, T> std::fmt::Debug for ListenerMap<K, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerMap").field("listeners", &self.listeners.len()).finish()
    }
}

impl<K: Eq + Hash, T> ListenerMap<K, T> {
    /// Create an empty listener map.
    pub fn new() -> Self { Self::default() }

    /// Register a listener for `name`. Registering the same name twice keeps
    /// only the most recent listener.
    pub fn listen<L: IntoListener<T>>(mut self, name: K, listener: L) -> Self {
        self.listeners.insert(name, listener.into_listener());
        self
    }
}

impl<K: Eq + Hash, T> ListenerSet for ListenerMap<K, T> {
    type Event = (K, T);

    fn dispatch(&self, (name, value): (K, T)) -> bool {
        match self.listeners.get(&name) {
            Some(listener) => {
                listener.call(value);
                true
            }
            None => false,
        }
    }
}
