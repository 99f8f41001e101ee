use std::sync::Arc;

use crate::{ListenerSet, Observer};

/// A callable wrapping a user function so that every invocation receives a
/// fresh [`Observer`].
///
/// Produced by [`bind`] (empty listener seed) or [`bind_with_listeners`]
/// (explicit seed). Rust functions cannot carry attached methods the way the
/// bound callable's `observe` operation wants, so the callable is a struct:
/// invoke it with [`call`](Self::call), derive an observed variant with
/// [`observe`](Self::observe).
///
/// Cloning shares the wrapped function; each clone keeps its own seed.
pub struct BoundCallback<F, L> {
    callback: Arc<F>,
    listeners: L,
}

impl<F, L: Clone> Clone for BoundCallback<F, L> {
    fn clone(&self) -> Self { Self { callback: self.callback.clone(), listeners: self.listeners.clone() } }
}

impl<F, L> std::fmt::Debug for BoundCallback<F, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundCallback").finish_non_exhaustive()
    }
}

impl<F, L> BoundCallback<F, L>
where L: ListenerSet + Clone
{
    /// Invoke the wrapped function with a fresh observer and `args`, passing
    /// its result through unchanged.
    ///
    /// The seed is cloned per call ([`Listener`](crate::Listener) clones share
    /// the underlying functions), so concurrent invocations are fully
    /// independent. A `Result` or `Future` return value is handed back as-is;
    /// nothing is awaited or wrapped at this layer. Multiple arguments are
    /// expressed as a tuple.
    pub fn call<A, R>(&self, args: A) -> R
    where F: Fn(Observer<L>, A) -> R {
        (self.callback)(Observer::with_listeners(self.listeners.clone()), args)
    }

    /// Derive a new callable whose invocations get an observer seeded with
    /// `listeners`. The original callable keeps its own seed and remains
    /// usable.
    pub fn observe(&self, listeners: L) -> Self {
        Self { callback: self.callback.clone(), listeners }
    }
}

/// Wrap `callback` so each invocation runs against a fresh, empty observer.
///
/// The wrapped function takes the observer by value; an async callback can
/// move it into its future and emit after the binder has already returned.
pub fn bind<F, L, A, R>(callback: F) -> BoundCallback<F, L>
where
    L: ListenerSet + Clone,
    F: Fn(Observer<L>, A) -> R,
{
    BoundCallback { callback: Arc::new(callback), listeners: L::default() }
}

/// Wrap `callback` so each invocation runs against a fresh observer seeded
/// with `listeners`. Free-function form of [`BoundCallback::observe`].
pub fn bind_with_listeners<F, L, A, R>(callback: F, listeners: L) -> BoundCallback<F, L>
where
    L: ListenerSet + Clone,
    F: Fn(Observer<L>, A) -> R,
{
    BoundCallback { callback: Arc::new(callback), listeners }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ListenerMap;
    use std::sync::{Arc, Mutex};

    #[test]
    fn fresh_observer_per_invocation() {
        let hits = Arc::new(Mutex::new(0u32));
        let job = {
            let hits = hits.clone();
            bind_with_listeners(
                |observer: Observer<ListenerMap<&str, u32>>, n: u32| {
                    observer.emit(("tick", n));
                },
                ListenerMap::new().listen("tick", move |_n: u32| *hits.lock().unwrap() += 1),
            )
        };

        job.call(1);
        job.call(2);
        assert_eq!(*hits.lock().unwrap(), 2);
    }

    #[test]
    fn observe_does_not_disturb_the_base_callable() {
        let hits = Arc::new(Mutex::new(0u32));
        let job = bind(|observer: Observer<ListenerMap<&str, u32>>, n: u32| {
            observer.emit(("tick", n));
            n
        });

        let observed = {
            let hits = hits.clone();
            job.observe(ListenerMap::new().listen("tick", move |_n: u32| *hits.lock().unwrap() += 1))
        };

        assert_eq!(observed.call(5), 5);
        assert_eq!(*hits.lock().unwrap(), 1);

        // Base callable still runs with an empty seed.
        assert_eq!(job.call(5), 5);
        assert_eq!(*hits.lock().unwrap(), 1);
    }
}
