use std::sync::Arc;

/// A registered listener for a single event's value type.
/// Cloning is cheap; clones share the underlying function.
pub struct Listener<T>(Arc<dyn Fn(T) + Send + Sync + 'static>);

impl<T> Clone for Listener<T> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> std::fmt::Debug for Listener<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str("Listener") }
}

impl<T> Listener<T> {
    /// Wrap a function as a listener
    pub fn new<F: Fn(T) + Send + Sync + 'static>(f: F) -> Self { Self(Arc::new(f)) }

    /// Invoke the listener with an emitted value. Listeners return unit, so
    /// there is no result to collect.
    pub fn call(&self, value: T) { (self.0)(value) }
}

/// Trait for types that can be converted into listeners.
pub trait IntoListener<T> {
    /// Convert this type into a listener that can be registered for an event.
    fn into_listener(self) -> Listener<T>;
}

// Implementation for function types
impl<F, T> IntoListener<T> for F
where F: Fn(T) + Send + Sync + 'static
{
    fn into_listener(self) -> Listener<T> { Listener(Arc::new(self)) }
}

// Implementation for Listener itself
impl<T> IntoListener<T> for Listener<T> {
    fn into_listener(self) -> Listener<T> { self }
}

// Implementation for Arc<dyn Fn(T)> - reuse the allocation
impl<T> IntoListener<T> for Arc<dyn Fn(T) + Send + Sync + 'static> {
    fn into_listener(self) -> Listener<T> { Listener(self) }
}

impl<T: Send + 'static> IntoListener<T> for std::sync::mpsc::Sender<T> {
    fn into_listener(self) -> Listener<T> {
        Listener(Arc::new(move |value| {
            let _ = self.send(value); // Ignore send errors
        }))
    }
}

#[cfg(feature = "tokio")]
impl<T: Send + 'static> IntoListener<T> for tokio::sync::mpsc::UnboundedSender<T> {
    fn into_listener(self) -> Listener<T> {
        Listener(Arc::new(move |value| {
            let _ = self.send(value); // Ignore send errors
        }))
    }
}
