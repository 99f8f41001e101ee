/// Declares an event enum, its listener-record struct, and the
/// [`ListenerSet`](crate::ListenerSet) impl wiring them together.
///
/// One declaration per event family keeps the set of emittable events in a
/// single place, checked at compile time:
///
/// ```rust
/// service_observer::listener_set! {
///     /// Events emitted while a payload uploads.
///     pub enum UploadEvent => pub struct UploadListeners {
///         Progress(u64) => progress,
///         Completed(String) => completed,
///     }
/// }
///
/// let listeners = UploadListeners::default()
///     .progress(|bytes: u64| println!("{bytes} bytes"))
///     .completed(|name: String| println!("{name} done"));
/// # let _ = listeners;
/// ```
///
/// The generated struct derives `Default` (no listeners) and `Clone`, and
/// carries one builder method per slot; registering the same slot twice keeps
/// only the most recent listener.
#[macro_export]
macro_rules! listener_set {
    (
        $(#[$meta:meta])*
        $evis:vis enum $event:ident => $svis:vis struct $set:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($ty:ty) => $slot:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $evis enum $event {
            $( $(#[$vmeta])* $variant($ty) ),+
        }

        #[derive(Default, Clone)]
        $svis struct $set {
            $( $slot: Option<$crate::Listener<$ty>> ),+
        }

        impl $set {
            $(
                /// Register a listener for this event. The most recent
                /// registration wins.
                $svis fn $slot(mut self, listener: impl $crate::IntoListener<$ty>) -> Self {
                    self.$slot = Some($crate::IntoListener::into_listener(listener));
                    self
                }
            )+
        }

        impl $crate::ListenerSet for $set {
            type Event = $event;

            fn dispatch(&self, event: $event) -> bool {
                match event {
                    $(
                        $event::$variant(value) => match &self.$slot {
                            Some(listener) => {
                                listener.call(value);
                                true
                            }
                            None => false,
                        }
                    ),+
                }
            }
        }
    };
}
