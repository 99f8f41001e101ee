/*!
Per-call typed event observation for service callbacks.

A function is *bound* so that every invocation receives a fresh [`Observer`];
inside, it may [`emit`](Observer::emit) typed named events which outside
callers opt into observing. Dispatch is direct and synchronous, at most one
listener per event, no shared state between invocations - the whole system is
a thin wrapper, and an un-observed call behaves exactly like calling the
wrapped function directly.

# Basic usage

```rust
use service_observer::{Observer, bind};

service_observer::listener_set! {
    /// Events emitted while a payload uploads.
    pub enum UploadEvent => pub struct UploadListeners {
        Progress(u64) => progress,
        Completed(String) => completed,
    }
}

let upload = bind(|observer: Observer<UploadListeners>, bytes: u64| {
    observer.emit(UploadEvent::Progress(bytes / 2));
    observer.emit(UploadEvent::Progress(bytes));
    observer.emit(UploadEvent::Completed("payload".to_string()));
    bytes
});

// Un-observed: emits are silent no-ops, the result passes through.
assert_eq!(upload.call(10), 10);

// Observed variant: a fresh observer per call, seeded with these listeners.
let observed = upload.observe(UploadListeners::default().progress(|n: u64| println!("{n} bytes")));
assert_eq!(observed.call(10), 10);
```

# Map-keyed listeners

When every event in a family carries the same value type, a runtime-keyed
[`ListenerMap`] works in place of a declared record:

```rust
use service_observer::{ListenerMap, Observer};

let listeners = ListenerMap::new().listen("progress", |pct: u32| println!("{pct}%"));
let observer = Observer::with_listeners(listeners);
observer.emit(("progress", 50)).emit(("progress", 100));
observer.emit(("finished", 0)); // no listener registered - silently dropped
```
*/

mod bind;
mod listener;
mod macros;
mod map;
mod observer;

pub use bind::*;
pub use listener::*;
pub use map::*;
pub use observer::*;
