use std::sync::{Arc, Mutex};

/// Accumulate/check pair: the first closure records values, the second drains
/// and returns everything recorded since the last check.
#[allow(unused)]
pub fn capture<T: Send + Sync + 'static>() -> (Box<dyn Fn(T) + Send + Sync>, Box<dyn Fn() -> Vec<T> + Send + Sync>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let accumulate = {
        let seen = seen.clone();
        Box::new(move |value: T| {
            seen.lock().unwrap().push(value);
        })
    };

    let check = Box::new(move || {
        let seen: Vec<T> = seen.lock().unwrap().drain(..).collect();
        seen
    });

    (accumulate, check)
}
