use std::sync::{Arc, RwLock};

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A reactive cell that holds a current value and notifies subscribers when
/// a new value is pushed.
///
/// Cells replay their current value to new subscribers: subscribing invokes
/// the callback once immediately, then once per subsequent push. Delivery is
/// synchronous and in subscription order.
pub struct Cell<T> {
    value: Arc<RwLock<T>>,
    subscribers: Arc<RwLock<Vec<Subscriber<T>>>>,
}

impl<T: Clone + Send + Sync + 'static> Cell<T> {
    /// Create a new cell seeded with the given initial value.
    pub fn new(initial: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get a clone of the current value.
    pub fn value(&self) -> T {
        self.value.read().unwrap().clone()
    }

    /// Read the current value with a function without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.value.read().unwrap();
        f(&*value)
    }

    /// Push a new value, synchronously notifying all current subscribers
    /// before returning.
    ///
    /// The push is unconditional: subscribers are notified even when the new
    /// value equals the old one.
    pub fn next(&self, value: T) {
        *self.value.write().unwrap() = value.clone();
        self.notify(&value);
    }

    /// Update the value in place, then notify subscribers. Counts as a
    /// single push.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut value = self.value.write().unwrap();
        f(&mut *value);
        let current = value.clone();
        drop(value); // Release the write lock before notifying
        self.notify(&current);
    }

    /// Subscribe to this cell.
    ///
    /// The callback is invoked once immediately with the current value, then
    /// again for every subsequent push.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let callback: Subscriber<T> = Arc::new(callback);
        self.subscribers.write().unwrap().push(Arc::clone(&callback));

        // Replay the current value to the new subscriber
        let current = self.value.read().unwrap().clone();
        callback(&current);
    }

    fn notify(&self, value: &T) {
        // Snapshot the subscriber list so no lock is held while callbacks
        // run; a callback may push into this cell again re-entrantly.
        let subscribers: Vec<Subscriber<T>> = self.subscribers.read().unwrap().clone();
        for subscriber in &subscribers {
            subscriber(value);
        }
    }
}

impl<T> Clone for Cell<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn cell_read_write() {
        let cell = Cell::new(0);
        assert_eq!(cell.value(), 0);

        cell.next(42);
        assert_eq!(cell.value(), 42);

        cell.update(|n| *n += 10);
        assert_eq!(cell.value(), 52);
        assert_eq!(cell.with(|n| n * 2), 104);
    }

    #[test]
    fn cell_replays_current_value_on_subscribe() {
        let cell = Cell::new("initial");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();

        cell.subscribe(move |value| {
            seen_clone.lock().unwrap().push(*value);
        });

        assert_eq!(*seen.lock().unwrap(), vec!["initial"]);

        cell.next("changed");
        assert_eq!(*seen.lock().unwrap(), vec!["initial", "changed"]);
    }

    #[test]
    fn cell_notifies_in_subscription_order() {
        let cell = Cell::new(0);
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = order.clone();
            cell.subscribe(move |_| order.lock().unwrap().push(tag));
        }
        order.lock().unwrap().clear();

        cell.next(1);
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn cell_pushes_equal_values() {
        let cell = Cell::new(7);
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        cell.subscribe(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(count.load(Ordering::SeqCst), 1);

        cell.next(7);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn cell_allows_reentrant_push() {
        let cell = Cell::new(0);
        let nested = cell.clone();

        cell.subscribe(move |value| {
            if *value == 1 {
                nested.next(2);
            }
        });

        cell.next(1);
        assert_eq!(cell.value(), 2);
    }
}
