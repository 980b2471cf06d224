use crate::stream::Cell;
use std::sync::Arc;

/// A derived stream that re-emits whenever any of its input cells emits.
///
/// On construction the projector is invoked once to seed the stream, so a
/// current value is always available to late subscribers. Every input push
/// re-invokes the projector synchronously; the projector reads whatever is
/// current at that moment, not the value carried by the triggering input.
pub struct CombineLatest<U> {
    output: Cell<U>,
}

impl<U: Clone + Send + Sync + 'static> CombineLatest<U> {
    /// Derive a stream from the given input cells and projector.
    pub fn new<T, F>(inputs: &[Cell<T>], project: F) -> Self
    where
        T: Clone + Send + Sync + 'static,
        F: Fn() -> U + Send + Sync + 'static,
    {
        let project = Arc::new(project);
        let output = Cell::new(project());

        for input in inputs {
            let output = output.clone();
            let project = Arc::clone(&project);
            input.subscribe(move |_| output.next(project()));
        }

        Self { output }
    }

    /// Get a clone of the most recently projected value.
    pub fn value(&self) -> U {
        self.output.value()
    }

    /// Read the most recently projected value without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&U) -> R) -> R {
        self.output.with(f)
    }

    /// Subscribe to this stream.
    ///
    /// Same replay semantics as [`Cell::subscribe`]: the callback is invoked
    /// once immediately with the current value, then once per re-projection.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&U) + Send + Sync + 'static,
    {
        self.output.subscribe(callback);
    }
}

impl<U> Clone for CombineLatest<U> {
    fn clone(&self) -> Self {
        Self {
            output: self.output.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn combine_seeds_from_projector() {
        let a = Cell::new(5);
        let b = Cell::new(10);

        let sum = CombineLatest::new(&[a.clone(), b.clone()], {
            let a = a.clone();
            let b = b.clone();
            move || a.value() + b.value()
        });

        assert_eq!(sum.value(), 15);
    }

    #[test]
    fn combine_reprojects_on_any_input() {
        let a = Cell::new(1);
        let b = Cell::new(2);

        let pair = CombineLatest::new(&[a.clone(), b.clone()], {
            let a = a.clone();
            let b = b.clone();
            move || (a.value(), b.value())
        });

        a.next(10);
        assert_eq!(pair.value(), (10, 2));

        b.next(20);
        assert_eq!(pair.value(), (10, 20));
        assert_eq!(pair.with(|(a, b)| a + b), 30);
    }

    #[test]
    fn combine_emits_synchronously_per_push() {
        let a = Cell::new(0);
        let b = Cell::new(0);

        let sum = CombineLatest::new(&[a.clone(), b.clone()], {
            let a = a.clone();
            let b = b.clone();
            move || a.value() + b.value()
        });

        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        sum.subscribe(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        // One replay on subscribe
        assert_eq!(count.load(Ordering::SeqCst), 1);

        a.next(1);
        b.next(2);
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert_eq!(sum.value(), 3);
    }

    #[test]
    fn combine_projector_reads_current_values() {
        let a = Cell::new(1);
        let b = Cell::new(1);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let product = CombineLatest::new(&[a.clone(), b.clone()], {
            let a = a.clone();
            let b = b.clone();
            move || a.value() * b.value()
        });

        let seen_clone = seen.clone();
        product.subscribe(move |value| {
            seen_clone.lock().unwrap().push(*value);
        });

        // Both inputs already changed by the time the projector runs for b
        a.next(3);
        b.next(4);
        assert_eq!(*seen.lock().unwrap(), vec![1, 3, 12]);
    }
}
