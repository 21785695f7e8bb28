use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{error, trace};

use crate::{IntoListener, Listener, ListenerPanic, NotifyError};

/// A single mutable value which notifies its listeners synchronously on every write.
///
/// `Reactive` is a handle: clones share the same value and listener list, so a cell can be
/// handed to other threads or captured by its own listeners.
pub struct Reactive<T>(Arc<RwLock<State<T>>>);

struct State<T> {
    value: T,
    // registration order, duplicates allowed
    listeners: Vec<Listener<T>>,
}

impl<T> Clone for Reactive<T> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> Reactive<T> {
    /// Creates a new cell holding `initial`, with no listeners
    pub fn new(initial: T) -> Self { Self(Arc::new(RwLock::new(State { value: initial, listeners: Vec::new() }))) }

    /// Calls a closure with a borrow of the current value.
    ///
    /// The guard is held while `f` runs, so `f` must not write to or subscribe to this cell.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R { f(&self.read().value) }

    /// Registers a listener to be called with every subsequent value.
    ///
    /// The listener is not called with the current value. Registering the same listener twice
    /// means it is called twice per write. Safe to call from inside a listener of this cell;
    /// the new listener is first called for the next write.
    pub fn subscribe<L>(&self, listener: L)
    where L: IntoListener<T> {
        let mut state = self.write();
        state.listeners.push(listener.into_listener());
        trace!(listeners = state.listeners.len(), "Reactive::subscribe");
    }

    /// Number of registered listeners, counting duplicates
    pub fn listener_count(&self) -> usize { self.read().listeners.len() }

    // A poisoned guard still holds a whole value: the only code run under it is the
    // assignment and the listener snapshot, so recover instead of propagating.
    fn read(&self) -> RwLockReadGuard<'_, State<T>> { self.0.read().unwrap_or_else(PoisonError::into_inner) }

    fn write(&self) -> RwLockWriteGuard<'_, State<T>> { self.0.write().unwrap_or_else(PoisonError::into_inner) }
}

impl<T: Clone> Reactive<T> {
    /// Returns a clone of the current value
    pub fn get(&self) -> T { self.read().value.clone() }

    /// Replaces the value and notifies every listener registered before this call, in
    /// registration order, on the calling thread.
    ///
    /// A panicking listener is logged and skipped; the remaining listeners are still notified.
    pub fn set(&self, value: T) {
        let (notified, failures) = self.replace(value);
        for failure in &failures {
            error!(index = failure.index, notified, "Listener panicked: {}", failure.message);
        }
    }

    /// Like [`Reactive::set`], but reports panicking listeners to the caller instead of logging them
    pub fn try_set(&self, value: T) -> Result<(), NotifyError> {
        let (notified, failures) = self.replace(value);
        if failures.is_empty() { Ok(()) } else { Err(NotifyError::ListenersPanicked { notified, failures }) }
    }

    fn replace(&self, value: T) -> (usize, Vec<ListenerPanic>) {
        // Snapshot the listeners so they run without holding the guard
        let listeners = {
            let mut state = self.write();
            state.value = value.clone();
            state.listeners.clone()
        };
        trace!(listeners = listeners.len(), "Reactive::set notifying");

        let mut failures = Vec::new();
        // clone the value for each listener except the last one
        if let Some((last, rest)) = listeners.split_last() {
            for (index, listener) in rest.iter().enumerate() {
                let value = value.clone();
                if let Err(payload) = catch_unwind(AssertUnwindSafe(move || listener(value))) {
                    failures.push(ListenerPanic::from_payload(index, payload));
                }
            }
            if let Err(payload) = catch_unwind(AssertUnwindSafe(move || last(value))) {
                failures.push(ListenerPanic::from_payload(rest.len(), payload));
            }
        }
        (listeners.len(), failures)
    }
}

impl<T: fmt::Debug> fmt::Debug for Reactive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("Reactive").field("value", &state.value).field("listeners", &state.listeners.len()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Reactive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.with(|value| write!(f, "{}", value)) }
}
