use std::sync::Arc;

/// A callback invoked with every value written to a [`Reactive`](crate::Reactive).
///
/// Cloning a `Listener` yields the same listener reference, so subscribing a clone
/// registers that listener again.
pub type Listener<T> = Arc<dyn Fn(T) + Send + Sync + 'static>;

/// Trait for types that can be converted into listeners.
pub trait IntoListener<T> {
    fn into_listener(self) -> Listener<T>;
}

// Closures - multi-threaded
impl<F, T> IntoListener<T> for F
where F: Fn(T) + Send + Sync + 'static
{
    fn into_listener(self) -> Listener<T> { Arc::new(self) }
}

impl<T> IntoListener<T> for Listener<T> {
    fn into_listener(self) -> Listener<T> { self }
}

impl<T> IntoListener<T> for std::sync::mpsc::Sender<T>
where T: Send + 'static
{
    fn into_listener(self) -> Listener<T> {
        // mpsc::Sender is Sync as of rust 1.72
        Arc::new(move |value| {
            let _ = self.send(value); // Receiver may be gone
        })
    }
}

#[cfg(feature = "tokio")]
impl<T> IntoListener<T> for tokio::sync::mpsc::UnboundedSender<T>
where T: Send + 'static
{
    fn into_listener(self) -> Listener<T> {
        Arc::new(move |value| {
            let _ = self.send(value); // Receiver may be gone
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_closure_listener() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let listener = {
            let seen = seen.clone();
            (move |value: u8| seen.lock().unwrap().push(value)).into_listener()
        };

        listener(1);
        listener(2);
        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_std_sender_ignores_dropped_receiver() {
        let (tx, rx) = std::sync::mpsc::channel::<u8>();
        let listener = tx.into_listener();

        listener(7);
        assert_eq!(rx.try_recv(), Ok(7));

        drop(rx);
        listener(8); // must not panic
    }

    #[test]
    #[cfg(feature = "tokio")]
    fn test_tokio_sender_listener() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<&str>();
        let listener = tx.into_listener();

        listener("a");
        listener("b");
        assert_eq!(rx.try_recv(), Ok("a"));
        assert_eq!(rx.try_recv(), Ok("b"));
        assert!(rx.try_recv().is_err());

        drop(rx);
        listener("c");
    }
}
