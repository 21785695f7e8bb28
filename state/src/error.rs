use std::any::Any;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("{} of {notified} listeners panicked", .failures.len())]
    ListenersPanicked { notified: usize, failures: Vec<ListenerPanic> },
}

/// A listener that panicked during notification, identified by its position in the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerPanic {
    pub index: usize,
    pub message: String,
}

impl std::fmt::Display for ListenerPanic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "listener {}: {}", self.index, self.message) }
}

impl ListenerPanic {
    pub(crate) fn from_payload(index: usize, payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => message.to_string(),
                Err(_) => "<non-string panic payload>".to_string(),
            },
        };
        Self { index, message }
    }
}
