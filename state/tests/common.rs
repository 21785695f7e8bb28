use std::sync::{Arc, Mutex};

/// Returns a recording listener and a function which drains everything it has recorded so far
#[allow(unused)]
pub fn change_watcher<T: Send + Sync + 'static>() -> (impl Fn(T) + Send + Sync + 'static, impl Fn() -> Vec<T>) {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let watcher = {
        let changes = changes.clone();
        move |value: T| changes.lock().unwrap().push(value)
    };

    let check = move || changes.lock().unwrap().drain(..).collect::<Vec<T>>();

    (watcher, check)
}

/// A shared log that several listeners can append labelled entries to
#[allow(unused)]
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

#[allow(unused)]
impl CallLog {
    pub fn push(&self, entry: impl Into<String>) { self.0.lock().unwrap().push(entry.into()) }

    pub fn take(&self) -> Vec<String> { self.0.lock().unwrap().drain(..).collect() }
}
