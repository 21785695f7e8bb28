/*!
A single observable value that notifies its listeners synchronously whenever it is written.

# Design requirements:
- One value, one guard. Reads and writes never observe a torn value.
- Listeners are called on the writing thread, in registration order, after the guard is released.
- Listeners are attach-only. There is no unsubscribe.
- A listener may subscribe further listeners to the same cell; they only see subsequent writes.
- A panicking listener does not stop the rest of the fan-out.

# Basic usage

```rust
use reactive_state::Reactive;
use std::sync::{Arc, Mutex};

let counter = Reactive::new(0);
let seen = Arc::new(Mutex::new(Vec::new()));
{
    let seen = seen.clone();
    counter.subscribe(move |value: i32| seen.lock().unwrap().push(value));
}

counter.set(1);
counter.set(counter.get() + 1);

assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
assert_eq!(counter.get(), 2);
```

# Channel listeners

```rust
use reactive_state::Reactive;

let name = Reactive::new("Buffy".to_string());
let (tx, rx) = std::sync::mpsc::channel();
name.subscribe(tx);

name.set("Willow".to_string());
assert_eq!(rx.try_recv().unwrap(), "Willow");
```
*/

mod error;
mod listener;
mod reactive;

pub use error::*;
pub use listener::*;
pub use reactive::*;
