//! Shutdown latch coordinating core threads.

use std::sync::{Condvar, Mutex};

/// A latch with two states, `Open` and `Ending`. Transitions are one-way:
/// once `Ending`, every current and future [`Barrier::wait`] returns
/// promptly.
#[derive(Debug, Default)]
pub struct Barrier {
    ending: Mutex<bool>,
    cond: Condvar,
}

impl Barrier {
    /// Construct a new barrier in the `Open` state.
    pub fn new() -> Self {
        Barrier::default()
    }

    /// Transition `Open` -> `Ending`. Idempotent.
    pub fn notify_end(&self) {
        let mut ending = self.ending.lock().unwrap();
        if !*ending {
            *ending = true;
            self.cond.notify_all();
        }
    }

    /// Return immediately if `Ending`, otherwise block until [`notify_end`](Self::notify_end).
    pub fn wait(&self) {
        let mut ending = self.ending.lock().unwrap();
        while !*ending {
            ending = self.cond.wait(ending).unwrap();
        }
    }

    /// Non-blocking check of the current state.
    pub fn is_ending(&self) -> bool {
        *self.ending.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn wait_returns_immediately_once_ending() {
        let barrier = Barrier::new();
        assert!(!barrier.is_ending());
        barrier.notify_end();
        assert!(barrier.is_ending());
        barrier.wait();
        barrier.wait();
    }

    #[test]
    fn notify_end_is_idempotent() {
        let barrier = Barrier::new();
        barrier.notify_end();
        barrier.notify_end();
        assert!(barrier.is_ending());
    }

    #[test]
    fn waiters_wake_on_notify() {
        let barrier = Arc::new(Barrier::new());
        let waiter = Arc::clone(&barrier);
        let handle = std::thread::spawn(move || waiter.wait());

        std::thread::sleep(Duration::from_millis(20));
        barrier.notify_end();

        handle.join().expect("waiter thread should join promptly");
    }
}
