//! One-shot fleet startup countdown.

use parking_lot::{Condvar, Mutex};

/// A countdown latch: `wait_ready` blocks until `count` parties have called
/// [`StartLatch::arrive`].
///
/// Used as the explicit startup barrier between the fleet spawner and its
/// vehicle agents: each agent arrives after registering itself, and nobody
/// moves until the whole fleet has registered.
pub struct StartLatch {
    remaining: Mutex<usize>,
    released:  Condvar,
}

impl StartLatch {
    pub fn new(count: usize) -> Self {
        StartLatch {
            remaining: Mutex::new(count),
            released:  Condvar::new(),
        }
    }

    /// Record one arrival.  The final arrival wakes all waiters.
    ///
    /// # Panics
    /// Panics on more arrivals than the latch was created for.
    pub fn arrive(&self) {
        let mut remaining = self.remaining.lock();
        assert!(*remaining > 0, "start latch received more arrivals than expected");
        *remaining -= 1;
        if *remaining == 0 {
            self.released.notify_all();
        }
    }

    /// Block until every expected party has arrived.
    pub fn wait_ready(&self) {
        let mut remaining = self.remaining.lock();
        while *remaining > 0 {
            self.released.wait(&mut remaining);
        }
    }
}
