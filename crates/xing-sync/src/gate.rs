//! The crossroad admission gate.

use parking_lot::{Condvar, Mutex};

/// A bounded counting resource limiting how many vehicles may simultaneously
/// be inside the crossroad interior.
///
/// A slot is acquired on stepping into an entrance cell and released on
/// stepping into an exit cell; entry and exit are paired exactly once per
/// crossroad traversal.
pub struct AdmissionGate {
    capacity: usize,
    in_use:   Mutex<usize>,
    freed:    Condvar,
}

impl AdmissionGate {
    pub fn new(capacity: usize) -> Self {
        AdmissionGate {
            capacity,
            in_use: Mutex::new(0),
            freed: Condvar::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots currently held.  Observational only; the value may be stale by
    /// the time the caller looks at it, but it never exceeds `capacity`.
    pub fn in_use(&self) -> usize {
        *self.in_use.lock()
    }

    /// Acquire one slot, blocking while the gate is at capacity.
    pub fn enter(&self) {
        let mut held = self.in_use.lock();
        while *held == self.capacity {
            self.freed.wait(&mut held);
        }
        *held += 1;
    }

    /// Release one slot, waking one blocked enterer.
    ///
    /// # Panics
    /// Panics if no slot is held — releasing a slot that was never acquired
    /// is a protocol violation.
    pub fn leave(&self) {
        let mut held = self.in_use.lock();
        assert!(*held > 0, "admission gate released more often than acquired");
        *held -= 1;
        self.freed.notify_one();
    }
}
