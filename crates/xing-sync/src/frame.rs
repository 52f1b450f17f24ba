//! The renderer's "frame drawn" broadcast.

use parking_lot::{Condvar, Mutex};

/// A process-wide generation counter broadcast once per presented frame.
///
/// Every vehicle in state `Moved` waits for the generation to advance before
/// starting its next step, which gives the renderer a first-class veto over
/// simulation speed.  A condvar must not be shared across mutexes, so rather
/// than waiting on a global condvar under each vehicle's own lock, waiters
/// record the generation they have seen, check their own state, and then
/// block here until the counter moves past it — a bump between the check and
/// the wait makes [`FrameSignal::wait_beyond`] return immediately, so no
/// wakeup is lost.
pub struct FrameSignal {
    generation: Mutex<u64>,
    presented:  Condvar,
}

impl FrameSignal {
    pub fn new() -> Self {
        FrameSignal {
            generation: Mutex::new(0),
            presented:  Condvar::new(),
        }
    }

    /// The current frame generation.
    pub fn generation(&self) -> u64 {
        *self.generation.lock()
    }

    /// Mark one frame as drawn: advance the generation and wake all waiters.
    pub fn present(&self) {
        let mut generation = self.generation.lock();
        *generation += 1;
        self.presented.notify_all();
    }

    /// Block until the generation exceeds `seen`; returns the new value.
    pub fn wait_beyond(&self, seen: u64) -> u64 {
        let mut generation = self.generation.lock();
        while *generation <= seen {
            self.presented.wait(&mut generation);
        }
        *generation
    }
}

impl Default for FrameSignal {
    fn default() -> Self {
        Self::new()
    }
}
