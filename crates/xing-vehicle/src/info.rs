//! Shared per-vehicle state.

use parking_lot::{Condvar, Mutex};
use xing_core::{Cell, Terminal, VehicleId, VehicleState};

/// The mutable fields of one vehicle, all guarded by [`VehicleInfo::core`].
#[derive(Debug)]
pub struct VehicleCore {
    pub state: VehicleState,

    /// Currently occupied cell, or the sentinel before the first step and
    /// after the last.
    pub position: Cell,

    /// The cell this vehicle intends to occupy next.  Published before the
    /// corresponding lock acquisition so observers never see a stale preview.
    pub position_next: Cell,

    /// When `false` the vehicle must not advance even if it could take the
    /// needed locks.  The external controller's sole intervention point.
    pub movable: bool,

    /// Ordered log of committed positions — matches the path table sequence
    /// exactly, with no skipped or repeated step.
    pub trail: Vec<Cell>,
}

/// One vehicle's identity and synchronized state.
///
/// The identity fields are immutable after creation; everything mutable
/// lives in [`VehicleCore`] under the `core` mutex.  The three condvars are
/// scoped to that mutex and to this vehicle only — they are embedded by
/// value so the info is never observable without its synchronization state.
pub struct VehicleInfo {
    pub id:          VehicleId,
    pub origin:      Terminal,
    pub destination: Terminal,

    pub core: Mutex<VehicleCore>,

    /// Broadcast whenever `position_next` changes.
    pub next_published: Condvar,
    /// Broadcast whenever the vehicle commits a move or terminates.
    pub moved: Condvar,
    /// Broadcast whenever `movable` flips true.
    pub became_movable: Condvar,
}

impl VehicleInfo {
    pub fn new(id: VehicleId, origin: Terminal, destination: Terminal) -> Self {
        VehicleInfo {
            id,
            origin,
            destination,
            core: Mutex::new(VehicleCore {
                state:         VehicleState::Ready,
                position:      Cell::OFF_GRID,
                position_next: Cell::OFF_GRID,
                movable:       true,
                trail:         Vec::new(),
            }),
            next_published: Condvar::new(),
            moved:          Condvar::new(),
            became_movable: Condvar::new(),
        }
    }

    /// Flip the movable flag, waking the agent if it was parked.
    pub fn set_movable(&self, movable: bool) {
        let mut core = self.core.lock();
        core.movable = movable;
        if movable {
            self.became_movable.notify_all();
        }
    }
}
