//! Point-in-time view of one vehicle, captured under fan-out locking.

use xing_core::{Cell, Terminal, VehicleId, VehicleState};
use xing_vehicle::{VehicleCore, VehicleInfo};

/// A copy of one vehicle's observable state at a frame boundary.
///
/// Captured while the vehicle's lock is held, so a frame's worth of
/// snapshots is mutually consistent: no vehicle moved between any two
/// captures of the same frame.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VehicleSnapshot {
    pub id:            VehicleId,
    pub origin:        Terminal,
    pub destination:   Terminal,
    pub state:         VehicleState,
    pub position:      Cell,
    pub position_next: Cell,
    pub movable:       bool,
}

impl VehicleSnapshot {
    pub fn capture(info: &VehicleInfo, core: &VehicleCore) -> Self {
        VehicleSnapshot {
            id:            info.id,
            origin:        info.origin,
            destination:   info.destination,
            state:         core.state,
            position:      core.position,
            position_next: core.position_next,
            movable:       core.movable,
        }
    }
}
