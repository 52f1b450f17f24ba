//! The per-vehicle movement state machine.

use std::fmt;

/// Lifecycle state of one vehicle.
///
/// ```text
/// Ready → Running → Moved → Running → Moved → … → Finished
/// ```
///
/// - `Ready`: path computed, not yet on the grid.
/// - `Running`: a step's lock handoff is in progress.
/// - `Moved`: a step has been committed; the vehicle waits for the renderer
///   to consume the frame before advancing.  The frame driver flips `Moved`
///   back to `Running` when it presents a frame.
/// - `Finished`: the sentinel was reached; terminal, all resources released.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleState {
    Ready,
    Running,
    Moved,
    Finished,
}

impl VehicleState {
    /// `true` once the vehicle will never run again.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self == VehicleState::Finished
    }
}

impl fmt::Display for VehicleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VehicleState::Ready => "ready",
            VehicleState::Running => "running",
            VehicleState::Moved => "moved",
            VehicleState::Finished => "finished",
        };
        f.write_str(s)
    }
}
