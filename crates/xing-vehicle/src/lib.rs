//! `xing-vehicle` — the per-vehicle movement protocol.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`info`]     | `VehicleInfo` / `VehicleCore` — shared per-vehicle state   |
//! | [`agent`]    | `VehicleAgent` — the movement protocol loop                |
//! | [`registry`] | `VehicleRegistry` — fleet collection + fan-out locking     |
//!
//! # The movement protocol
//!
//! One thread per vehicle, all peers.  A vehicle advances one cell per
//! presented frame:
//!
//! 1. Publish the intended next cell (`position_next`), broadcast
//!    `next_published`.
//! 2. If the next cell is the off-grid sentinel, the path is complete:
//!    release the held cell, broadcast `moved`, finish.
//! 3. Otherwise retry until movable: release the vehicle lock, acquire the
//!    admission gate if stepping into a crossroad entrance, acquire the next
//!    cell's lock, re-take the vehicle lock.  If not movable, undo both
//!    acquisitions and park on `became_movable`.
//! 4. Commit: release the gate on stepping into an exit cell, then release
//!    the previous cell only after the new one is held — no observer can
//!    ever see both cells free mid-transition.
//! 5. Mark `Moved`, broadcast `moved`, and wait for the next frame.
//!
//! Blocking is the only failure mode; every wait is resolved by another
//! thread's progress.  Wake order among vehicles parked on the same cell is
//! whatever the scheduler gives: the broadcast-then-recheck retry loop makes
//! no fairness promise.

pub mod agent;
pub mod info;
pub mod registry;


pub use agent::{StepOutcome, VehicleAgent};
pub use info::{VehicleCore, VehicleInfo};
pub use registry::{LockedVehicle, VehicleRegistry};
