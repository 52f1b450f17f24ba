//! `xing-sync` — the shared blocking primitives of the crossing protocol.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`grid`]  | `CellLockGrid` — one mutex per grid cell, RAII guards         |
//! | [`gate`]  | `AdmissionGate` — bounded counting resource for the crossroad |
//! | [`frame`] | `FrameSignal` — renderer's "frame drawn" broadcast            |
//! | [`latch`] | `StartLatch` — one-shot fleet startup countdown               |
//!
//! All waits are blocking (mutex + condvar), never spinning.  Misuse of a
//! primitive — releasing a gate slot that was never acquired, locking an
//! off-grid cell — is a protocol violation and panics: it indicates a logic
//! defect, not an expected runtime condition.

pub mod frame;
pub mod gate;
pub mod grid;
pub mod latch;


pub use frame::FrameSignal;
pub use gate::AdmissionGate;
pub use grid::{CellGuard, CellLockGrid};
pub use latch::StartLatch;
