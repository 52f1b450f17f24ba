//! `xing-core` — foundational types for the `rust_xing` crossing simulator.
//!
//! This crate is a dependency of every other `xing-*` crate.  It intentionally
//! has no `xing-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`cell`]     | `Cell` — one grid coordinate, plus the off-grid sentinel |
//! | [`terminal`] | `Terminal` — the four road endpoints A–D              |
//! | [`ids`]      | `VehicleId`                                           |
//! | [`state`]    | `VehicleState` — the READY → FINISHED state machine   |
//! | [`config`]   | `FleetConfig` — gate capacity, frame pacing           |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod state;
pub mod terminal;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::FleetConfig;
pub use error::{CoreError, CoreResult};
pub use ids::VehicleId;
pub use state::VehicleState;
pub use terminal::Terminal;
