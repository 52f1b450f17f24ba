//! `xing-map` — static map data for the crossing simulator.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                       |
//! |-----------|----------------------------------------------------------------|
//! | [`path`]  | `PathTable` — ordered cell sequences per (origin, destination) |
//! | [`zones`] | `ZoneMap` — entrance / exit / interior classification          |
//! | [`error`] | `PathError`, `PathResult<T>`                                   |
//!
//! # The standard map
//!
//! A 7×7 grid with one road per compass edge meeting in a central crossroad.
//! Terminals `A`–`D` sit at the outer ends of the four roads.  Each road is
//! one-way per direction (inbound and outbound lanes use different rows or
//! columns), so two vehicles can never meet head-on outside the crossroad.
//!
//! All map data is fixed and shared read-only by every vehicle — no locking
//! is needed to consult it.

pub mod error;
pub mod path;
pub mod zones;

#[cfg(test)]
mod tests;

/// Rows in the standard map grid.
pub const MAP_ROWS: usize = 7;
/// Columns in the standard map grid.
pub const MAP_COLS: usize = 7;

pub use error::{PathError, PathResult};
pub use path::PathTable;
pub use zones::ZoneMap;
