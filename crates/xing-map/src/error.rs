use xing_core::{Cell, Terminal};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("route {origin}→{destination} step {step}: cell {cell} is outside the {rows}×{cols} grid")]
    OutOfBounds {
        origin:      Terminal,
        destination: Terminal,
        step:        usize,
        cell:        Cell,
        rows:        usize,
        cols:        usize,
    },

    #[error("route {origin}→{destination} visits cell {cell} twice")]
    RepeatedCell {
        origin:      Terminal,
        destination: Terminal,
        cell:        Cell,
    },

    #[error("route {origin}→{destination} jumps from {from} to {to} (steps must be adjacent)")]
    NonAdjacentStep {
        origin:      Terminal,
        destination: Terminal,
        from:        Cell,
        to:          Cell,
    },

    #[error("identity route {0}→{0} must be empty")]
    NonEmptyIdentity(Terminal),
}

pub type PathResult<T> = Result<T, PathError>;
