//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or keep them separate.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `xing-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown terminal '{0}' (expected A, B, C, or D)")]
    UnknownTerminal(char),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `xing-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;
