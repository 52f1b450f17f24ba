//! Fleet-level configuration.

use std::time::Duration;

use crate::error::CoreError;

/// Top-level configuration for one fleet run.
///
/// Typically constructed via `Default` and adjusted field-by-field by the
/// application crate before being handed to the fleet builder.
#[derive(Clone, Debug)]
pub struct FleetConfig {
    /// Maximum number of vehicles simultaneously admitted past a crossroad
    /// entrance.  The default of 7 is one below the standard map's 8-cell
    /// interior ring, the largest capacity that cannot fill the ring into a
    /// circular wait.
    pub gate_capacity: usize,

    /// Pause between presented frames.  The renderer's backpressure: no
    /// vehicle commits more than one step per presented frame.
    pub frame_interval: Duration,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            gate_capacity:  7,
            frame_interval: Duration::from_millis(10),
        }
    }
}

impl FleetConfig {
    /// Reject configurations the protocol cannot run under.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.gate_capacity == 0 {
            return Err(CoreError::Config(
                "gate_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
