use xing_core::{CoreError, VehicleId};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("fleet configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("vehicle {0} not found in the registry")]
    VehicleNotFound(VehicleId),

    #[error("failed to spawn vehicle thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("vehicle thread '{0}' panicked")]
    AgentPanic(String),
}

pub type SimResult<T> = Result<T, SimError>;
