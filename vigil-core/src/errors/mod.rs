//! Error types for the Vigil workspace, one enum per subsystem.

mod engine_error;
mod storage_error;
mod sweep_error;

pub use engine_error::EngineError;
pub use storage_error::StorageError;
pub use sweep_error::SweepError;

/// Result alias used across the workspace.
pub type VigilResult<T> = Result<T, VigilError>;

/// Top-level error aggregating the per-subsystem enums.
#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}
