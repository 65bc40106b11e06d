//! Error types for engine operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Grid model error: {0}")]
    Model(#[from] grid_model::GridModelError),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
