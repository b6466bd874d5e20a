//! Error types for simulation runs.

use thiserror::Error;

/// Errors encountered while preparing or running a simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("shape mismatch: {what}")]
    ShapeMismatch { what: &'static str },

    #[error("model error: {0}")]
    Model(#[from] cf_model::ModelError),
}

pub type SimResult<T> = Result<T, SimError>;
