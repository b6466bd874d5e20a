//! Error types for model construction and discretization.

use cf_core::CfError;
use thiserror::Error;

/// Errors raised while building or discretizing a circuit model.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("invalid parameter: {what} (got {value})")]
    InvalidParameter { what: &'static str, value: f64 },

    #[error("numeric failure: {what}")]
    Numeric { what: &'static str },
}

pub type ModelResult<T> = Result<T, ModelError>;

impl From<CfError> for ModelError {
    fn from(e: CfError) -> Self {
        match e {
            CfError::NonFinite { context, value } => ModelError::InvalidParameter {
                what: context,
                value,
            },
            CfError::OutOfRange { context } => ModelError::InvalidParameter {
                what: context,
                value: f64::NAN,
            },
        }
    }
}
