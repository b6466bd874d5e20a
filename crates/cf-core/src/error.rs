use thiserror::Error;

pub type CfResult<T> = Result<T, CfError>;

#[derive(Error, Debug)]
pub enum CfError {
    #[error("non-finite value for {context}: {value}")]
    NonFinite { context: &'static str, value: f64 },

    #[error("argument out of range: {context}")]
    OutOfRange { context: &'static str },
}
