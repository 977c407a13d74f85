use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("failed to encode depot {id}: {reason}")]
    Encode { id: String, reason: String },

    #[error("failed to decode depot: {0}")]
    Decode(String),
}

pub type TypeResult<T> = Result<T, TypeError>;

/// Errors from loading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(String),

    #[error("invalid configuration: {field} must not be empty")]
    Empty { field: &'static str },
}
