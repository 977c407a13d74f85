pub use kiwi_types::ConfigError;
use thiserror::Error;

/// Errors from alert operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlertError {
    /// The environment variable naming the topic is not set.
    #[error("notification topic variable [{variable}] is not set")]
    MissingTopic { variable: String },

    #[error("snapshot for [{asset}] is missing {field}")]
    IncompleteSnapshot { asset: String, field: &'static str },

    #[error("invalid decimal [{value}] in {field} of [{asset}]")]
    InvalidDecimal {
        asset: String,
        field: &'static str,
        value: String,
    },

    #[error("arithmetic overflow evaluating [{asset}]")]
    Overflow { asset: String },

    #[error("Failed to publish alert to topic [{topic}]")]
    PublishFailed { topic: String },
}

pub type AlertResult<T> = Result<T, AlertError>;

/// Errors raised by a notification transport.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotificationError {
    #[error("topic not found: {0}")]
    TopicNotFound(String),

    #[error("notification transport unavailable: {0}")]
    Unavailable(String),
}
