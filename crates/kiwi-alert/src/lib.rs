//! Floating-average alerts for Kiwi.
//!
//! Turns [`FloatingAverage`](kiwi_types::FloatingAverage) snapshots into one
//! buy/sell recommendation message and publishes it to a notification topic.
//!
//! - [`AlertEngine`] -- pure decision and formatting, no I/O
//! - [`TopicAlert`] -- resolves the topic from the environment on every call and
//!   publishes through a [`NotificationTransport`]
//!
//! An alert call with no snapshots does nothing at all. Any other call either
//! publishes exactly one message or fails before publishing anything.

pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod memory;
pub mod publisher;
pub mod transport;

pub use config::AlertConfig;
pub use engine::{AlertEngine, SignalPolicy};
pub use env::{EnvironmentVariables, ProcessEnvironment, StaticEnvironment};
pub use error::{AlertError, AlertResult, ConfigError, NotificationError};
pub use memory::InMemoryNotificationTransport;
pub use publisher::{Alert, TopicAlert, DEFAULT_SUBJECT};
pub use transport::{NotificationTransport, PublishRequest};
