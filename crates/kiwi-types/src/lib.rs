//! Domain types for Kiwi.
//!
//! This crate provides the values shared by the storage and alerting crates.
//! It has no knowledge of transports; it only defines what is stored and what
//! is alerted on.
//!
//! # Key Types
//!
//! - [`Depot`]: The aggregate persisted as one opaque blob per identifier
//! - [`FloatingAverage`]: One evaluated snapshot: asset, quote, average, threshold
//! - [`Recommendation`]: Buy or sell, derived from a snapshot

pub mod average;
pub mod depot;
pub mod error;

pub use average::{FloatingAverage, Recommendation};
pub use depot::{Depot, MAX_DEPOT_SIZE};
pub use error::{ConfigError, TypeError, TypeResult};
