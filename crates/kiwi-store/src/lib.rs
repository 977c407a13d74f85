//! Binary object storage for Kiwi.
//!
//! This crate layers a validating content store over an opaque object
//! transport (an S3-style bucket client), and a typed depot repository over
//! the content store.
//!
//! # Layers
//!
//! - [`ObjectTransport`] -- the raw bucket client: `exists`, `put`, `get`
//! - [`ContentStore`] -- validated key/blob storage with deterministic errors,
//!   implemented by [`BinaryBucket`]
//! - [`DepotRepository`] -- loads and stores [`Depot`](kiwi_types::Depot)
//!   aggregates, implemented by [`BucketDepotRepository`]
//!
//! # Design Rules
//!
//! 1. Inputs are validated before any transport call.
//! 2. Every operation makes at most one transport call. No retries, no caching.
//! 3. Transport failures are translated once, at the operation that saw them,
//!    into a [`StoreError`] with a fixed message. The transport error itself is
//!    logged, never returned.
//! 4. A missing depot is `Ok(None)`, not an error, and costs no read.
//! 5. The store never interprets payloads; only the repository does.

pub mod bucket;
pub mod checksum;
pub mod config;
pub mod content;
pub mod error;
pub mod keys;
pub mod memory;
pub mod repository;
pub mod traits;

pub use bucket::BinaryBucket;
pub use checksum::ContentChecksum;
pub use config::BucketConfig;
pub use content::{BinaryContent, OCTET_STREAM};
pub use error::{
    ConfigError, RepositoryError, RepositoryResult, StoreError, StoreResult, TransportError,
    TransportResult,
};
pub use keys::{KeyProvider, PrefixKeyProvider};
pub use memory::InMemoryObjectTransport;
pub use repository::{BucketDepotRepository, DepotRepository};
pub use traits::{ContentStore, ObjectMetadata, ObjectTransport, PutObjectRequest};

#[cfg(test)]
mod testing;
