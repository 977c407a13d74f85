use std::sync::Arc;

use crate::checksum::ContentChecksum;
use crate::content::BinaryContent;
use crate::error::{StoreResult, TransportResult};

/// Metadata sent alongside every put.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectMetadata {
    pub content_type: String,
    pub content_length: u64,
    pub content_checksum: ContentChecksum,
}

impl ObjectMetadata {
    /// Derive the metadata of a payload.
    pub fn describe(bytes: &[u8], content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            content_length: bytes.len() as u64,
            content_checksum: ContentChecksum::compute(bytes),
        }
    }
}

/// A single put against a bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PutObjectRequest {
    pub bucket: String,
    pub key: String,
    pub bytes: Vec<u8>,
    pub metadata: ObjectMetadata,
}

/// Raw object-storage client (an S3-style bucket API).
///
/// Kiwi treats implementations as opaque transport: no method is retried and
/// no error is interpreted beyond being reported. Implementations decide their
/// own consistency and timeout behaviour.
pub trait ObjectTransport: Send + Sync {
    /// Check whether `key` exists in `bucket`.
    fn exists(&self, bucket: &str, key: &str) -> TransportResult<bool>;

    /// Write an object, replacing any object already stored at the key.
    fn put(&self, request: PutObjectRequest) -> TransportResult<()>;

    /// Read the bytes stored at `key`.
    fn get(&self, bucket: &str, key: &str) -> TransportResult<Vec<u8>>;
}

impl<T: ObjectTransport + ?Sized> ObjectTransport for Arc<T> {
    fn exists(&self, bucket: &str, key: &str) -> TransportResult<bool> {
        (**self).exists(bucket, key)
    }

    fn put(&self, request: PutObjectRequest) -> TransportResult<()> {
        (**self).put(request)
    }

    fn get(&self, bucket: &str, key: &str) -> TransportResult<Vec<u8>> {
        (**self).get(bucket, key)
    }
}

/// Validated key/blob storage.
///
/// All implementations must satisfy these invariants:
/// - Invalid input is rejected before the transport is touched.
/// - Each call makes at most one transport call.
/// - Transport failures surface as a [`StoreError`](crate::StoreError) whose
///   message names the operation, the key, and the bucket.
pub trait ContentStore: Send + Sync {
    /// Store content under its key, replacing any previous object.
    fn store_content(&self, content: &BinaryContent) -> StoreResult<()>;

    /// Retrieve the raw bytes stored under `key`.
    fn retrieve_content_for(&self, key: &str) -> StoreResult<Vec<u8>>;

    /// Check whether an object is stored under `key`.
    fn exists(&self, key: &str) -> StoreResult<bool>;
}
