use tracing::{debug, warn};

use crate::config::BucketConfig;
use crate::content::BinaryContent;
use crate::error::{StoreError, StoreResult};
use crate::traits::{ContentStore, ObjectMetadata, ObjectTransport, PutObjectRequest};

/// Content store backed by a single bucket of an object transport.
pub struct BinaryBucket<T> {
    transport: T,
    bucket_name: String,
}

impl<T: ObjectTransport> BinaryBucket<T> {
    pub fn new(transport: T, bucket_name: impl Into<String>) -> Self {
        Self {
            transport,
            bucket_name: bucket_name.into(),
        }
    }

    pub fn from_config(transport: T, config: &BucketConfig) -> Self {
        Self::new(transport, config.bucket_name.clone())
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: ObjectTransport> ContentStore for BinaryBucket<T> {
    fn store_content(&self, content: &BinaryContent) -> StoreResult<()> {
        content.validate()?;

        let request = PutObjectRequest {
            bucket: self.bucket_name.clone(),
            key: content.key().to_string(),
            bytes: content.bytes().to_vec(),
            metadata: ObjectMetadata::describe(content.bytes(), content.content_type()),
        };
        debug!(
            bucket = %self.bucket_name,
            key = content.key(),
            len = content.len(),
            checksum = %request.metadata.content_checksum,
            "put object"
        );

        self.transport.put(request).map_err(|e| {
            warn!(bucket = %self.bucket_name, key = content.key(), error = %e, "put failed");
            StoreError::StoreFailed {
                bytes: content.bytes().to_vec(),
                key: content.key().to_string(),
                bucket: self.bucket_name.clone(),
            }
        })
    }

    fn retrieve_content_for(&self, key: &str) -> StoreResult<Vec<u8>> {
        if key.is_empty() {
            return Err(StoreError::InvalidInput("key must not be empty".into()));
        }
        debug!(bucket = %self.bucket_name, key, "get object");

        self.transport.get(&self.bucket_name, key).map_err(|e| {
            warn!(bucket = %self.bucket_name, key, error = %e, "get failed");
            StoreError::LoadFailed {
                key: key.to_string(),
                bucket: self.bucket_name.clone(),
            }
        })
    }

    fn exists(&self, key: &str) -> StoreResult<bool> {
        self.transport.exists(&self.bucket_name, key).map_err(|e| {
            warn!(bucket = %self.bucket_name, key, error = %e, "existence check failed");
            StoreError::ExistenceCheckFailed {
                key: key.to_string(),
                bucket: self.bucket_name.clone(),
            }
        })
    }
}

impl<T> std::fmt::Debug for BinaryBucket<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryBucket")
            .field("bucket_name", &self.bucket_name)
            .finish_non_exhaustive()
    }
}
