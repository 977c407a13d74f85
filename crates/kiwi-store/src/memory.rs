use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{TransportError, TransportResult};
use crate::traits::{ObjectMetadata, ObjectTransport, PutObjectRequest};

#[derive(Clone, Debug)]
struct StoredEntry {
    bytes: Vec<u8>,
    metadata: ObjectMetadata,
}

/// In-memory, HashMap-based object transport.
///
/// Intended for tests and embedding. Buckets spring into existence on first
/// put. Like a real bucket it verifies the declared content length and
/// checksum before accepting a put.
pub struct InMemoryObjectTransport {
    objects: RwLock<HashMap<(String, String), StoredEntry>>,
}

impl InMemoryObjectTransport {
    /// Create a new empty transport.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of objects across all buckets.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no object is stored.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Metadata recorded with the object at `key`, if any.
    pub fn metadata(&self, bucket: &str, key: &str) -> Option<ObjectMetadata> {
        let map = self.objects.read().expect("lock poisoned");
        map.get(&(bucket.to_string(), key.to_string()))
            .map(|entry| entry.metadata.clone())
    }

    /// Remove all objects.
    pub fn clear(&self) {
        self.objects.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryObjectTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectTransport for InMemoryObjectTransport {
    fn exists(&self, bucket: &str, key: &str) -> TransportResult<bool> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map.contains_key(&(bucket.to_string(), key.to_string())))
    }

    fn put(&self, request: PutObjectRequest) -> TransportResult<()> {
        let PutObjectRequest {
            bucket,
            key,
            bytes,
            metadata,
        } = request;

        let actual = bytes.len() as u64;
        if metadata.content_length != actual {
            return Err(TransportError::LengthMismatch {
                key,
                declared: metadata.content_length,
                actual,
            });
        }
        if !metadata.content_checksum.verify(&bytes) {
            return Err(TransportError::ChecksumMismatch {
                key,
                declared: metadata.content_checksum.to_hex(),
                computed: crate::ContentChecksum::compute(&bytes).to_hex(),
            });
        }

        let mut map = self.objects.write().expect("lock poisoned");
        map.insert((bucket, key), StoredEntry { bytes, metadata });
        Ok(())
    }

    fn get(&self, bucket: &str, key: &str) -> TransportResult<Vec<u8>> {
        let map = self.objects.read().expect("lock poisoned");
        map.get(&(bucket.to_string(), key.to_string()))
            .map(|entry| entry.bytes.clone())
            .ok_or_else(|| TransportError::NoSuchKey {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }
}

impl std::fmt::Debug for InMemoryObjectTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryObjectTransport")
            .field("object_count", &count)
            .finish()
    }
}
