use std::fmt;

pub use kiwi_types::ConfigError;
use thiserror::Error;

/// Errors from content store operations.
///
/// The `Display` text of every variant is part of the public contract; callers
/// and tests match on it verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Rejected before reaching the transport.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to store {} with key [{key}] to bucket [{bucket}]", SignedBytes(.bytes))]
    StoreFailed {
        bytes: Vec<u8>,
        key: String,
        bucket: String,
    },

    #[error("Failed to load object with key [{key}] from bucket [{bucket}]")]
    LoadFailed { key: String, bucket: String },

    #[error("Failed to check existence of object with key [{key}] in bucket [{bucket}]")]
    ExistenceCheckFailed { key: String, bucket: String },
}

/// Result alias for content store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by an object transport.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("no such key {key} in bucket {bucket}")]
    NoSuchKey { bucket: String, key: String },

    #[error("checksum mismatch for {key}: declared {declared}, computed {computed}")]
    ChecksumMismatch {
        key: String,
        declared: String,
        computed: String,
    },

    #[error("content length mismatch for {key}: declared {declared}, actual {actual}")]
    LengthMismatch {
        key: String,
        declared: u64,
        actual: u64,
    },

    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

pub type TransportResult<T> = Result<T, TransportError>;

/// Errors from depot repository operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// Content store errors pass through with their message unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The stored bytes do not decode to a depot.
    #[error("Failed to parse to Depot from {}", SignedBytes(.bytes))]
    CorruptDepot { bytes: Vec<u8> },

    #[error(transparent)]
    Encode(#[from] kiwi_types::TypeError),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Renders a payload as a bracketed list of signed byte values, e.g.
/// `[1, -56, -1]`.
struct SignedBytes<'a>(&'a [u8]);

impl fmt::Display for SignedBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", *byte as i8)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failed_renders_signed_byte_list() {
        let err = StoreError::StoreFailed {
            bytes: vec![1, 200, 255],
            key: "k".into(),
            bucket: "b".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to store [1, -56, -1] with key [k] to bucket [b]"
        );
    }

    #[test]
    fn repository_error_keeps_store_message() {
        let err = RepositoryError::from(StoreError::LoadFailed {
            key: "k".into(),
            bucket: "b".into(),
        });
        assert_eq!(
            err.to_string(),
            "Failed to load object with key [k] from bucket [b]"
        );
    }

    #[test]
    fn corrupt_depot_embeds_bytes() {
        let err = RepositoryError::CorruptDepot { bytes: vec![9, 8] };
        assert_eq!(err.to_string(), "Failed to parse to Depot from [9, 8]");
    }

    #[test]
    fn corrupt_depot_renders_high_bytes_as_negative() {
        let err = RepositoryError::CorruptDepot {
            bytes: vec![0x7f, 0x80, 0xff],
        };
        assert_eq!(err.to_string(), "Failed to parse to Depot from [127, -128, -1]");
    }

    #[test]
    fn empty_payload_renders_empty_list() {
        let err = RepositoryError::CorruptDepot { bytes: Vec::new() };
        assert_eq!(err.to_string(), "Failed to parse to Depot from []");
    }
}
