use crate::error::{StoreError, StoreResult};

/// Content type used for opaque binary payloads.
pub const OCTET_STREAM: &str = "binary/octet-stream";

/// A payload paired with the key it is stored under.
///
/// Values built with [`BinaryContent::new`] always have a non-empty key and a
/// non-empty payload. [`BinaryContent::unchecked`] skips that validation; the
/// content store re-validates on every use either way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryContent {
    key: String,
    bytes: Vec<u8>,
    content_type: String,
}

impl BinaryContent {
    /// Create validated content.
    pub fn new(
        key: impl Into<String>,
        bytes: Vec<u8>,
        content_type: impl Into<String>,
    ) -> StoreResult<Self> {
        let content = Self::unchecked(key, bytes, content_type);
        content.check_key_and_payload()?;
        Ok(content)
    }

    /// Create content without validation.
    pub fn unchecked(
        key: impl Into<String>,
        bytes: Vec<u8>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            bytes,
            content_type: content_type.into(),
        }
    }

    /// Binary content with the `binary/octet-stream` content type.
    pub fn octet_stream(key: impl Into<String>, bytes: Vec<u8>) -> StoreResult<Self> {
        Self::new(key, bytes, OCTET_STREAM)
    }

    /// Check every part the store needs: key, payload, and content type.
    pub fn validate(&self) -> StoreResult<()> {
        self.check_key_and_payload()?;
        if self.content_type.is_empty() {
            return Err(StoreError::InvalidInput(format!(
                "content type for key [{}] must not be empty",
                self.key
            )));
        }
        Ok(())
    }

    fn check_key_and_payload(&self) -> StoreResult<()> {
        if self.key.is_empty() {
            return Err(StoreError::InvalidInput("content key must not be empty".into()));
        }
        if self.bytes.is_empty() {
            return Err(StoreError::InvalidInput(format!(
                "content for key [{}] must not be empty",
                self.key
            )));
        }
        Ok(())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_content() {
        let content = BinaryContent::new("key", vec![1, 2], OCTET_STREAM).unwrap();
        assert_eq!(content.key(), "key");
        assert_eq!(content.bytes(), &[1, 2]);
        assert_eq!(content.content_type(), OCTET_STREAM);
        assert_eq!(content.len(), 2);
    }

    #[test]
    fn new_rejects_empty_key() {
        let err = BinaryContent::new("", vec![1], OCTET_STREAM).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
    }

    #[test]
    fn new_rejects_empty_payload() {
        let err = BinaryContent::new("key", Vec::new(), OCTET_STREAM).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
    }

    #[test]
    fn new_allows_empty_content_type() {
        // Only the store insists on a content type.
        let content = BinaryContent::new("key", vec![1], "").unwrap();
        assert!(content.validate().is_err());
    }

    #[test]
    fn unchecked_skips_validation() {
        let content = BinaryContent::unchecked("", Vec::new(), "");
        assert!(content.is_empty());
        assert!(content.validate().is_err());
    }

    #[test]
    fn octet_stream_sets_content_type() {
        let content = BinaryContent::octet_stream("key", vec![7]).unwrap();
        assert_eq!(content.content_type(), "binary/octet-stream");
        assert_eq!(content.into_bytes(), vec![7]);
    }
}
