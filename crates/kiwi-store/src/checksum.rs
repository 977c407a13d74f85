use std::fmt;

use serde::{Deserialize, Serialize};

/// Domain tag mixed into every content checksum.
const DOMAIN: &str = "kiwi-content-v1";

/// Checksum of a stored payload (domain-separated BLAKE3).
///
/// Sent with every put so the transport can reject a payload that was
/// altered in flight, the same role `Content-MD5` plays for S3.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentChecksum([u8; 32]);

impl ContentChecksum {
    /// Compute the checksum of a payload.
    pub fn compute(data: &[u8]) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(DOMAIN.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        Self(*hasher.finalize().as_bytes())
    }

    /// Verify that `data` produces this checksum.
    pub fn verify(&self, data: &[u8]) -> bool {
        Self::compute(data) == *self
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a hex string. Returns `None` unless it is exactly 32 bytes.
    pub fn from_hex(s: &str) -> Option<Self> {
        let bytes = hex::decode(s).ok()?;
        let arr: [u8; 32] = bytes.try_into().ok()?;
        Some(Self(arr))
    }
}

impl fmt::Debug for ContentChecksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentChecksum({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for ContentChecksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_is_deterministic() {
        assert_eq!(
            ContentChecksum::compute(b"hello"),
            ContentChecksum::compute(b"hello")
        );
    }

    #[test]
    fn checksum_is_domain_separated() {
        let raw = *blake3::hash(b"hello").as_bytes();
        assert_ne!(ContentChecksum::compute(b"hello").as_bytes(), &raw);
    }

    #[test]
    fn verify_detects_tampering() {
        let sum = ContentChecksum::compute(b"original");
        assert!(sum.verify(b"original"));
        assert!(!sum.verify(b"tampered"));
    }

    #[test]
    fn hex_roundtrip() {
        let sum = ContentChecksum::compute(&[1, 2, 3]);
        assert_eq!(sum.to_hex().len(), 64);
        assert_eq!(ContentChecksum::from_hex(&sum.to_hex()), Some(sum));
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(ContentChecksum::from_hex("zz").is_none());
        assert!(ContentChecksum::from_hex("abcd").is_none());
    }
}
