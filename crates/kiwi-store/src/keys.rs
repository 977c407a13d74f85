//! Mapping from depot ids to storage keys.

use crate::config::BucketConfig;

/// Derives the storage key for a domain identifier.
///
/// Any `Fn(&str) -> String` closure is a key provider.
pub trait KeyProvider: Send + Sync {
    fn create_key_for(&self, id: &str) -> String;
}

impl<F> KeyProvider for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn create_key_for(&self, id: &str) -> String {
        self(id)
    }
}

/// Keys of the form `<prefix>/<id>`, or just `<id>` for an empty prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixKeyProvider {
    prefix: String,
}

impl PrefixKeyProvider {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix: String = prefix.into();
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Key provider using the configured `key_prefix`.
    pub fn from_config(config: &BucketConfig) -> Self {
        Self::new(config.key_prefix.clone())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl KeyProvider for PrefixKeyProvider {
    fn create_key_for(&self, id: &str) -> String {
        if self.prefix.is_empty() {
            id.to_string()
        } else {
            format!("{}/{}", self.prefix, id)
        }
    }
}
