use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where depots live in object storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketConfig {
    /// Name of the bucket every object is read from and written to.
    pub bucket_name: String,
    /// Prefix prepended to depot ids to form storage keys. Empty means none.
    pub key_prefix: String,
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            bucket_name: "kiwi-depots".into(),
            key_prefix: "depots".into(),
        }
    }
}

impl BucketConfig {
    /// Parse from TOML. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if config.bucket_name.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "bucket_name",
            });
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = BucketConfig::default();
        assert_eq!(c.bucket_name, "kiwi-depots");
        assert_eq!(c.key_prefix, "depots");
    }

    #[test]
    fn parse_full_config() {
        let c = BucketConfig::from_toml_str(
            r#"
            bucket_name = "testBucket"
            key_prefix = "prod/depots"
            "#,
        )
        .unwrap();
        assert_eq!(c.bucket_name, "testBucket");
        assert_eq!(c.key_prefix, "prod/depots");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let c = BucketConfig::from_toml_str(r#"bucket_name = "b""#).unwrap();
        assert_eq!(c.key_prefix, "depots");
    }

    #[test]
    fn empty_bucket_name_rejected() {
        let err = BucketConfig::from_toml_str(r#"bucket_name = """#).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Empty {
                field: "bucket_name"
            }
        );
    }

    #[test]
    fn malformed_toml_rejected() {
        let err = BucketConfig::from_toml_str("bucket_name = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
