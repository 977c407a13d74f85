use serde::{Deserialize, Serialize};

use crate::engine::SignalPolicy;
use crate::error::ConfigError;
use crate::publisher::DEFAULT_SUBJECT;

/// Configuration for topic alerts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Name of the environment variable holding the topic identifier.
    /// The variable itself is read on every alert.
    pub topic_env_variable: String,
    /// Subject line of every published message.
    pub subject: String,
    pub policy: SignalPolicy,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            topic_env_variable: "KIWI_ALERT_TOPIC".into(),
            subject: DEFAULT_SUBJECT.into(),
            policy: SignalPolicy::Threshold,
        }
    }
}

impl AlertConfig {
    /// Parse from TOML. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if config.topic_env_variable.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "topic_env_variable",
            });
        }
        if config.subject.trim().is_empty() {
            return Err(ConfigError::Empty { field: "subject" });
        }
        Ok(config)
    }
}
