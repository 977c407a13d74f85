//! Environment lookups for configuration resolved at call time.

use std::collections::HashMap;

/// Resolves environment values by name.
pub trait EnvironmentVariables: Send + Sync {
    /// The value of `name`, or `None` if it is unset or empty.
    fn value_from(&self, name: &str) -> Option<String>;
}

/// Reads the process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnvironment;

impl EnvironmentVariables for ProcessEnvironment {
    fn value_from(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}

/// A fixed set of values, for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct StaticEnvironment {
    values: HashMap<String, String>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl EnvironmentVariables for StaticEnvironment {
    fn value_from(&self, name: &str) -> Option<String> {
        self.values
            .get(name)
            .filter(|value| !value.is_empty())
            .cloned()
    }
}
