//! Configuration methods for ProbeUP.

use std::{fs, path::Path, time::Duration};

use anyhow::Context;

use super::types::{ProbeConfig, ProbeConfigBuilder};
use crate::error::ConfigError;

impl ProbeConfig {
    /// Parse and validate a TOML configuration
    ///
    /// Missing keys keep their default values.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;

        Ok(config)
    }

    /// Read a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;

        Self::from_toml_str(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        if self.default_verify_policy.is_empty() {
            return Err(ConfigError::EmptyVerifyPolicy);
        }

        Ok(())
    }

    pub fn default_timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms)
    }
}

impl ProbeConfigBuilder {
    /// Build and validate the configuration
    pub fn build(self) -> Result<ProbeConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Set the default timeout (millisecond precision)
    pub fn default_timeout(mut self, timeout: Duration) -> Self {
        self.config.default_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the default verification policy
    pub fn default_verify_policy(mut self, policy: impl Into<String>) -> Self {
        self.config.default_verify_policy = policy.into();
        self
    }
}
