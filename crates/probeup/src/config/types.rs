//! Configuration types for ProbeUP.

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_TIMEOUT_MS, DEFAULT_VERIFY_POLICY};

/// Defaults applied by a [`crate::RequestBuilder`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Timeout used when a request is built with a zero timeout, in milliseconds
    pub default_timeout_ms: u64,

    /// Verification policy used when a request is built without one
    pub default_verify_policy: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            default_timeout_ms: DEFAULT_TIMEOUT_MS,
            default_verify_policy: DEFAULT_VERIFY_POLICY.to_string(),
        }
    }
}

impl ProbeConfig {
    /// Create a new configuration builder
    pub fn builder() -> ProbeConfigBuilder {
        ProbeConfigBuilder::default()
    }
}

/// Builder for ProbeConfig
#[derive(Debug, Default)]
pub struct ProbeConfigBuilder {
    pub(crate) config: ProbeConfig,
}
