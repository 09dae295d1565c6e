//! Error types for probe construction and configuration.

use thiserror::Error;

/// Errors raised while building or re-validating a [`crate::Request`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("url {url} is invalid, expected a full http(s):// or ws(s):// address")]
    InvalidUrl { url: String },

    #[error("verifier not found: {key}")]
    VerifierNotFound { key: String },
}

/// Errors raised while loading or validating a [`crate::ProbeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("default timeout must be greater than zero")]
    ZeroTimeout,

    #[error("default verify policy must not be empty")]
    EmptyVerifyPolicy,
}
