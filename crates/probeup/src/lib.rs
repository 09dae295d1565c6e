//! ProbeUP - probe request construction and verification for Uppe
//!
//! This library prepares probe requests for an external transport executor
//! and classifies the responses it gets back. It never opens a connection
//! itself.

pub mod config;
pub mod error;
pub mod protocol;
pub mod request;
pub mod verify;

// Re-export main types
pub use config::ProbeConfig;
pub use error::{ConfigError, RequestError};
pub use protocol::{FormType, ProbeResponse, RequestResult, TransportFailure, Verification};
pub use request::{Request, RequestBuilder};
pub use verify::{Verifier, VerifierRegistry, Verify};

/// Re-export common error types
pub use anyhow;

/// ProbeUP result type using anyhow for error handling
pub type Result<T> = anyhow::Result<T>;

/// Verification policy used when none is given
pub const DEFAULT_VERIFY_POLICY: &str = "statusCode";

/// Timeout applied when none (or zero) is given, in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;
