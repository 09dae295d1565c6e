//! Protocol type definitions for ProbeUP.
//!
//! This module defines the data structures handed to and received from the
//! transport executor and the result aggregator.

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

use super::codes;

/// Transport form of a probe target, derived from its URL scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormType {
    #[serde(rename = "http")]
    Http,
    #[serde(rename = "webSocket")]
    WebSocket,
}

impl FormType {
    /// Classify a URL by its literal scheme prefix
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("http://") || url.starts_with("https://") {
            Some(FormType::Http)
        } else if url.starts_with("ws://") || url.starts_with("wss://") {
            Some(FormType::WebSocket)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Http => "http",
            FormType::WebSocket => "webSocket",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A response produced by the transport executor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResponse {
    /// Status code returned by the target
    pub status: u16,

    /// Response headers
    pub headers: Vec<(String, String)>,

    /// Response body, if the executor read it
    pub body: Option<String>,
}

impl ProbeResponse {
    pub fn new(status: u16) -> Self {
        Self { status, headers: Vec::new(), body: None }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Classification of one probe attempt by a verifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    pub code: i32,
    pub succeeded: bool,
}

impl Verification {
    pub fn new(code: i32, succeeded: bool) -> Self {
        Self { code, succeeded }
    }

    pub fn failure(code: i32) -> Self {
        Self { code, succeeded: false }
    }
}

/// Connection-level failure reported by the transport executor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    Timeout,
    Request,
}

impl TransportFailure {
    pub fn code(&self) -> i32 {
        match self {
            TransportFailure::Timeout => codes::REQUEST_TIMEOUT,
            TransportFailure::Request => codes::REQUEST_ERR,
        }
    }
}

/// Outcome of one issued probe attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestResult {
    /// `<channel>_<sequence>` identifier
    pub id: String,

    /// Wall-clock duration of the attempt in nanoseconds
    pub elapsed_nanos: u64,

    pub succeeded: bool,

    pub error_code: i32,
}

impl RequestResult {
    /// Record a verifier outcome together with the attempt duration
    pub fn new(elapsed: Duration, verification: Verification) -> Self {
        Self {
            id: String::new(),
            elapsed_nanos: duration_nanos(elapsed),
            succeeded: verification.succeeded,
            error_code: verification.code,
        }
    }

    /// Record an attempt that never produced a response
    pub fn from_transport_failure(elapsed: Duration, failure: TransportFailure) -> Self {
        Self::new(elapsed, Verification::failure(failure.code()))
    }

    pub fn set_id(&mut self, channel_id: u64, sequence: u64) {
        self.id = format!("{channel_id}_{sequence}");
    }
}

fn duration_nanos(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}
