//! Probe request descriptors for ProbeUP.
//!
//! A [`Request`] is everything a transport executor needs to issue one probe,
//! bound to the verifier that will classify its response.

mod builder;

use std::{collections::HashMap, io::Read, time::Duration};

pub use builder::RequestBuilder;

use crate::{
    error::RequestError,
    protocol::{FormType, ProbeResponse, Verification},
    verify::Verifier,
};

/// A fully specified probe request
#[derive(Debug, Clone)]
pub struct Request {
    url: String,
    form: FormType,
    method: String,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
    verify_policy: String,
    verifier: Verifier,
    timeout: Duration,
    debug: bool,
}

impl Request {
    /// Build a request against the shared built-in verifier registry
    ///
    /// An empty `verify_policy` selects `statusCode`; a zero `timeout`
    /// selects three seconds.
    pub fn new(
        url: impl Into<String>,
        method: &str,
        verify_policy: &str,
        timeout: Duration,
        debug: bool,
    ) -> Result<Self, RequestError> {
        RequestBuilder::default().build(url, method, verify_policy, timeout, debug)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn form(&self) -> FormType {
        self.form
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.headers
    }

    /// Set a header, replacing any previous value under the same name
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Reader over the request body, if one is set
    pub fn body_reader(&self) -> Option<impl Read + '_> {
        self.body.as_deref()
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn verify_policy(&self) -> &str {
        &self.verify_policy
    }

    pub fn verifier(&self) -> &Verifier {
        &self.verifier
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Classify a response with the bound verifier
    pub fn verify(&self, response: Option<&ProbeResponse>) -> Verification {
        self.verifier.verify(self, response)
    }
}
