//! Request construction and policy enforcement.

use std::{collections::HashMap, sync::Arc, time::Duration};

use tracing::{debug, warn};

use super::Request;
use crate::{
    config::ProbeConfig,
    error::{ConfigError, RequestError},
    protocol::FormType,
    verify::{VerifierRegistry, JSON_POLICY},
};

/// Builds [`Request`]s against a verifier registry
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    registry: Arc<VerifierRegistry>,
    config: ProbeConfig,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new(VerifierRegistry::shared())
    }
}

impl RequestBuilder {
    pub fn new(registry: Arc<VerifierRegistry>) -> Self {
        Self { registry, config: ProbeConfig::default() }
    }

    /// Apply a configuration, rejecting one that fails validation
    pub fn with_config(mut self, config: ProbeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn registry(&self) -> &VerifierRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Build a verifier-bound request
    ///
    /// The transport form comes from the URL scheme. An empty policy and a
    /// zero timeout take the configured defaults, and the method is stored
    /// upper-cased.
    pub fn build(
        &self,
        url: impl Into<String>,
        method: &str,
        verify_policy: &str,
        timeout: Duration,
        debug: bool,
    ) -> Result<Request, RequestError> {
        let url = url.into();

        let Some(form) = FormType::from_url(&url) else {
            warn!("Rejecting probe target {url}: unsupported scheme");
            return Err(RequestError::InvalidUrl { url });
        };

        let verify_policy = if verify_policy.is_empty() {
            self.config.default_verify_policy.clone()
        } else {
            verify_policy.to_string()
        };

        let verifier = self.registry.resolve(form, &verify_policy).inspect_err(|error| {
            warn!("Rejecting probe target {url}: {error}");
        })?;

        let timeout = if timeout.is_zero() { self.config.default_timeout() } else { timeout };

        debug!("Built {form} probe {} {url} with verifier {}", method, verifier.key());

        Ok(Request {
            url,
            form,
            method: method.to_uppercase(),
            headers: HashMap::new(),
            body: None,
            verify_policy,
            verifier,
            timeout,
            debug,
        })
    }

    /// Force a request onto the HTTP form and the `json` policy
    ///
    /// The form and policy are overwritten regardless of how the request was
    /// classified. If the registry has no `http.json` verifier the error is
    /// returned and the previously bound verifier stays in place.
    pub fn enforce_json_policy(&self, request: &mut Request) -> Result<(), RequestError> {
        if request.form != FormType::Http {
            debug!("Overriding {} form of {} to http", request.form, request.url);
        }

        request.form = FormType::Http;
        request.verify_policy = JSON_POLICY.to_string();
        request.verifier = self.registry.resolve(request.form, &request.verify_policy)?;

        Ok(())
    }
}
