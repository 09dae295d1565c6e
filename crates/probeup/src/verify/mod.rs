//! Verifier registry for ProbeUP.
//!
//! A verifier decides from a raw [`ProbeResponse`] whether a probe attempt
//! counts as successful. Verifiers are registered under the composite key
//! `"<form>.<policy>"` while the registry is being built; the finished
//! [`VerifierRegistry`] is read-only.

mod http;
mod interpreter;

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, OnceLock},
};

use tracing::debug;

pub use http::{verify_status_code, JsonVerifier};
pub use interpreter::{CodeFieldInterpreter, InterpretError, ResponseInterpreter};

use crate::{
    error::RequestError,
    protocol::{FormType, ProbeResponse, Verification},
    request::Request,
};

/// Policy name of the status code verifier
pub const STATUS_CODE_POLICY: &str = "statusCode";

/// Policy name of the JSON body verifier
pub const JSON_POLICY: &str = "json";

/// A verification strategy
///
/// Implementations must not fail outward: every outcome, including an
/// absent response, is reported as a [`Verification`].
pub trait Verify: Send + Sync {
    fn verify(&self, request: &Request, response: Option<&ProbeResponse>) -> Verification;
}

impl<F> Verify for F
where
    F: Fn(&Request, Option<&ProbeResponse>) -> Verification + Send + Sync,
{
    fn verify(&self, request: &Request, response: Option<&ProbeResponse>) -> Verification {
        self(request, response)
    }
}

/// A verifier bound to the key it was registered under
#[derive(Clone)]
pub struct Verifier {
    key: String,
    inner: Arc<dyn Verify>,
}

impl Verifier {
    fn new(key: String, verify: impl Verify + 'static) -> Self {
        Self { key, inner: Arc::new(verify) }
    }

    /// Composite key this verifier is registered under
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn verify(&self, request: &Request, response: Option<&ProbeResponse>) -> Verification {
        self.inner.verify(request, response)
    }
}

impl fmt::Debug for Verifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verifier").field("key", &self.key).finish_non_exhaustive()
    }
}

/// Build the registry key for a form and policy
pub fn composite_key(form: FormType, policy: &str) -> String {
    format!("{form}.{policy}")
}

/// Immutable mapping from composite key to verifier
#[derive(Debug)]
pub struct VerifierRegistry {
    verifiers: HashMap<String, Verifier>,
}

impl VerifierRegistry {
    /// Create a new registry builder
    pub fn builder() -> VerifierRegistryBuilder {
        VerifierRegistryBuilder::default()
    }

    /// Registry holding only the built-in verifiers
    pub fn builtin() -> Self {
        Self::builder().with_builtins().build()
    }

    /// Process-wide built-in registry, initialized on first use
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<VerifierRegistry>> = OnceLock::new();

        SHARED.get_or_init(|| Arc::new(Self::builtin())).clone()
    }

    /// Look up the verifier for a form and policy
    pub fn resolve(&self, form: FormType, policy: &str) -> Result<Verifier, RequestError> {
        let key = composite_key(form, policy);

        self.verifiers.get(&key).cloned().ok_or(RequestError::VerifierNotFound { key })
    }

    pub fn contains(&self, form: FormType, policy: &str) -> bool {
        self.verifiers.contains_key(&composite_key(form, policy))
    }

    /// Registered composite keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.verifiers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.verifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verifiers.is_empty()
    }
}

impl Default for VerifierRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Builder for VerifierRegistry
#[derive(Debug, Default)]
pub struct VerifierRegistryBuilder {
    verifiers: HashMap<String, Verifier>,
}

impl VerifierRegistryBuilder {
    /// Register the built-in `http.statusCode` and `http.json` verifiers
    pub fn with_builtins(self) -> Self {
        self.register(FormType::Http, STATUS_CODE_POLICY, verify_status_code)
            .register(FormType::Http, JSON_POLICY, JsonVerifier::default())
    }

    /// Register a verifier, replacing any previous entry under the same key
    pub fn register(
        mut self,
        form: FormType,
        policy: impl AsRef<str>,
        verify: impl Verify + 'static,
    ) -> Self {
        let key = composite_key(form, policy.as_ref());
        debug!("Registering verifier {key}");

        self.verifiers.insert(key.clone(), Verifier::new(key, verify));
        self
    }

    pub fn build(self) -> VerifierRegistry {
        VerifierRegistry { verifiers: self.verifiers }
    }
}
