//! Built-in verifiers for the HTTP transport form.

use std::sync::Arc;

use tracing::{debug, warn};

use super::{
    interpreter::{CodeFieldInterpreter, ResponseInterpreter},
    Verify,
};
use crate::{
    protocol::{codes, ProbeResponse, Verification},
    request::Request,
};

/// Succeeds when the response status is 200; reports the status as the code
pub fn verify_status_code(request: &Request, response: Option<&ProbeResponse>) -> Verification {
    let Some(response) = response else {
        return Verification::failure(codes::REQUEST_ERR);
    };

    let code = i32::from(response.status);
    if request.debug() {
        log_response(request, response);
    }

    Verification::new(code, code == codes::HTTP_OK)
}

/// Verifies the application code carried in a JSON response body
#[derive(Clone)]
pub struct JsonVerifier {
    interpreter: Arc<dyn ResponseInterpreter>,
}

impl JsonVerifier {
    pub fn new(interpreter: impl ResponseInterpreter + 'static) -> Self {
        Self { interpreter: Arc::new(interpreter) }
    }
}

impl Default for JsonVerifier {
    fn default() -> Self {
        Self::new(CodeFieldInterpreter)
    }
}

impl Verify for JsonVerifier {
    fn verify(&self, request: &Request, response: Option<&ProbeResponse>) -> Verification {
        let Some(response) = response else {
            return Verification::failure(codes::REQUEST_ERR);
        };

        if request.debug() {
            log_response(request, response);
        }

        if i32::from(response.status) != codes::HTTP_OK {
            return Verification::failure(codes::REQUEST_ERR);
        }

        match self.interpreter.interpret(response.body.as_deref().unwrap_or_default()) {
            Ok(code) => Verification::new(code, code == codes::HTTP_OK),
            Err(error) => {
                warn!("Failed to interpret response from {}: {error}", request.url());
                Verification::failure(codes::PARSE_ERROR)
            }
        }
    }
}

fn log_response(request: &Request, response: &ProbeResponse) {
    debug!(
        "Probe response from {}: status {} body {}",
        request.url(),
        response.status,
        response.body.as_deref().unwrap_or_default()
    );
}
