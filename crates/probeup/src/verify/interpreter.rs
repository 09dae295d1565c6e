//! Response body interpretation for the JSON verification policy.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Extracts an application-level code from a response body
pub trait ResponseInterpreter: Send + Sync {
    fn interpret(&self, body: &str) -> Result<i32, InterpretError>;
}

#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("invalid json body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported code value: {0}")]
    Code(Value),
}

/// Reads the `code` field of a `{"code": ..., "msg": ..., "data": ...}` body
///
/// The code may be a JSON number or a numeric string.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeFieldInterpreter;

#[derive(Deserialize)]
struct Envelope {
    code: Value,
}

impl ResponseInterpreter for CodeFieldInterpreter {
    fn interpret(&self, body: &str) -> Result<i32, InterpretError> {
        let envelope: Envelope = serde_json::from_str(body)?;

        parse_code(&envelope.code).ok_or(InterpretError::Code(envelope.code))
    }
}

fn parse_code(value: &Value) -> Option<i32> {
    match value {
        Value::String(code) => code.trim().parse().ok(),
        Value::Number(code) => code.as_i64().and_then(|code| i32::try_from(code).ok()),
        _ => None,
    }
}
