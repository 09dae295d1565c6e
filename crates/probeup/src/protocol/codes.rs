//! Status and error codes reported for a probe attempt.

/// Request succeeded
pub const HTTP_OK: i32 = 200;

/// Request timed out
pub const REQUEST_TIMEOUT: i32 = 506;

/// Transport-level request failure
pub const REQUEST_ERR: i32 = 509;

/// Response could not be parsed
pub const PARSE_ERROR: i32 = 510;
