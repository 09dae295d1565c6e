//! Protocol module for ProbeUP.
//!
//! This module contains the values exchanged with the transport executor
//! and the result aggregator.

pub mod codes;
pub mod types;

pub use types::{FormType, ProbeResponse, RequestResult, TransportFailure, Verification};
