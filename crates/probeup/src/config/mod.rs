//! Configuration module for ProbeUP.
//!
//! This module contains the defaults applied while building requests.

mod methods;
mod types;

pub use types::{ProbeConfig, ProbeConfigBuilder};
