//! Tracing subscriber setup shared by ProbeUP binaries and tests.

mod subscriber;

pub use subscriber::{init, init_for_tests};
