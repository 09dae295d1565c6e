use std::env::var;

use tracing::{level_filters::LevelFilter, warn};
use tracing_subscriber::{
    Layer, Registry, filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Install the global subscriber at `INFO`, honouring `RUST_LOG` and `RUST_LOG_FORMAT`.
///
/// Panics if a global subscriber is already set.
pub fn init() {
    build_layer(LevelFilter::INFO).init();
}

/// Install a `DEBUG` subscriber once; later calls are no-ops.
pub fn init_for_tests() {
    let _ = build_layer(LevelFilter::DEBUG).try_init();
}

fn build_layer(level: LevelFilter) -> impl SubscriberInitExt {
    let env_filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

    let log_format = var("RUST_LOG_FORMAT")
        .inspect_err(|error| {
            warn!("Failed to read RUST_LOG_FORMAT, falling back to default: {error}")
        })
        .unwrap_or_default();

    let log_layer: Box<dyn Layer<Registry> + Send + Sync> = match log_format.as_str() {
        "json" => tracing_subscriber::fmt::layer().json().with_filter(env_filter).boxed(),
        _ => tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_filter(env_filter)
            .boxed(),
    };

    tracing_subscriber::registry().with(log_layer)
}
