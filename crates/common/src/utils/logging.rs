use std::io;
use tracing_subscriber::{fmt, EnvFilter};

// Quiet the driver's connection chatter unless RUST_LOG asks for it.
const DEFAULT_FILTER: &str = "info,tower_http=info,mongodb=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Compact stdout logging. `RUST_LOG` overrides the default filter.
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .compact()
        .with_writer(|| io::stdout())
        .try_init();
}

/// JSON structured logging for container deployments.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .json()
        .with_writer(|| io::stdout())
        .try_init();
}
