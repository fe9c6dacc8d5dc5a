//! Tracing setup for the application.
//!
//! Logs go to stderr. The filter defaults to `info` for this crate and `warn`
//! for everything else, and can be overridden with `RUST_LOG`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,typeset=info";

/// Install the global tracing subscriber.
pub fn init_logging() -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))
}
