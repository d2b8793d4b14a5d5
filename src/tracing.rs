//! Tracing setup for the command-line binary
//!
//! Console output respects the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=orgtree::pipeline=debug` - module-level filtering

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with env-filtered console logging
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
