use std::io;

use tracing_subscriber::{fmt, EnvFilter};

/// Diagnostics go to stderr so stdout carries only the route trace.
/// Verbosity comes from `RUST_LOG`, defaulting to warnings.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
