//! `tracing` subscriber setup for the binary

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Builds the filter: `RUST_LOG` if set, else the verbosity default
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs a stderr formatter; a second call is a no-op
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
