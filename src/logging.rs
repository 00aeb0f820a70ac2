//! Tracing subscriber setup.
//!
//! The crate itself only emits `tracing` events; installing a subscriber is
//! the embedding application's choice. This helper wires up the standard
//! env-filtered stderr subscriber (`AIRMOUSE_LOG=debug cargo run ...`).

use tracing_subscriber::EnvFilter;

/// Environment variable controlling the log filter.
pub const LOG_ENV_VAR: &str = "AIRMOUSE_LOG";

/// Install the global stderr subscriber, filtered by `AIRMOUSE_LOG`
/// (default `info`). Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
