//! Shared observability setup (tracing/logging).

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing.
///
/// JSON log lines, filtered via `RUST_LOG` (default `info`). Safe to call
/// more than once; subsequent calls become no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
