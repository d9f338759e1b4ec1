//! Tracing subscriber setup shared by binaries and integration tests.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Filter comes from `TRELLIS_LOG` (falling back to `info`). Safe to call
/// more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("TRELLIS_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
