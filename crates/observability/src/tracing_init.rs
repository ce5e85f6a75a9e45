//! Tracing/logging initialization.
//!
//! The workflow crates emit one structured event per mutation (submit,
//! decide, handover, audit, sync); this wires them to JSON output.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process, honouring `RUST_LOG` and
/// defaulting to `info`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_filter("info");
}

/// Same as [`init`] with an explicit default filter directive, for embedders
/// that want quieter output than `info`.
pub fn init_with_filter(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
