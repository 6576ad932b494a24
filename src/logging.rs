//! Tracing subscriber setup for embedding applications.

use tracing_subscriber::EnvFilter;

/// Initialize a formatted tracing subscriber with env-filter control.
///
/// Honors `RUST_LOG`; defaults to `info`. Safe to call more than once — a
/// later call is a no-op when a global subscriber is already installed, which
/// keeps test binaries from panicking on double initialization.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
