//! Tracing subscriber setup.
//!
//! Library code only emits events through the `tracing` macros. Binaries and
//! test harnesses that want output call [`init_tracing`] once.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive (e.g. `webcompat=debug`).
pub const LOG_ENV_VAR: &str = "WEBCOMPAT_LOG";

static INIT: Once = Once::new();

/// Install a fmt subscriber filtered by `WEBCOMPAT_LOG`, defaulting to `info`.
/// Safe to call more than once; only the first call has an effect, and an
/// already-installed global subscriber is left alone.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
