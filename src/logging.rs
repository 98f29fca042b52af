//! Structured logging with tracing
//!
//! Events go to stderr so stdout carries only the run confirmation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "CACHEMAP_LOG";

/// Filter used when `CACHEMAP_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // Already initialized (e.g. in tests)
    let _ = Registry::default().with(filter).with(stderr).try_init();
}
