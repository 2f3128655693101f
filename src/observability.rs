//! Logging initialization.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! the binary's job. Filtering follows the `SHELF_LOG` environment variable,
//! with `--verbose` lowering the default level to debug.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable controlling the log filter.
pub const LOG_ENV_VAR: &str = "SHELF_LOG";

/// Initializes the global tracing subscriber.
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "shelf=debug" } else { "shelf=warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
