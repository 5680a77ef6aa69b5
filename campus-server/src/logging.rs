//! Tracing subscriber setup for the binaries.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global fmt subscriber filtered by `RUST_LOG`, default `info`.
///
/// An unparsable `RUST_LOG` falls back to the default level with a notice on
/// stderr, since logging isn't available yet.
pub fn init_logger() {
    let default_level = LevelFilter::INFO;
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(rust_log) => EnvFilter::try_new(&rust_log).unwrap_or_else(|err| {
            eprintln!(
                "invalid {}, falling back to level '{}' - {}",
                EnvFilter::DEFAULT_ENV,
                default_level,
                err,
            );
            EnvFilter::new(default_level.to_string())
        }),
        Err(_) => EnvFilter::new(default_level.to_string()),
    };

    // A second call (e.g. from tests) leaves the first subscriber in place
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init();
}
