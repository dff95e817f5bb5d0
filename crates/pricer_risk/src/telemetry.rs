//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogLevel;

/// Installs the global subscriber: `RUST_LOG` if set, else `level`.
///
/// Returns `false` when a subscriber was already installed.
pub fn init_tracing(level: LogLevel) -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
