//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Default filter when `SENTINEL_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "sentinel=info";

/// Initialize the Sentinel logging system.
///
/// Reads `SENTINEL_LOG` for per-crate log levels, e.g.
/// `SENTINEL_LOG=sentinel_propagation=debug,sentinel_scoring=warn`.
/// Falls back to `sentinel=info`.
///
/// Idempotent. If the host process already installed a global subscriber,
/// that subscriber is kept.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
