//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout is left to the
//! user-facing messages of the binary.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber
///
/// `RUST_LOG` wins when set and valid; otherwise `default_level` (for example
/// `warn` or `piiarc_infra=debug`) is used, falling back to `warn` if it does
/// not parse. Calling this more than once is a no-op.
pub fn init_tracing(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_level))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .with(filter)
            .try_init();

        if installed.is_err() {
            tracing::debug!("global subscriber already installed");
        }
    });
}
