//! Tracing subscriber setup.

use std::io;

use tracing_subscriber::{fmt, EnvFilter};

use crate::constants::LOG_ENV;

/// Install the global subscriber, writing compact lines to stderr.
///
/// `PANEL_LOG` takes precedence; otherwise the level is `warn`, or `info`
/// with `--verbose`. Stdout stays reserved for command output.
pub fn init(verbose: bool) {
    let fallback = if verbose { "info" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}
