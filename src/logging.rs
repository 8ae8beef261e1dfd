//! Logging bootstrap
//!
//! Logs go to stderr so stdout stays the conversation with the user.
//! `RUST_LOG` takes precedence over the level passed in.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Default log level when neither `RUST_LOG` nor `--log-level` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Install the global tracing subscriber.
///
/// # Errors
/// - Returns an error when `level` is not a valid filter directive.
/// - Returns an error when a global subscriber is already installed.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| anyhow!("invalid log level '{}': {}", level, e))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
