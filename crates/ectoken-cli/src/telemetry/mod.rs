//! Telemetry initialisation for the `ectoken` CLI.
//!
//! Logs go to stderr so stdout carries only the token or parameters.
//! No key material, token text or plaintext is ever logged.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber.
///
/// `RUST_LOG` takes precedence over `log_level` when set.
///
/// # Errors
///
/// Returns an error if `log_level` is not a valid filter directive or the
/// subscriber has already been set.
pub fn init(log_level: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .with_context(|| format!("invalid log level {log_level:?}"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!("failed to initialise tracing subscriber: {e}"))
}
