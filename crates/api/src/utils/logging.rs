use std::time::Duration;

use diwan_domain::{DiwanError, LoggingConfig, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `config.level` when set. `config.json` switches to
/// JSON lines.
///
/// # Errors
/// `DiwanError::Config` for an unparsable level or when a subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_env_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = if config.json { builder.json().try_init() } else { builder.try_init() };
    installed.map_err(|e| DiwanError::Config(format!("failed to install log subscriber: {e}")))
}

fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(&directives)
            .map_err(|e| DiwanError::Config(format!("invalid RUST_LOG '{directives}': {e}"))),
        _ => EnvFilter::try_new(&config.level)
            .map_err(|e| DiwanError::Config(format!("invalid log level '{}': {e}", config.level))),
    }
}

/// Stable, low-cardinality label for a `DiwanError`
#[inline]
pub const fn error_label(error: &DiwanError) -> &'static str {
    match error {
        DiwanError::Storage(_) => "storage",
        DiwanError::Config(_) => "config",
        DiwanError::NotFound(_) => "not_found",
        DiwanError::InvalidInput(_) => "invalid_input",
        DiwanError::Unavailable(_) => "unavailable",
        DiwanError::Internal(_) => "internal",
    }
}

/// Log how an application-level operation went.
///
/// `operation` should be a stable identifier without user data.
pub fn log_operation<T>(operation: &str, elapsed: Duration, result: &Result<T>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    match result {
        Ok(_) => info!(operation, duration_ms, "operation_success"),
        Err(err) => warn!(
            operation,
            duration_ms,
            error_type = error_label(err),
            error = %err,
            "operation_failure"
        ),
    }
}
