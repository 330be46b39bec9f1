//! Tracing subscriber installation.

use re_shared::config::LogFormat;
use re_shared::LoggingConfig;
use tracing_subscriber::EnvFilter;

use crate::InfrastructureError;

/// Build the log filter: `RUST_LOG` wins, otherwise the configured level
pub fn env_filter(level: &str) -> Result<EnvFilter, InfrastructureError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level)
        .map_err(|e| InfrastructureError::Config(format!("Invalid log level '{}': {}", level, e)))
}

/// Install the global tracing subscriber
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), InfrastructureError> {
    let filter = env_filter(&config.level)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_target(true);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    result.map_err(|e| InfrastructureError::Telemetry(e.to_string()))
}
