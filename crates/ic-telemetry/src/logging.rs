//! Subscriber installation.
//!
//! JSON lines carry `timestamp`, `level`, `target`, the message and any
//! structured fields, so a log shipper can parse them without regexes.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Build the filter for `config`.
///
/// `RUST_LOG` style directives are accepted in `log_level`.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level)
        .map_err(|e| {
            TelemetryError::Config(format!("invalid log filter {:?}: {e}", config.log_level))
        })
}

/// Install the global subscriber.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;

    let result = if !config.console_output {
        tracing_subscriber::registry().with(filter).try_init()
    } else if config.json_logs {
        // JSON output for containers/production
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr);
        tracing_subscriber::registry()
            .with(filter)
            .with(json_layer)
            .try_init()
    } else {
        // Pretty output for development
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true)
            .with_writer(std::io::stderr);
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
    };

    result.map_err(|_| TelemetryError::AlreadyInitialized)?;

    tracing::info!(
        service = %config.service_name,
        json = config.json_logs,
        "[telemetry] logging initialized"
    );
    Ok(())
}
