//! Telemetry configuration from environment variables.

use serde::{Deserialize, Serialize};
use std::env;

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration for structured logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log filter (`info`, `debug`, `ic_02_interchain_router=debug,info`, ...)
    pub log_level: String,

    /// Whether to write log lines at all
    pub console_output: bool,

    /// Whether to emit JSON instead of human-readable lines
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "ic-node".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `IC_SERVICE_NAME`: Service name (default: ic-node)
    /// - `IC_LOG_LEVEL` or `RUST_LOG`: Log filter (default: info)
    /// - `IC_CONSOLE_OUTPUT`: Enable output (default: true)
    /// - `IC_JSON_LOGS`: Enable JSON lines (default: false outside containers)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_container =
            lookup("KUBERNETES_SERVICE_HOST").is_some() || lookup("DOCKER_CONTAINER").is_some();

        Self {
            service_name: lookup("IC_SERVICE_NAME").unwrap_or_else(|| "ic-node".to_string()),

            log_level: lookup("IC_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),

            console_output: lookup("IC_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            json_logs: lookup("IC_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),
        }
    }

    /// Override the filter, keeping everything else.
    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    /// Switch between JSON and pretty output.
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }
}
