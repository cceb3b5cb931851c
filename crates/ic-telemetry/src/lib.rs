//! # IC Telemetry
//!
//! Structured logging for the interchain node.
//!
//! Every crate logs through `tracing` macros with a `[component]` prefix;
//! this crate installs the subscriber that renders them, either as JSON
//! lines or as human-readable text.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ic_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `IC_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter |
//! | `IC_JSON_LOGS` | `false` (`true` in containers) | JSON lines |
//! | `IC_CONSOLE_OUTPUT` | `true` | Write logs at all |
//! | `IC_SERVICE_NAME` | `ic-node` | Service name |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod logging;

pub use config::{TelemetryConfig, DEFAULT_LOG_LEVEL};
pub use logging::{env_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("telemetry already initialized")]
    AlreadyInitialized,

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Initialize structured logging.
///
/// A second call in the same process returns
/// [`TelemetryError::AlreadyInitialized`].
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    logging::init_logging(config)
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
