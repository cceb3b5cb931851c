//! # Node Configuration
//!
//! TOML configuration for the node. Every section is optional and falls
//! back to its defaults.
//!
//! ```toml
//! [telemetry]
//! log_level = "debug"
//! json_logs = true
//!
//! [store]
//! max_tracked_transactions = 50000
//!
//! [domains]
//! enabled = ["ecommerce", "finance", "insurance"]
//!
//! [audit]
//! retain_events = 4096
//!
//! [outbox]
//! capacity = 4096
//! ```

use ic_02_interchain_router::{DEFAULT_AUDIT_RETENTION, DEFAULT_OUTBOX_CAPACITY};
use ic_03_transaction_dispatch::DEFAULT_MAX_TRACKED_TRANSACTIONS;
use ic_telemetry::{TelemetryConfig, DEFAULT_LOG_LEVEL};
use serde::{Deserialize, Serialize};
use shared_types::ChainId;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Complete node configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeConfig {
    /// Logging configuration.
    pub telemetry: TelemetrySection,
    /// Transaction store configuration.
    pub store: StoreConfig,
    /// Hosted domains.
    pub domains: DomainsConfig,
    /// Callback audit log configuration.
    pub audit: AuditConfig,
    /// Outbound queue configuration.
    pub outbox: OutboxConfig,
}

/// `[telemetry]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetrySection {
    /// Log filter.
    pub log_level: String,
    /// JSON log lines.
    pub json_logs: bool,
}

impl Default for TelemetrySection {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json_logs: false,
        }
    }
}

impl TelemetrySection {
    /// Overlay this section on `base`. JSON output stays on if either side
    /// asks for it.
    pub fn apply(&self, base: TelemetryConfig) -> TelemetryConfig {
        let json = base.json_logs || self.json_logs;
        base.with_log_level(&self.log_level).with_json_logs(json)
    }
}

/// `[store]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Records kept before the store reports exhaustion.
    pub max_tracked_transactions: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_tracked_transactions: DEFAULT_MAX_TRACKED_TRANSACTIONS,
        }
    }
}

/// `[domains]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainsConfig {
    /// Routing keys of the hosted domains.
    pub enabled: Vec<String>,
}

impl Default for DomainsConfig {
    fn default() -> Self {
        Self {
            enabled: ChainId::DOMAINS.iter().map(|c| c.as_str().to_string()).collect(),
        }
    }
}

/// `[audit]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Callback events kept in memory.
    pub retain_events: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            retain_events: DEFAULT_AUDIT_RETENTION,
        }
    }
}

/// `[outbox]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutboxConfig {
    /// Undrained outbound messages kept before the oldest is dropped.
    pub capacity: usize,
}

impl Default for OutboxConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_OUTBOX_CAPACITY,
        }
    }
}

impl NodeConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Enabled domains, deduplicated and in routing-key order.
    pub fn enabled_domains(&self) -> Result<Vec<ChainId>, ConfigError> {
        let mut chains = BTreeSet::new();
        for key in &self.domains.enabled {
            let chain = key
                .parse::<ChainId>()
                .ok()
                .filter(ChainId::hosts_domain)
                .ok_or_else(|| ConfigError::Invalid(format!("unknown domain {key:?}")))?;
            chains.insert(chain);
        }
        Ok(chains.into_iter().collect())
    }

    /// Reject configurations the node cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled_domains()?.is_empty() {
            return Err(ConfigError::Invalid("no domains enabled".into()));
        }
        if self.store.max_tracked_transactions == 0 {
            return Err(ConfigError::Invalid(
                "store.max_tracked_transactions must be positive".into(),
            ));
        }
        if self.outbox.capacity == 0 {
            return Err(ConfigError::Invalid("outbox.capacity must be positive".into()));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("failed to read {path}: {error}")]
    Io {
        /// Path of the file that failed to load.
        path: String,
        /// Error message from the I/O operation.
        error: String,
    },

    /// TOML syntax or type error.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Well-formed but unusable configuration.
    #[error("invalid config: {0}")]
    Invalid(String),
}
