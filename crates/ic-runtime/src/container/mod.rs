//! # Domain Container
//!
//! Node configuration and the registry of wired domain services.

pub mod config;
pub mod registry;

pub use config::{
    AuditConfig, ConfigError, DomainsConfig, NodeConfig, OutboxConfig, StoreConfig,
    TelemetrySection,
};
pub use registry::DomainRegistry;
