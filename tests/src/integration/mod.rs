//! # Cross-Domain Integration
//!
//! Every test runs against a [`DomainRegistry`] wired the way `ic-node`
//! wires it, over one shared [`RecordingCollaborators`].

pub mod journal;
pub mod lifecycle;
pub mod routing;
pub mod scenarios;

use ic_04_domain_contracts::RecordingCollaborators;
use ic_runtime::{DomainRegistry, NodeConfig};
use std::sync::Arc;

/// Registry plus a handle on its collaborators.
pub struct Node {
    /// Wired domains.
    pub registry: DomainRegistry,
    /// Collaborator call log.
    pub rec: Arc<RecordingCollaborators>,
}

impl Node {
    /// All domains, collaborators that accept everything.
    pub fn new() -> Self {
        Self::with(RecordingCollaborators::new(), NodeConfig::default())
    }

    /// All domains, selected capabilities failing.
    pub fn failing(capabilities: &[&str]) -> Self {
        let rec = capabilities
            .iter()
            .fold(RecordingCollaborators::new(), |rec, capability| rec.fail_on(capability));
        Self::with(rec, NodeConfig::default())
    }

    /// Explicit collaborators and configuration.
    pub fn with(rec: RecordingCollaborators, config: NodeConfig) -> Self {
        let rec = Arc::new(rec);
        let registry = match DomainRegistry::from_config(&config, rec.clone()) {
            Ok(registry) => registry,
            Err(err) => panic!("test node config rejected: {err}"),
        };
        Self { registry, rec }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a JSON literal.
pub fn json(value: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&value).unwrap_or_default()
}
