//! Shared fixtures for domain tests.

use ic_02_interchain_router::{InMemoryAuditLog, InMemoryOutbox};
use ic_03_transaction_dispatch::InMemoryTransactionStore;
use std::sync::Arc;

use crate::adapters::RecordingCollaborators;
use crate::wiring::DomainWiring;

/// In-memory wiring plus handles on every adapter.
pub(crate) struct Harness {
    pub rec: Arc<RecordingCollaborators>,
    pub audit: Arc<InMemoryAuditLog>,
    pub outbox: Arc<InMemoryOutbox>,
    pub wiring: DomainWiring,
}

impl Harness {
    pub fn new() -> Self {
        Self::with(RecordingCollaborators::new())
    }

    pub fn with(rec: RecordingCollaborators) -> Self {
        let audit = Arc::new(InMemoryAuditLog::default());
        let outbox = Arc::new(InMemoryOutbox::new());
        let wiring = DomainWiring::new(
            audit.clone(),
            outbox.clone(),
            Arc::new(InMemoryTransactionStore::default()),
        );
        Self {
            rec: Arc::new(rec),
            audit,
            outbox,
            wiring,
        }
    }
}

pub(crate) fn json(value: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&value).unwrap()
}
