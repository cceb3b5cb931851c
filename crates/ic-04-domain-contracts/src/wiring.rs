//! Shared infrastructure handed to every domain service.

use ic_02_interchain_router::{
    AuditSink, InMemoryAuditLog, InMemoryOutbox, InterchainContract, Outbox,
    DEFAULT_AUDIT_RETENTION,
};
use ic_03_transaction_dispatch::{InMemoryTransactionStore, TransactionApi, TransactionStore};
use shared_types::{ChainId, InterchainError, InterchainResult};
use std::sync::Arc;

/// Audit sink, outbox and transaction store shared by all domains.
#[derive(Clone)]
pub struct DomainWiring {
    /// Callback audit sink.
    pub audit: Arc<dyn AuditSink>,
    /// Outbound message queue.
    pub outbox: Arc<dyn Outbox>,
    /// Transaction records.
    pub store: Arc<dyn TransactionStore>,
}

impl DomainWiring {
    /// Wire explicit adapters.
    pub fn new(
        audit: Arc<dyn AuditSink>,
        outbox: Arc<dyn Outbox>,
        store: Arc<dyn TransactionStore>,
    ) -> Self {
        Self {
            audit,
            outbox,
            store,
        }
    }

    /// In-memory adapters with default bounds.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryAuditLog::new(DEFAULT_AUDIT_RETENTION)),
            Arc::new(InMemoryOutbox::new()),
            Arc::new(InMemoryTransactionStore::default()),
        )
    }
}

/// Uniform view of a domain: its interchain contract and transaction API.
pub trait DomainService: Send + Sync {
    /// Domain identity.
    fn chain(&self) -> ChainId;

    /// Four-operation interchain contract.
    fn contract(&self) -> &dyn InterchainContract;

    /// Transaction lifecycle.
    fn transactions(&self) -> &dyn TransactionApi;
}

/// Serialize a record for an outbound message.
pub(crate) fn encode<T: serde::Serialize>(value: &T) -> InterchainResult<Vec<u8>> {
    serde_json::to_vec(value)
        .map_err(|e| InterchainError::invalid(format!("failed to encode payload: {e}")))
}
