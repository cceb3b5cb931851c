//! Driven ports.

use shared_types::{ChainId, InterchainResult};

use crate::domain::TransactionRecord;

/// Persistence for tracked transactions, keyed by domain and id.
pub trait TransactionStore: Send + Sync {
    /// Insert a new record. Fails if the key already exists.
    fn insert(&self, record: TransactionRecord) -> InterchainResult<()>;

    /// Look up a record.
    fn get(&self, domain: ChainId, transaction_id: &str) -> Option<TransactionRecord>;

    /// Replace an existing record.
    fn update(&self, record: TransactionRecord) -> InterchainResult<()>;

    /// Whether a record exists.
    fn contains(&self, domain: ChainId, transaction_id: &str) -> bool {
        self.get(domain, transaction_id).is_some()
    }
}
