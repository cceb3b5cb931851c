//! In-Memory Transaction Store
//!
//! Bounded map of tracked transactions. When full, the oldest finalized
//! record is evicted; live records are never dropped.

use parking_lot::RwLock;
use shared_types::{ChainId, InterchainError, InterchainResult};
use std::collections::HashMap;
use tracing::debug;

use crate::domain::{TransactionRecord, TransactionState};
use crate::ports::TransactionStore;

/// Default number of tracked transactions.
pub const DEFAULT_MAX_TRACKED_TRANSACTIONS: usize = 100_000;

type Key = (ChainId, String);

/// Bounded in-memory store.
pub struct InMemoryTransactionStore {
    records: RwLock<HashMap<Key, TransactionRecord>>,
    capacity: usize,
}

impl InMemoryTransactionStore {
    /// Store holding at most `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    /// Maximum number of records.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of tracked records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Records belonging to `domain`.
    pub fn records_for(&self, domain: ChainId) -> Vec<TransactionRecord> {
        self.records
            .read()
            .values()
            .filter(|record| record.domain == domain)
            .cloned()
            .collect()
    }

    fn evict_finalized(records: &mut HashMap<Key, TransactionRecord>) -> bool {
        let oldest = records
            .iter()
            .filter(|(_, record)| record.state == TransactionState::Finalized)
            .min_by_key(|(_, record)| record.updated_at)
            .map(|(key, _)| key.clone());
        match oldest {
            Some(key) => {
                debug!("[ic-03] evicting finalized transaction {}/{}", key.0, key.1);
                records.remove(&key);
                true
            }
            None => false,
        }
    }
}

impl Default for InMemoryTransactionStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TRACKED_TRANSACTIONS)
    }
}

impl TransactionStore for InMemoryTransactionStore {
    fn insert(&self, record: TransactionRecord) -> InterchainResult<()> {
        let mut records = self.records.write();
        let key = (record.domain, record.transaction_id.clone());
        if records.contains_key(&key) {
            return Err(InterchainError::invalid("transaction ID already exists"));
        }
        if records.len() >= self.capacity && !Self::evict_finalized(&mut records) {
            return Err(InterchainError::collaborator(
                "transaction_store",
                "capacity exhausted",
            ));
        }
        records.insert(key, record);
        Ok(())
    }

    fn get(&self, domain: ChainId, transaction_id: &str) -> Option<TransactionRecord> {
        self.records
            .read()
            .get(&(domain, transaction_id.to_string()))
            .cloned()
    }

    fn update(&self, record: TransactionRecord) -> InterchainResult<()> {
        let mut records = self.records.write();
        let key = (record.domain, record.transaction_id.clone());
        match records.get_mut(&key) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(InterchainError::NotFound(record.transaction_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finalized(id: &str) -> TransactionRecord {
        let mut record = TransactionRecord::new(id, ChainId::Finance, "PAYMENT");
        for state in [
            TransactionState::Validated,
            TransactionState::Processing,
            TransactionState::Completed,
            TransactionState::Finalized,
        ] {
            record.transition_to(state).unwrap();
        }
        record
    }

    #[test]
    fn test_insert_and_get() {
        let store = InMemoryTransactionStore::default();
        store
            .insert(TransactionRecord::new("TX-1", ChainId::Finance, "PAYMENT"))
            .unwrap();
        assert!(store.contains(ChainId::Finance, "TX-1"));
        assert!(store.get(ChainId::Retail, "TX-1").is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let store = InMemoryTransactionStore::default();
        let record = TransactionRecord::new("TX-1", ChainId::Finance, "PAYMENT");
        store.insert(record.clone()).unwrap();
        let err = store.insert(record).unwrap_err();
        assert_eq!(err.reason(), Some("transaction ID already exists"));
    }

    #[test]
    fn test_same_id_in_other_domain_allowed() {
        let store = InMemoryTransactionStore::default();
        store
            .insert(TransactionRecord::new("TX-1", ChainId::Finance, "PAYMENT"))
            .unwrap();
        store
            .insert(TransactionRecord::new("TX-1", ChainId::Retail, "SALE"))
            .unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_unknown_is_not_found() {
        let store = InMemoryTransactionStore::default();
        let err = store
            .update(TransactionRecord::new("TX-404", ChainId::Finance, "PAYMENT"))
            .unwrap_err();
        assert_eq!(err, InterchainError::NotFound("TX-404".into()));
    }

    #[test]
    fn test_full_store_evicts_finalized() {
        let store = InMemoryTransactionStore::new(2);
        store.insert(finalized("TX-old")).unwrap();
        store
            .insert(TransactionRecord::new("TX-live", ChainId::Finance, "PAYMENT"))
            .unwrap();
        store
            .insert(TransactionRecord::new("TX-new", ChainId::Finance, "PAYMENT"))
            .unwrap();
        assert!(!store.contains(ChainId::Finance, "TX-old"));
        assert!(store.contains(ChainId::Finance, "TX-live"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_full_store_without_finalized_rejects() {
        let store = InMemoryTransactionStore::new(1);
        store
            .insert(TransactionRecord::new("TX-1", ChainId::Finance, "PAYMENT"))
            .unwrap();
        let err = store
            .insert(TransactionRecord::new("TX-2", ChainId::Finance, "PAYMENT"))
            .unwrap_err();
        assert!(matches!(err, InterchainError::Collaborator(_)));
    }
}
