//! # Transaction Dispatcher Service
//!
//! Generic lifecycle driver for one domain.
//!
//! ## Initiate Flow
//!
//! ```text
//! transaction id ──→ type lookup ──→ domain.validate ──→ duplicate check
//!                                                              │
//!                      Validated (stored) ──→ Processing ──→ domain.process
//!                                                              │
//!                                     Ok: stays Processing, peers recorded
//!                                     Err: Failed, error returned unchanged
//! ```
//!
//! Nothing reaches the store or a collaborator until every check passed.

use ic_01_entity_validation::domain::invariants::require_id;
use shared_types::{ChainId, InterchainError, InterchainResult};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{
    StatusNotice, StatusReport, TransactionKind, TransactionRecord, TransactionRequest,
    TransactionState,
};
use crate::ports::{TransactionApi, TransactionDomain, TransactionStore};

/// Dispatcher for domain `T`.
pub struct TransactionDispatcher<T: TransactionDomain> {
    domain: T,
    store: Arc<dyn TransactionStore>,
}

impl<T: TransactionDomain> TransactionDispatcher<T> {
    /// Create a dispatcher over `store`.
    pub fn new(domain: T, store: Arc<dyn TransactionStore>) -> Self {
        Self { domain, store }
    }

    /// The domain half.
    pub fn domain(&self) -> &T {
        &self.domain
    }

    /// Validate, record and dispatch a request.
    pub fn initiate(
        &self,
        request: TransactionRequest<T::Payload>,
    ) -> InterchainResult<TransactionRecord> {
        require_id(&request.transaction_id, "transaction ID is required")?;
        let kind = T::Kind::parse(&request.transaction_type).map_err(|err| {
            warn!(
                "[ic-03] {} rejected {}: type {:?}",
                T::CHAIN,
                request.transaction_id,
                request.transaction_type
            );
            err
        })?;
        self.domain.validate(kind, &request).map_err(|err| {
            warn!(
                "[ic-03] {} rejected {} ({}): {}",
                T::CHAIN,
                request.transaction_id,
                kind.as_str(),
                err
            );
            err
        })?;
        if self.store.contains(T::CHAIN, &request.transaction_id) {
            return Err(InterchainError::invalid("transaction ID already exists"));
        }

        let mut record = TransactionRecord::new(&request.transaction_id, T::CHAIN, kind.as_str());
        record.transition_to(TransactionState::Validated)?;
        self.store.insert(record.clone())?;
        debug!("[ic-03] {} {} validated", T::CHAIN, record.transaction_id);

        record.transition_to(TransactionState::Processing)?;
        self.store.update(record.clone())?;

        match self.domain.process(kind, &request) {
            Ok(peers) => {
                record.engaged_peers = peers;
                self.store.update(record.clone())?;
                info!(
                    "[ic-03] {} {} ({}) processing, engaged {:?}",
                    T::CHAIN,
                    record.transaction_id,
                    kind.as_str(),
                    record.engaged_peers
                );
                Ok(record)
            }
            Err(err) => {
                warn!(
                    "[ic-03] {} {} ({}) failed: {}",
                    T::CHAIN,
                    record.transaction_id,
                    kind.as_str(),
                    err
                );
                record.fail(err.detail())?;
                if let Err(store_err) = self.store.update(record) {
                    warn!("[ic-03] failed to persist failure: {}", store_err);
                }
                Err(err)
            }
        }
    }

    /// Decode and initiate a JSON request.
    pub fn initiate_bytes(&self, request: &[u8]) -> InterchainResult<TransactionRecord> {
        let request: TransactionRequest<T::Payload> = serde_json::from_slice(request)
            .map_err(|_| InterchainError::invalid("invalid transaction request format"))?;
        self.initiate(request)
    }

    /// Move a processing transaction to `Completed` or `Failed`, then notify
    /// every engaged peer.
    pub fn update_status(
        &self,
        transaction_id: &str,
        status: TransactionState,
    ) -> InterchainResult<StatusReport> {
        let mut record = self.load(transaction_id)?;
        if !status.is_outcome() {
            return Err(InterchainError::InvalidState {
                from: format!("{:?}", record.state),
                to: format!("{:?}", status),
            });
        }
        record.transition_to(status)?;
        self.store.update(record.clone())?;
        info!("[ic-03] {} {} -> {}", T::CHAIN, transaction_id, status);

        let notice = StatusNotice::for_record(&record);
        let mut notified = Vec::new();
        let mut unreachable = Vec::new();
        for &peer in &record.engaged_peers {
            match self.domain.notify_peer(peer, &notice) {
                Ok(()) => notified.push(peer),
                Err(err) => {
                    warn!(
                        "[ic-03] {} {}: could not notify {}: {}",
                        T::CHAIN,
                        transaction_id,
                        peer,
                        err
                    );
                    unreachable.push(peer);
                }
            }
        }

        Ok(StatusReport {
            record,
            notified,
            unreachable,
        })
    }

    /// Close a completed or failed transaction.
    pub fn finalize(&self, transaction_id: &str) -> InterchainResult<TransactionRecord> {
        let mut record = self.load(transaction_id)?;
        if !record.state.is_outcome() {
            return Err(InterchainError::InvalidState {
                from: format!("{:?}", record.state),
                to: format!("{:?}", TransactionState::Finalized),
            });
        }
        record.transition_to(TransactionState::Finalized)?;
        self.store.update(record.clone())?;
        info!("[ic-03] {} {} finalized", T::CHAIN, transaction_id);
        Ok(record)
    }

    /// Current record.
    pub fn status(&self, transaction_id: &str) -> InterchainResult<TransactionRecord> {
        self.load(transaction_id)
    }

    fn load(&self, transaction_id: &str) -> InterchainResult<TransactionRecord> {
        self.store
            .get(T::CHAIN, transaction_id)
            .ok_or_else(|| InterchainError::NotFound(transaction_id.to_string()))
    }
}

impl<T: TransactionDomain> TransactionApi for TransactionDispatcher<T> {
    fn chain(&self) -> ChainId {
        T::CHAIN
    }

    fn transaction_types(&self) -> Vec<&'static str> {
        T::Kind::names()
    }

    fn initiate_json(&self, request: &[u8]) -> InterchainResult<TransactionRecord> {
        self.initiate_bytes(request)
    }

    fn update_status(
        &self,
        transaction_id: &str,
        status: TransactionState,
    ) -> InterchainResult<StatusReport> {
        TransactionDispatcher::update_status(self, transaction_id, status)
    }

    fn finalize(&self, transaction_id: &str) -> InterchainResult<TransactionRecord> {
        TransactionDispatcher::finalize(self, transaction_id)
    }

    fn status(&self, transaction_id: &str) -> InterchainResult<TransactionRecord> {
        TransactionDispatcher::status(self, transaction_id)
    }
}
