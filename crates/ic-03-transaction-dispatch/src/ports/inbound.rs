//! Driving ports: what callers use and what each domain supplies.

use serde::de::DeserializeOwned;
use shared_types::{ChainId, InterchainResult};

use crate::domain::{
    StatusNotice, StatusReport, TransactionKind, TransactionRecord, TransactionRequest,
    TransactionState,
};

/// Object-safe transaction API exposed by every domain dispatcher.
pub trait TransactionApi: Send + Sync {
    /// Owning domain.
    fn chain(&self) -> ChainId;

    /// Wire names of the supported transaction types.
    fn transaction_types(&self) -> Vec<&'static str>;

    /// Decode a JSON request and initiate it.
    fn initiate_json(&self, request: &[u8]) -> InterchainResult<TransactionRecord>;

    /// Move a processing transaction to `Completed` or `Failed` and notify
    /// engaged peers.
    fn update_status(
        &self,
        transaction_id: &str,
        status: TransactionState,
    ) -> InterchainResult<StatusReport>;

    /// Close a completed or failed transaction.
    fn finalize(&self, transaction_id: &str) -> InterchainResult<TransactionRecord>;

    /// Current record.
    fn status(&self, transaction_id: &str) -> InterchainResult<TransactionRecord>;
}

/// Domain-specific half of the dispatcher.
///
/// `validate` must not call collaborators; `process` runs only after it
/// succeeds and returns the peers it engaged.
pub trait TransactionDomain: Send + Sync + 'static {
    /// Sub-records carried by this domain's requests.
    type Payload: DeserializeOwned + Send + Sync;
    /// Closed set of transaction types.
    type Kind: TransactionKind;

    /// Owning domain.
    const CHAIN: ChainId;

    /// Type-conditional structural validation.
    fn validate(
        &self,
        kind: Self::Kind,
        request: &TransactionRequest<Self::Payload>,
    ) -> InterchainResult<()>;

    /// Dispatch to the processing branch for `kind`.
    fn process(
        &self,
        kind: Self::Kind,
        request: &TransactionRequest<Self::Payload>,
    ) -> InterchainResult<Vec<ChainId>>;

    /// Deliver a status notice to an engaged peer.
    fn notify_peer(&self, peer: ChainId, notice: &StatusNotice) -> InterchainResult<()>;
}
