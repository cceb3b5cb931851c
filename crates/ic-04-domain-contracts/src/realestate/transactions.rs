//! Property transactions.
//!
//! Every sale, lease or transfer is announced to finance, government and
//! insurance.

use ic_01_entity_validation::domain::invariants::{require_amount, require_id};
use ic_02_interchain_router::InterchainRouter;
use ic_03_transaction_dispatch::{
    transaction_kinds, StatusNotice, TransactionDomain, TransactionRequest,
};
use serde::{Deserialize, Serialize};
use shared_types::{Amount, ChainId, InterchainError, InterchainResult};
use std::sync::Arc;

use super::contract::RealEstateContract;
use crate::wiring::encode;

transaction_kinds! {
    /// Real estate transaction types.
    pub enum PropertyTransactionType {
        /// Sale of a property.
        Sale => "SALE",
        /// Lease of a property.
        Lease => "LEASE",
        /// Title transfer.
        Transfer => "TRANSFER",
    }
}

/// Peers announced for every property transaction.
pub const PROPERTY_PEERS: [ChainId; 3] =
    [ChainId::Finance, ChainId::Government, ChainId::Insurance];

/// Signed deed or contract referenced by a transaction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyDocument {
    /// Document category.
    pub doc_type: String,
    /// Content hash.
    pub hash: String,
    /// Content location.
    pub ipfs_link: String,
    /// Signing party.
    pub signed_by: String,
    /// Signature over `hash`.
    pub signature: String,
}

/// Property fields carried by a real estate request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyPayload {
    /// Property identifier.
    pub property_id: String,
    /// Current holder.
    pub from_address: String,
    /// New holder or tenant.
    pub to_address: String,
    /// Price or rent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Deeds and contracts.
    pub documents: Vec<PropertyDocument>,
}

/// Real estate request.
pub type PropertyTransactionRequest = TransactionRequest<PropertyPayload>;

/// Real estate half of the dispatcher.
pub struct PropertyTransactions {
    router: Arc<InterchainRouter<RealEstateContract>>,
}

impl PropertyTransactions {
    /// Dispatch through `router`.
    pub fn new(router: Arc<InterchainRouter<RealEstateContract>>) -> Self {
        Self { router }
    }
}

impl TransactionDomain for PropertyTransactions {
    type Payload = PropertyPayload;
    type Kind = PropertyTransactionType;
    const CHAIN: ChainId = ChainId::RealEstate;

    fn validate(
        &self,
        _kind: PropertyTransactionType,
        request: &PropertyTransactionRequest,
    ) -> InterchainResult<()> {
        let payload = &request.payload;
        require_id(&payload.property_id, "property ID is required")?;
        if payload.from_address.is_empty() || payload.to_address.is_empty() {
            return Err(InterchainError::invalid("from and to addresses are required"));
        }
        require_amount(payload.amount.as_ref(), "invalid transaction amount")
    }

    fn process(
        &self,
        _kind: PropertyTransactionType,
        request: &PropertyTransactionRequest,
    ) -> InterchainResult<Vec<ChainId>> {
        let data = encode(request)?;
        for peer in PROPERTY_PEERS {
            self.router.send(peer, &data)?;
        }
        Ok(PROPERTY_PEERS.to_vec())
    }

    fn notify_peer(&self, peer: ChainId, notice: &StatusNotice) -> InterchainResult<()> {
        self.router.send(peer, &encode(notice)?).map(|_| ())
    }
}
