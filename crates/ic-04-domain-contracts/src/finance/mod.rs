//! # Finance Domain
//!
//! Settles payments arriving from real estate, insurance and retail;
//! exposes fee and risk queries.

pub mod contract;
pub mod ports;
pub mod transactions;

pub use contract::FinanceContract;
pub use ports::{
    FeeSchedule, FinanceCollaborators, FinanceValidator, FundsProcessor, RiskAssessment,
};
pub use transactions::{
    FinancialTransactionRequest, FinancialTransactionType, FinancialTransactions, FundsPayload,
};

use ic_01_entity_validation::{decode, EntityKind, FinancialTransaction, Validate};
use ic_02_interchain_router::{InterchainContract, InterchainRouter};
use ic_03_transaction_dispatch::{TransactionApi, TransactionDispatcher};
use shared_types::{Amount, ChainId, InterchainResult};
use std::sync::Arc;
use tracing::debug;

use crate::wiring::{DomainService, DomainWiring};

/// Finance service facade.
pub struct FinanceService {
    router: Arc<InterchainRouter<FinanceContract>>,
    dispatcher: TransactionDispatcher<FinancialTransactions>,
}

impl FinanceService {
    /// Wire the finance domain.
    pub fn new(collaborators: FinanceCollaborators, wiring: &DomainWiring) -> Self {
        let router = Arc::new(InterchainRouter::new(
            FinanceContract::new(collaborators),
            wiring.audit.clone(),
            wiring.outbox.clone(),
        ));
        let dispatcher = TransactionDispatcher::new(
            FinancialTransactions::new(router.clone()),
            wiring.store.clone(),
        );
        Self { router, dispatcher }
    }

    /// Interchain router.
    pub fn router(&self) -> &InterchainRouter<FinanceContract> {
        &self.router
    }

    /// Transaction dispatcher.
    pub fn dispatcher(&self) -> &TransactionDispatcher<FinancialTransactions> {
        &self.dispatcher
    }

    fn collaborators(&self) -> &FinanceCollaborators {
        self.router.domain().collaborators()
    }

    fn decode_valid(tx: &[u8]) -> InterchainResult<FinancialTransaction> {
        let tx: FinancialTransaction = decode(EntityKind::FinancialTransaction, tx)?;
        tx.validate()?;
        Ok(tx)
    }

    /// Structural plus business-rule validation.
    pub fn validate_transaction(&self, tx: &[u8]) -> InterchainResult<()> {
        let tx = Self::decode_valid(tx)?;
        self.collaborators().validator.validate_transaction(&tx)
    }

    /// Fee for a transaction, from the fee schedule.
    pub fn calculate_fees(&self, tx: &[u8]) -> InterchainResult<Amount> {
        let tx = Self::decode_valid(tx)?;
        let amount = tx.amount.unwrap_or_default();
        let fee = self.collaborators().fees.calculate_fees(&amount, &tx.tx_type)?;
        debug!("[finance] fee for {} ({}): {}", tx.transaction_id, tx.tx_type, fee);
        Ok(fee)
    }

    /// Risk level for a transaction, checked against its threshold.
    pub fn assess_risk(&self, tx: &[u8]) -> InterchainResult<String> {
        let tx = Self::decode_valid(tx)?;
        let risk = &self.collaborators().risk;
        let level = risk.assess_transaction_risk(&tx)?;
        risk.validate_risk_thresholds(&tx.amount.unwrap_or_default(), &level)?;
        Ok(level)
    }
}

impl DomainService for FinanceService {
    fn chain(&self) -> ChainId {
        ChainId::Finance
    }

    fn contract(&self) -> &dyn InterchainContract {
        self.router.as_ref()
    }

    fn transactions(&self) -> &dyn TransactionApi {
        &self.dispatcher
    }
}
