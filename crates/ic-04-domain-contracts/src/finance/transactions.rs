//! Financial transactions.

use ic_01_entity_validation::domain::invariants::{require_amount, require_id};
use ic_01_entity_validation::{FinancialTransaction, TransactionMetadata};
use ic_02_interchain_router::InterchainRouter;
use ic_03_transaction_dispatch::{
    transaction_kinds, StatusNotice, TransactionDomain, TransactionKind, TransactionRequest,
};
use serde::{Deserialize, Serialize};
use shared_types::{Amount, ChainId, InterchainResult};
use std::sync::Arc;

use super::contract::FinanceContract;
use crate::wiring::encode;

transaction_kinds! {
    /// Finance transaction types.
    pub enum FinancialTransactionType {
        /// Payment.
        Payment => "PAYMENT",
        /// Transfer.
        Transfer => "TRANSFER",
        /// Investment.
        Investment => "INVESTMENT",
        /// Loan.
        Loan => "LOAN",
    }
}

/// Funds movement fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FundsPayload {
    /// Paying party.
    pub from_address: String,
    /// Receiving party.
    pub to_address: String,
    /// Amount moved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Currency code.
    pub currency: String,
    /// Free-text purpose.
    pub purpose: String,
}

/// Finance request.
pub type FinancialTransactionRequest = TransactionRequest<FundsPayload>;

/// Finance half of the dispatcher.
pub struct FinancialTransactions {
    router: Arc<InterchainRouter<FinanceContract>>,
}

impl FinancialTransactions {
    /// Dispatch through `router`.
    pub fn new(router: Arc<InterchainRouter<FinanceContract>>) -> Self {
        Self { router }
    }

    fn transaction_from(
        kind: FinancialTransactionType,
        request: &FinancialTransactionRequest,
    ) -> FinancialTransaction {
        let payload = &request.payload;
        FinancialTransaction {
            transaction_id: request.transaction_id.clone(),
            from_address: payload.from_address.clone(),
            to_address: payload.to_address.clone(),
            amount: payload.amount,
            currency: payload.currency.clone(),
            tx_type: kind.as_str().to_string(),
            status: "pending".to_string(),
            timestamp: request.timestamp,
            metadata: TransactionMetadata {
                purpose: payload.purpose.clone(),
                references: request.metadata.references.clone(),
                ..Default::default()
            },
        }
    }
}

impl TransactionDomain for FinancialTransactions {
    type Payload = FundsPayload;
    type Kind = FinancialTransactionType;
    const CHAIN: ChainId = ChainId::Finance;

    fn validate(
        &self,
        _kind: FinancialTransactionType,
        request: &FinancialTransactionRequest,
    ) -> InterchainResult<()> {
        let payload = &request.payload;
        require_id(&payload.from_address, "from address is required")?;
        require_id(&payload.to_address, "to address is required")?;
        require_amount(payload.amount.as_ref(), "invalid amount")?;
        require_id(&payload.currency, "currency is required")
    }

    fn process(
        &self,
        kind: FinancialTransactionType,
        request: &FinancialTransactionRequest,
    ) -> InterchainResult<Vec<ChainId>> {
        let tx = Self::transaction_from(kind, request);
        let funds = &self.router.domain().collaborators().funds;
        match kind {
            FinancialTransactionType::Payment => funds.process_payment(&tx)?,
            FinancialTransactionType::Transfer => funds.process_transfer(&tx)?,
            FinancialTransactionType::Investment => funds.process_investment(&tx)?,
            FinancialTransactionType::Loan => funds.process_loan(&tx)?,
        }
        Ok(Vec::new())
    }

    fn notify_peer(&self, peer: ChainId, notice: &StatusNotice) -> InterchainResult<()> {
        self.router.send(peer, &encode(notice)?).map(|_| ())
    }
}
