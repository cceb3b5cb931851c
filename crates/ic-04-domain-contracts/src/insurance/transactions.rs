//! Insurance transactions.

use ic_01_entity_validation::domain::invariants::{require_amount, require_id};
use ic_01_entity_validation::{Claim, Policy, Validate};
use ic_02_interchain_router::InterchainRouter;
use ic_03_transaction_dispatch::{
    transaction_kinds, StatusNotice, TransactionDomain, TransactionRequest,
};
use serde::{Deserialize, Serialize};
use shared_types::{ChainId, InterchainError, InterchainResult};
use std::sync::Arc;

use super::contract::InsuranceContract;
use crate::wiring::encode;

transaction_kinds! {
    /// Insurance transaction types.
    pub enum InsuranceTransactionType {
        /// Write a policy.
        NewPolicy => "NEW_POLICY",
        /// Amend a policy.
        UpdatePolicy => "UPDATE_POLICY",
        /// Cancel a policy.
        CancelPolicy => "CANCEL_POLICY",
        /// File a claim.
        FileClaim => "FILE_CLAIM",
        /// Move a claim to a new status.
        UpdateClaim => "UPDATE_CLAIM",
    }
}

/// Policy or claim sub-record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsurancePayload {
    /// Policy sub-record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_data: Option<Policy>,
    /// Claim sub-record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_data: Option<Claim>,
}

impl InsurancePayload {
    fn policy(&self) -> InterchainResult<&Policy> {
        self.policy_data
            .as_ref()
            .ok_or_else(|| InterchainError::invalid("policy data is required"))
    }

    fn claim(&self) -> InterchainResult<&Claim> {
        self.claim_data
            .as_ref()
            .ok_or_else(|| InterchainError::invalid("claim data is required"))
    }
}

/// Insurance request.
pub type InsuranceTransactionRequest = TransactionRequest<InsurancePayload>;

/// Insurance half of the dispatcher.
pub struct InsuranceTransactions {
    router: Arc<InterchainRouter<InsuranceContract>>,
}

impl InsuranceTransactions {
    /// Dispatch through `router`.
    pub fn new(router: Arc<InterchainRouter<InsuranceContract>>) -> Self {
        Self { router }
    }
}

impl TransactionDomain for InsuranceTransactions {
    type Payload = InsurancePayload;
    type Kind = InsuranceTransactionType;
    const CHAIN: ChainId = ChainId::Insurance;

    fn validate(
        &self,
        kind: InsuranceTransactionType,
        request: &InsuranceTransactionRequest,
    ) -> InterchainResult<()> {
        let payload = &request.payload;
        match kind {
            InsuranceTransactionType::NewPolicy => {
                let policy = payload.policy()?;
                require_id(&policy.policy_id, "policy ID is required")?;
                require_amount(policy.coverage.as_ref(), "invalid coverage amount")?;
                policy.validate()
            }
            InsuranceTransactionType::UpdatePolicy => {
                let policy = payload.policy()?;
                require_id(&policy.policy_id, "policy ID is required")?;
                require_amount(policy.coverage.as_ref(), "invalid coverage amount")
            }
            InsuranceTransactionType::CancelPolicy => {
                require_id(&payload.policy()?.policy_id, "policy ID is required")
            }
            InsuranceTransactionType::FileClaim | InsuranceTransactionType::UpdateClaim => {
                payload.claim()?.validate()
            }
        }
    }

    fn process(
        &self,
        kind: InsuranceTransactionType,
        request: &InsuranceTransactionRequest,
    ) -> InterchainResult<Vec<ChainId>> {
        let contract = self.router.domain();
        let c = contract.collaborators();
        let payload = &request.payload;
        match kind {
            InsuranceTransactionType::NewPolicy => {
                let policy = payload.policy()?;
                c.compliance.validate_compliance(policy)?;
                c.policies.create_policy(policy)?;
            }
            InsuranceTransactionType::UpdatePolicy => {
                c.policies.update_policy(payload.policy()?)?
            }
            InsuranceTransactionType::CancelPolicy => {
                c.policies.cancel_policy(&payload.policy()?.policy_id)?
            }
            InsuranceTransactionType::FileClaim => contract.settle_claim(payload.claim()?)?,
            InsuranceTransactionType::UpdateClaim => {
                let claim = payload.claim()?;
                c.claims.update_claim_status(&claim.claim_id, &claim.status)?;
            }
        }
        Ok(Vec::new())
    }

    fn notify_peer(&self, peer: ChainId, notice: &StatusNotice) -> InterchainResult<()> {
        self.router.send(peer, &encode(notice)?).map(|_| ())
    }
}
