//! # Insurance Domain
//!
//! Policies and claims. Claims from healthcare are always validated by the
//! claims desk before they are processed.

pub mod contract;
pub mod ports;
pub mod transactions;

pub use contract::{InsuranceContract, INSURANCE_KINDS};
pub use ports::{
    ClaimProcessor, InsuranceCollaborators, InsuranceCompliance, PolicyManager, RiskAssessor,
};
pub use transactions::{
    InsurancePayload, InsuranceTransactionRequest, InsuranceTransactionType, InsuranceTransactions,
};

use ic_01_entity_validation::{decode, Claim, EntityKind, Policy, Validate};
use ic_02_interchain_router::{InterchainContract, InterchainRouter};
use ic_03_transaction_dispatch::{TransactionApi, TransactionDispatcher};
use serde::{Deserialize, Serialize};
use shared_types::{Amount, ChainId, InterchainError, InterchainResult};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::wiring::{DomainService, DomainWiring};

/// Input to [`InsuranceService::calculate_premium`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PremiumQuote {
    /// Policy type being priced.
    pub policy_type: String,
    /// Underwriting inputs.
    pub risk_factors: BTreeMap<String, serde_json::Value>,
}

/// Insurance service facade.
pub struct InsuranceService {
    router: Arc<InterchainRouter<InsuranceContract>>,
    dispatcher: TransactionDispatcher<InsuranceTransactions>,
}

impl InsuranceService {
    /// Wire the insurance domain.
    pub fn new(collaborators: InsuranceCollaborators, wiring: &DomainWiring) -> Self {
        let router = Arc::new(InterchainRouter::new(
            InsuranceContract::new(collaborators),
            wiring.audit.clone(),
            wiring.outbox.clone(),
        ));
        let dispatcher = TransactionDispatcher::new(
            InsuranceTransactions::new(router.clone()),
            wiring.store.clone(),
        );
        Self { router, dispatcher }
    }

    /// Interchain router.
    pub fn router(&self) -> &InterchainRouter<InsuranceContract> {
        &self.router
    }

    /// Transaction dispatcher.
    pub fn dispatcher(&self) -> &TransactionDispatcher<InsuranceTransactions> {
        &self.dispatcher
    }

    fn collaborators(&self) -> &InsuranceCollaborators {
        self.router.domain().collaborators()
    }

    fn decode_policy(policy: &[u8]) -> InterchainResult<Policy> {
        let policy: Policy = decode(EntityKind::Policy, policy)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Structural plus regulatory validation of a policy.
    pub fn validate_policy(&self, policy: &[u8]) -> InterchainResult<()> {
        let policy = Self::decode_policy(policy)?;
        self.collaborators().compliance.validate_compliance(&policy)
    }

    /// Validate then process a claim.
    pub fn process_claim(&self, claim: &[u8]) -> InterchainResult<()> {
        let claim: Claim = decode(EntityKind::Claim, claim)?;
        claim.validate()?;
        self.router.domain().settle_claim(&claim)
    }

    /// Premium for a [`PremiumQuote`].
    pub fn calculate_premium(&self, quote: &[u8]) -> InterchainResult<Amount> {
        let quote: PremiumQuote = serde_json::from_slice(quote)
            .map_err(|_| InterchainError::invalid("invalid risk factors format"))?;
        if quote.policy_type.is_empty() {
            return Err(InterchainError::invalid("policy type is required"));
        }
        let premium = self
            .collaborators()
            .risk
            .calculate_premium(&quote.policy_type, &quote.risk_factors)?;
        debug!("[insurance] premium for {}: {}", quote.policy_type, premium);
        Ok(premium)
    }

    /// Risk level of a policy.
    pub fn assess_risk(&self, policy: &[u8]) -> InterchainResult<String> {
        let policy = Self::decode_policy(policy)?;
        self.collaborators().risk.assess_risk(&policy)
    }
}

impl DomainService for InsuranceService {
    fn chain(&self) -> ChainId {
        ChainId::Insurance
    }

    fn contract(&self) -> &dyn InterchainContract {
        self.router.as_ref()
    }

    fn transactions(&self) -> &dyn TransactionApi {
        &self.dispatcher
    }
}
