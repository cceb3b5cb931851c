//! Insurance capability collaborators.

use ic_01_entity_validation::{Claim, Policy};
use shared_types::{Amount, InterchainResult};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Policy book.
pub trait PolicyManager: Send + Sync {
    /// Write a new policy.
    fn create_policy(&self, policy: &Policy) -> InterchainResult<()>;

    /// Amend a policy.
    fn update_policy(&self, policy: &Policy) -> InterchainResult<()>;

    /// Cancel a policy.
    fn cancel_policy(&self, policy_id: &str) -> InterchainResult<()>;
}

/// Claims desk.
pub trait ClaimProcessor: Send + Sync {
    /// Pay out or reject a claim.
    fn process_claim(&self, claim: &Claim) -> InterchainResult<()>;

    /// Move a claim to `status`.
    fn update_claim_status(&self, claim_id: &str, status: &str) -> InterchainResult<()>;

    /// Coverage and fraud checks. Always runs before [`Self::process_claim`].
    fn validate_claim(&self, claim: &Claim) -> InterchainResult<()>;
}

/// Underwriting.
pub trait RiskAssessor: Send + Sync {
    /// Risk level of a policy (`low`, `medium`, `high`, ...).
    fn assess_risk(&self, policy: &Policy) -> InterchainResult<String>;

    /// Premium for a policy type given its risk factors.
    fn calculate_premium(
        &self,
        policy_type: &str,
        risk_factors: &BTreeMap<String, serde_json::Value>,
    ) -> InterchainResult<Amount>;
}

/// Regulatory checks on policies.
pub trait InsuranceCompliance: Send + Sync {
    /// Whether a policy meets regulatory requirements.
    fn validate_compliance(&self, policy: &Policy) -> InterchainResult<()>;
}

/// Collaborators injected into the insurance contract.
#[derive(Clone)]
pub struct InsuranceCollaborators {
    /// Policy book.
    pub policies: Arc<dyn PolicyManager>,
    /// Claims desk.
    pub claims: Arc<dyn ClaimProcessor>,
    /// Underwriting.
    pub risk: Arc<dyn RiskAssessor>,
    /// Regulatory checks.
    pub compliance: Arc<dyn InsuranceCompliance>,
}

impl InsuranceCollaborators {
    /// Use one implementation for every capability.
    pub fn shared<C>(collaborator: Arc<C>) -> Self
    where
        C: PolicyManager + ClaimProcessor + RiskAssessor + InsuranceCompliance + 'static,
    {
        Self {
            policies: collaborator.clone(),
            claims: collaborator.clone(),
            risk: collaborator.clone(),
            compliance: collaborator,
        }
    }
}
