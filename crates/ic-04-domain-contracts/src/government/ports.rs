//! Government capability collaborators.

use ic_01_entity_validation::{ComplianceRecord, Document, Permit, Regulation};
use shared_types::InterchainResult;
use std::sync::Arc;

/// Regulation registry.
pub trait RegulationManager: Send + Sync {
    /// Publish a regulation.
    fn create_regulation(&self, regulation: &Regulation) -> InterchainResult<()>;

    /// Amend a regulation.
    fn update_regulation(&self, regulation: &Regulation) -> InterchainResult<()>;

    /// Registry-level checks (conflicts, jurisdiction).
    fn validate_regulation(&self, regulation: &Regulation) -> InterchainResult<()>;
}

/// Compliance submissions.
pub trait ComplianceProcessor: Send + Sync {
    /// Record a compliance submission.
    fn process_compliance(&self, record: &ComplianceRecord) -> InterchainResult<()>;

    /// Check a submission against requirements.
    fn validate_compliance(&self, record: &ComplianceRecord) -> InterchainResult<()>;
}

/// Permit issuance.
pub trait PermitManager: Send + Sync {
    /// Issue a permit.
    fn issue_permit(&self, permit: &Permit) -> InterchainResult<()>;

    /// Revoke a permit.
    fn revoke_permit(&self, permit_id: &str) -> InterchainResult<()>;

    /// Eligibility checks before issuance.
    fn validate_permit(&self, permit: &Permit) -> InterchainResult<()>;
}

/// Document verification.
pub trait DocumentVerifier: Send + Sync {
    /// Verify a document's hash and issuer.
    fn verify_document(&self, document: &Document) -> InterchainResult<()>;
}

/// Collaborators injected into the government contract.
#[derive(Clone)]
pub struct GovernmentCollaborators {
    /// Regulation registry.
    pub regulations: Arc<dyn RegulationManager>,
    /// Compliance processor.
    pub compliance: Arc<dyn ComplianceProcessor>,
    /// Permit manager.
    pub permits: Arc<dyn PermitManager>,
    /// Document verifier.
    pub documents: Arc<dyn DocumentVerifier>,
}

impl GovernmentCollaborators {
    /// Use one implementation for every capability.
    pub fn shared<C>(collaborator: Arc<C>) -> Self
    where
        C: RegulationManager + ComplianceProcessor + PermitManager + DocumentVerifier + 'static,
    {
        Self {
            regulations: collaborator.clone(),
            compliance: collaborator.clone(),
            permits: collaborator.clone(),
            documents: collaborator,
        }
    }
}
