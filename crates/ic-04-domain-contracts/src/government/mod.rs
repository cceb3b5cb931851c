//! # Government Domain
//!
//! Regulations, permits, document verification and compliance
//! submissions, exchanged with finance, healthcare and real estate.

pub mod contract;
pub mod ports;
pub mod transactions;

pub use contract::{GovernmentContract, GOVERNMENT_KINDS};
pub use ports::{
    ComplianceProcessor, DocumentVerifier, GovernmentCollaborators, PermitManager,
    RegulationManager,
};
pub use transactions::{
    GovernmentPayload, GovernmentTransactionRequest, GovernmentTransactionType,
    GovernmentTransactions,
};

use ic_01_entity_validation::{
    decode, ComplianceRecord, Document, EntityKind, Permit, Regulation, Validate,
};
use ic_02_interchain_router::{InterchainContract, InterchainRouter};
use ic_03_transaction_dispatch::{TransactionApi, TransactionDispatcher};
use shared_types::{ChainId, InterchainResult};
use std::sync::Arc;

use crate::wiring::{DomainService, DomainWiring};

/// Government service facade.
pub struct GovernmentService {
    router: Arc<InterchainRouter<GovernmentContract>>,
    dispatcher: TransactionDispatcher<GovernmentTransactions>,
}

impl GovernmentService {
    /// Wire the government domain.
    pub fn new(collaborators: GovernmentCollaborators, wiring: &DomainWiring) -> Self {
        let router = Arc::new(InterchainRouter::new(
            GovernmentContract::new(collaborators),
            wiring.audit.clone(),
            wiring.outbox.clone(),
        ));
        let dispatcher = TransactionDispatcher::new(
            GovernmentTransactions::new(router.clone()),
            wiring.store.clone(),
        );
        Self { router, dispatcher }
    }

    /// Interchain router.
    pub fn router(&self) -> &InterchainRouter<GovernmentContract> {
        &self.router
    }

    /// Transaction dispatcher.
    pub fn dispatcher(&self) -> &TransactionDispatcher<GovernmentTransactions> {
        &self.dispatcher
    }

    fn collaborators(&self) -> &GovernmentCollaborators {
        self.router.domain().collaborators()
    }

    /// Structural plus registry validation of a regulation.
    pub fn validate_regulation(&self, regulation: &[u8]) -> InterchainResult<()> {
        let regulation: Regulation = decode(EntityKind::Regulation, regulation)?;
        regulation.validate()?;
        self.collaborators().regulations.validate_regulation(&regulation)
    }

    /// Validate then issue a permit.
    pub fn issue_permit(&self, permit: &[u8]) -> InterchainResult<()> {
        let permit: Permit = decode(EntityKind::Permit, permit)?;
        permit.validate()?;
        let permits = &self.collaborators().permits;
        permits.validate_permit(&permit)?;
        permits.issue_permit(&permit)
    }

    /// Verify a document.
    pub fn verify_document(&self, document: &[u8]) -> InterchainResult<()> {
        let document: Document = decode(EntityKind::Document, document)?;
        document.validate()?;
        self.collaborators().documents.verify_document(&document)
    }

    /// Record a compliance submission.
    pub fn process_compliance(&self, record: &[u8]) -> InterchainResult<()> {
        let record: ComplianceRecord = decode(EntityKind::Compliance, record)?;
        record.validate()?;
        self.collaborators().compliance.process_compliance(&record)
    }
}

impl DomainService for GovernmentService {
    fn chain(&self) -> ChainId {
        ChainId::Government
    }

    fn contract(&self) -> &dyn InterchainContract {
        self.router.as_ref()
    }

    fn transactions(&self) -> &dyn TransactionApi {
        &self.dispatcher
    }
}
