//! # Healthcare Domain
//!
//! Clinical records shared with insurance, pharmacy and laboratory chains.
//! The router is built with a confidentiality transform, so every prepared
//! outbound payload (including status notices) is sealed.

pub mod contract;
pub mod ports;
pub mod transactions;

pub use contract::HealthcareContract;
pub use ports::{HealthDataValidator, HealthcareCollaborators};
pub use transactions::{
    MedicalPayload, MedicalTransactionRequest, MedicalTransactionType, MedicalTransactions,
};

use ic_01_entity_validation::{decode, EntityKind, MedicalRecord, Validate};
use ic_02_interchain_router::{
    ConfidentialityTransform, DigestEnvelopeSealer, InterchainContract, InterchainRouter,
};
use ic_03_transaction_dispatch::{TransactionApi, TransactionDispatcher};
use shared_types::{ChainId, InterchainError, InterchainResult};
use std::sync::Arc;

use crate::wiring::{DomainService, DomainWiring};

/// Healthcare service facade.
pub struct HealthcareService {
    router: Arc<InterchainRouter<HealthcareContract>>,
    dispatcher: TransactionDispatcher<MedicalTransactions>,
}

impl HealthcareService {
    /// Wire the healthcare domain with the default digest envelope sealer.
    pub fn new(collaborators: HealthcareCollaborators, wiring: &DomainWiring) -> Self {
        Self::with_sealer(collaborators, wiring, Arc::new(DigestEnvelopeSealer))
    }

    /// Wire the healthcare domain with an explicit confidentiality transform.
    pub fn with_sealer(
        collaborators: HealthcareCollaborators,
        wiring: &DomainWiring,
        sealer: Arc<dyn ConfidentialityTransform>,
    ) -> Self {
        let router = Arc::new(
            InterchainRouter::new(
                HealthcareContract::new(collaborators),
                wiring.audit.clone(),
                wiring.outbox.clone(),
            )
            .with_confidentiality(sealer),
        );
        let dispatcher = TransactionDispatcher::new(
            MedicalTransactions::new(router.clone()),
            wiring.store.clone(),
        );
        Self { router, dispatcher }
    }

    /// Interchain router.
    pub fn router(&self) -> &InterchainRouter<HealthcareContract> {
        &self.router
    }

    /// Transaction dispatcher.
    pub fn dispatcher(&self) -> &TransactionDispatcher<MedicalTransactions> {
        &self.dispatcher
    }

    fn collaborators(&self) -> &HealthcareCollaborators {
        self.router.domain().collaborators()
    }

    fn sealer(&self) -> InterchainResult<&Arc<dyn ConfidentialityTransform>> {
        self.router
            .confidentiality()
            .ok_or_else(|| {
                InterchainError::collaborator("confidentiality", "no transform configured")
            })
    }

    /// Structural plus privacy validation of a medical record.
    pub fn validate_hipaa_compliance(&self, record: &[u8]) -> InterchainResult<()> {
        let record: MedicalRecord = decode(EntityKind::MedicalRecord, record)?;
        record.validate()?;
        self.collaborators().validator.validate_privacy(&record)
    }

    /// Whether `user_id` may access data of `data_type`.
    pub fn validate_data_access(&self, user_id: &str, data_type: &str) -> InterchainResult<()> {
        if user_id.is_empty() {
            return Err(InterchainError::invalid("user ID is required"));
        }
        if data_type.is_empty() {
            return Err(InterchainError::invalid("data type is required"));
        }
        self.collaborators().validator.validate_access(user_id, data_type)
    }

    /// Seal bytes with the domain's confidentiality transform.
    pub fn seal_sensitive_data(&self, data: &[u8]) -> InterchainResult<Vec<u8>> {
        self.sealer()?.seal(data)
    }

    /// Reverse of [`Self::seal_sensitive_data`].
    pub fn open_sensitive_data(&self, sealed: &[u8]) -> InterchainResult<Vec<u8>> {
        self.sealer()?.open(sealed)
    }
}

impl DomainService for HealthcareService {
    fn chain(&self) -> ChainId {
        ChainId::Healthcare
    }

    fn contract(&self) -> &dyn InterchainContract {
        self.router.as_ref()
    }

    fn transactions(&self) -> &dyn TransactionApi {
        &self.dispatcher
    }
}
