//! Healthcare capability collaborators.

use ic_01_entity_validation::MedicalRecord;
use shared_types::InterchainResult;
use std::sync::Arc;

/// Privacy and access checks on clinical data.
pub trait HealthDataValidator: Send + Sync {
    /// HIPAA-style privacy check of a record before it is accepted or shared.
    fn validate_privacy(&self, record: &MedicalRecord) -> InterchainResult<()>;

    /// Whether `user_id` may access data of `data_type`.
    fn validate_access(&self, user_id: &str, data_type: &str) -> InterchainResult<()>;
}

/// Collaborators injected into the healthcare contract.
#[derive(Clone)]
pub struct HealthcareCollaborators {
    /// Privacy and access validator.
    pub validator: Arc<dyn HealthDataValidator>,
}

impl HealthcareCollaborators {
    /// Use one implementation for every capability.
    pub fn shared<C>(collaborator: Arc<C>) -> Self
    where
        C: HealthDataValidator + 'static,
    {
        Self {
            validator: collaborator,
        }
    }
}
