//! Real estate capability collaborators.

use ic_01_entity_validation::Property;
use shared_types::InterchainResult;
use std::sync::Arc;

/// Registry-level property checks (title, zoning, duplicate listings).
pub trait PropertyDataValidator: Send + Sync {
    /// Check a structurally valid property record.
    fn validate_data(&self, property: &Property) -> InterchainResult<()>;
}

/// Collaborators injected into the real estate contract.
#[derive(Clone)]
pub struct RealEstateCollaborators {
    /// Property data validator.
    pub validator: Arc<dyn PropertyDataValidator>,
}

impl RealEstateCollaborators {
    /// Use one implementation for every capability.
    pub fn shared<C>(collaborator: Arc<C>) -> Self
    where
        C: PropertyDataValidator + 'static,
    {
        Self {
            validator: collaborator,
        }
    }
}
