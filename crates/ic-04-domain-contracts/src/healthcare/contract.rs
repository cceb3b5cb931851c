//! Healthcare interchain contract.
//!
//! Every outbound payload leaves through the router's confidentiality
//! transform; the per-target preparers themselves are passthrough.

use ic_01_entity_validation::{validate, DomainEntity, EntityKind, Schema};
use ic_02_interchain_router::{accept, acknowledge, passthrough, RouteTable, RoutingDomain};
use shared_types::{ChainId, InterchainResult};

use super::ports::HealthcareCollaborators;

const PEERS: [(ChainId, EntityKind); 3] = [
    (ChainId::Insurance, EntityKind::Claim),
    (ChainId::Pharmacy, EntityKind::MedicalRecord),
    (ChainId::Laboratory, EntityKind::MedicalRecord),
];

/// Healthcare domain contract.
pub struct HealthcareContract {
    collaborators: HealthcareCollaborators,
}

impl HealthcareContract {
    /// Contract over `collaborators`.
    pub fn new(collaborators: HealthcareCollaborators) -> Self {
        Self { collaborators }
    }

    /// Injected collaborators.
    pub fn collaborators(&self) -> &HealthcareCollaborators {
        &self.collaborators
    }
}

impl RoutingDomain for HealthcareContract {
    const CHAIN: ChainId = ChainId::Healthcare;

    fn validate_inbound(&self, payload: &[u8]) -> InterchainResult<DomainEntity> {
        let entity = validate(EntityKind::MedicalRecord, payload)?;
        if let DomainEntity::MedicalRecord(record) = &entity {
            self.collaborators.validator.validate_privacy(record)?;
        }
        Ok(entity)
    }

    fn route_table() -> RouteTable<Self> {
        PEERS.iter().fold(RouteTable::new(), |table, &(peer, kind)| {
            table
                .inbound(peer, Schema::Entity(kind), accept)
                .outbound(peer, passthrough)
                .callback(peer, acknowledge)
        })
    }
}
