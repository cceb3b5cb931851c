//! Government interchain contract.
//!
//! Inbound data is polymorphic: the `type` discriminator selects one of
//! `regulation`, `compliance`, `permit` or `document`, and each kind fans
//! out to its own collaborator check.

use ic_01_entity_validation::{validate_tagged, DomainEntity, EntityKind, Schema};
use ic_02_interchain_router::{acknowledge, passthrough, RouteTable, RoutingDomain};
use shared_types::{ChainId, InterchainResult};
use tracing::info;

use super::ports::GovernmentCollaborators;

/// Kinds accepted on the government wire.
pub const GOVERNMENT_KINDS: &[EntityKind] = &[
    EntityKind::Regulation,
    EntityKind::Compliance,
    EntityKind::Permit,
    EntityKind::Document,
];

const PEERS: [ChainId; 3] = [ChainId::Finance, ChainId::Healthcare, ChainId::RealEstate];

/// Government domain contract.
pub struct GovernmentContract {
    collaborators: GovernmentCollaborators,
}

impl GovernmentContract {
    /// Contract over `collaborators`.
    pub fn new(collaborators: GovernmentCollaborators) -> Self {
        Self { collaborators }
    }

    /// Injected collaborators.
    pub fn collaborators(&self) -> &GovernmentCollaborators {
        &self.collaborators
    }

    /// Collaborator check for an already structurally valid entity.
    pub fn check(&self, entity: &DomainEntity) -> InterchainResult<()> {
        let c = &self.collaborators;
        match entity {
            DomainEntity::Regulation(regulation) => c.regulations.validate_regulation(regulation),
            DomainEntity::Compliance(record) => c.compliance.validate_compliance(record),
            DomainEntity::Permit(permit) => c.permits.validate_permit(permit),
            DomainEntity::Document(document) => c.documents.verify_document(document),
            _ => Ok(()),
        }
    }

    fn handle_peer_data(&self, entity: DomainEntity) -> InterchainResult<()> {
        match &entity {
            DomainEntity::Compliance(record) => {
                info!("[government] compliance submission for {}", record.entity_id);
                self.collaborators.compliance.process_compliance(record)
            }
            DomainEntity::Document(document) => {
                info!("[government] verifying document {}", document.document_id);
                self.collaborators.documents.verify_document(document)
            }
            _ => ic_02_interchain_router::accept(self, entity),
        }
    }
}

impl RoutingDomain for GovernmentContract {
    const CHAIN: ChainId = ChainId::Government;

    fn validate_inbound(&self, payload: &[u8]) -> InterchainResult<DomainEntity> {
        let entity = validate_tagged(payload, GOVERNMENT_KINDS)?;
        self.check(&entity)?;
        Ok(entity)
    }

    fn route_table() -> RouteTable<Self> {
        PEERS.iter().fold(RouteTable::new(), |table, &peer| {
            table
                .inbound(peer, Schema::Tagged(GOVERNMENT_KINDS), Self::handle_peer_data)
                .outbound(peer, passthrough)
                .callback(peer, acknowledge)
        })
    }
}
