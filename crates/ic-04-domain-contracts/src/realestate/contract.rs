//! Real estate interchain contract.
//!
//! All three peers exchange property records. Outbound JSON objects are
//! tagged with the reason the target receives them, unless the caller
//! already set `source_chain` or `purpose`.

use ic_01_entity_validation::{validate, DomainEntity, EntityKind, Schema};
use ic_02_interchain_router::{accept, acknowledge, RouteTable, RoutingDomain};
use serde_json::Value;
use shared_types::{ChainId, InterchainError, InterchainResult};

use super::ports::RealEstateCollaborators;

const PEERS: [ChainId; 3] = [ChainId::Finance, ChainId::Government, ChainId::Insurance];

/// Purpose attached to data sent to `target`.
pub fn purpose_for(target: ChainId) -> &'static str {
    match target {
        ChainId::Finance => "settlement",
        ChainId::Government => "title_registration",
        ChainId::Insurance => "coverage",
        _ => "notification",
    }
}

/// Real estate domain contract.
pub struct RealEstateContract {
    collaborators: RealEstateCollaborators,
}

impl RealEstateContract {
    /// Contract over `collaborators`.
    pub fn new(collaborators: RealEstateCollaborators) -> Self {
        Self { collaborators }
    }

    /// Injected collaborators.
    pub fn collaborators(&self) -> &RealEstateCollaborators {
        &self.collaborators
    }

    fn enrich(&self, target: ChainId, data: &[u8]) -> InterchainResult<Vec<u8>> {
        let mut value: Value = serde_json::from_slice(data)
            .map_err(|_| InterchainError::invalid("invalid property data format"))?;
        let object = value
            .as_object_mut()
            .ok_or_else(|| InterchainError::invalid("invalid property data format"))?;
        // caller-supplied tags win
        object
            .entry("source_chain")
            .or_insert_with(|| Value::from(ChainId::RealEstate.as_str()));
        object
            .entry("purpose")
            .or_insert_with(|| Value::from(purpose_for(target)));
        serde_json::to_vec(&value)
            .map_err(|e| InterchainError::invalid(format!("failed to encode payload: {e}")))
    }
}

impl RoutingDomain for RealEstateContract {
    const CHAIN: ChainId = ChainId::RealEstate;

    fn validate_inbound(&self, payload: &[u8]) -> InterchainResult<DomainEntity> {
        let entity = validate(EntityKind::Property, payload)?;
        if let DomainEntity::Property(property) = &entity {
            self.collaborators.validator.validate_data(property)?;
        }
        Ok(entity)
    }

    fn route_table() -> RouteTable<Self> {
        PEERS.iter().fold(RouteTable::new(), |table, &peer| {
            table
                .inbound(peer, Schema::Entity(EntityKind::Property), accept)
                .outbound(peer, Self::enrich)
                .callback(peer, acknowledge)
        })
    }
}
