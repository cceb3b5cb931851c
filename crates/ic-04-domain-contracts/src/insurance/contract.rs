//! Insurance interchain contract.
//!
//! | Peer | Inbound | Handler |
//! |------|---------|---------|
//! | healthcare | Claim | `validate_claim`, then `process_claim` |
//! | finance | FinancialTransaction | accept |
//! | realestate | Property | accept |

use ic_01_entity_validation::{validate_tagged, Claim, DomainEntity, EntityKind, Schema};
use ic_02_interchain_router::{accept, acknowledge, passthrough, RouteTable, RoutingDomain};
use shared_types::{ChainId, InterchainResult};
use tracing::info;

use super::ports::InsuranceCollaborators;

/// Kinds accepted on the insurance wire.
pub const INSURANCE_KINDS: &[EntityKind] = &[EntityKind::Policy, EntityKind::Claim];

const PEERS: [ChainId; 3] = [ChainId::Healthcare, ChainId::Finance, ChainId::RealEstate];

/// Insurance domain contract.
pub struct InsuranceContract {
    collaborators: InsuranceCollaborators,
}

impl InsuranceContract {
    /// Contract over `collaborators`.
    pub fn new(collaborators: InsuranceCollaborators) -> Self {
        Self { collaborators }
    }

    /// Injected collaborators.
    pub fn collaborators(&self) -> &InsuranceCollaborators {
        &self.collaborators
    }

    /// Validate then process a structurally valid claim.
    pub fn settle_claim(&self, claim: &Claim) -> InterchainResult<()> {
        let claims = &self.collaborators.claims;
        claims.validate_claim(claim)?;
        claims.process_claim(claim)
    }

    fn handle_healthcare(&self, entity: DomainEntity) -> InterchainResult<()> {
        let claim = Claim::try_from(entity)?;
        info!("[insurance] healthcare claim {} on policy {}", claim.claim_id, claim.policy_id);
        self.settle_claim(&claim)
    }
}

impl RoutingDomain for InsuranceContract {
    const CHAIN: ChainId = ChainId::Insurance;

    fn validate_inbound(&self, payload: &[u8]) -> InterchainResult<DomainEntity> {
        let entity = validate_tagged(payload, INSURANCE_KINDS)?;
        match &entity {
            DomainEntity::Policy(policy) => {
                self.collaborators.compliance.validate_compliance(policy)?
            }
            DomainEntity::Claim(claim) => self.collaborators.claims.validate_claim(claim)?,
            _ => {}
        }
        Ok(entity)
    }

    fn route_table() -> RouteTable<Self> {
        let table = RouteTable::new()
            .inbound(
                ChainId::Healthcare,
                Schema::Entity(EntityKind::Claim),
                Self::handle_healthcare,
            )
            .inbound(ChainId::Finance, Schema::Entity(EntityKind::FinancialTransaction), accept)
            .inbound(ChainId::RealEstate, Schema::Entity(EntityKind::Property), accept);
        PEERS.iter().fold(table, |table, &peer| {
            table.outbound(peer, passthrough).callback(peer, acknowledge)
        })
    }
}
