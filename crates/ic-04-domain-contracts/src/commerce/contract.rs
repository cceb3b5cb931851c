//! Commerce interchain contract.
//!
//! | Peer | Inbound | Handler |
//! |------|---------|---------|
//! | finance | FinancialTransaction | accept |
//! | supplychain | Product | `update_inventory` |
//! | retail | Sale | accept |

use ic_01_entity_validation::{validate, DomainEntity, EntityKind, Product, Schema};
use ic_02_interchain_router::{accept, acknowledge, passthrough, RouteTable, RoutingDomain};
use shared_types::{ChainId, InterchainResult};
use tracing::info;

use super::ports::CommerceCollaborators;

/// Commerce domain contract.
pub struct CommerceContract {
    collaborators: CommerceCollaborators,
}

impl CommerceContract {
    /// Contract over `collaborators`.
    pub fn new(collaborators: CommerceCollaborators) -> Self {
        Self { collaborators }
    }

    /// Injected collaborators.
    pub fn collaborators(&self) -> &CommerceCollaborators {
        &self.collaborators
    }

    fn handle_supply_chain(&self, entity: DomainEntity) -> InterchainResult<()> {
        let product = Product::try_from(entity)?;
        info!(
            "[commerce] supplychain stock update for {}: {}",
            product.product_id, product.inventory
        );
        self.collaborators
            .products
            .update_inventory(&product.product_id, product.inventory)
    }
}

impl RoutingDomain for CommerceContract {
    const CHAIN: ChainId = ChainId::Commerce;

    fn validate_inbound(&self, payload: &[u8]) -> InterchainResult<DomainEntity> {
        validate(EntityKind::Order, payload)
    }

    fn route_table() -> RouteTable<Self> {
        RouteTable::new()
            .inbound(ChainId::Finance, Schema::Entity(EntityKind::FinancialTransaction), accept)
            .inbound(
                ChainId::SupplyChain,
                Schema::Entity(EntityKind::Product),
                Self::handle_supply_chain,
            )
            .inbound(ChainId::Retail, Schema::Entity(EntityKind::Sale), accept)
            .outbound(ChainId::Finance, passthrough)
            .outbound(ChainId::SupplyChain, passthrough)
            .outbound(ChainId::Retail, passthrough)
            .callback(ChainId::Finance, acknowledge)
            .callback(ChainId::SupplyChain, acknowledge)
            .callback(ChainId::Retail, acknowledge)
    }
}
