//! Retail interchain contract.
//!
//! | Peer | Inbound | Handler |
//! |------|---------|---------|
//! | ecommerce | Order | accept |
//! | supplychain | Product | `update_inventory` |
//! | finance | FinancialTransaction | accept |

use ic_01_entity_validation::{validate, DomainEntity, EntityKind, Product, Sale, Schema};
use ic_02_interchain_router::{
    accept, acknowledge, passthrough, InboundHandler, RouteTable, RoutingDomain,
};
use shared_types::{Amount, ChainId, InterchainResult};
use tracing::info;

use super::ports::{InventoryAdjustment, RetailCollaborators};

const PEERS: [(ChainId, EntityKind); 3] = [
    (ChainId::Commerce, EntityKind::Order),
    (ChainId::SupplyChain, EntityKind::Product),
    (ChainId::Finance, EntityKind::FinancialTransaction),
];

/// Retail domain contract.
pub struct RetailContract {
    collaborators: RetailCollaborators,
}

impl RetailContract {
    /// Contract over `collaborators`.
    pub fn new(collaborators: RetailCollaborators) -> Self {
        Self { collaborators }
    }

    /// Injected collaborators.
    pub fn collaborators(&self) -> &RetailCollaborators {
        &self.collaborators
    }

    /// Validate and book a structurally valid sale, then credit its loyalty
    /// points.
    pub fn book_sale(&self, sale: &Sale) -> InterchainResult<()> {
        let c = &self.collaborators;
        c.sales.validate_sale(sale)?;
        c.sales.process_sale(sale)?;
        if sale.loyalty_points > 0 {
            c.loyalty
                .update_points(&sale.customer_id, &Amount::from(sale.loyalty_points))?;
        }
        Ok(())
    }

    fn handle_supply_chain(&self, entity: DomainEntity) -> InterchainResult<()> {
        let product = Product::try_from(entity)?;
        info!(
            "[retail] supplychain stock update for {}: {}",
            product.product_id, product.inventory
        );
        self.collaborators.inventory.update_inventory(&InventoryAdjustment {
            product_id: product.product_id,
            quantity: product.inventory,
            store_id: String::new(),
        })
    }
}

impl RoutingDomain for RetailContract {
    const CHAIN: ChainId = ChainId::Retail;

    fn validate_inbound(&self, payload: &[u8]) -> InterchainResult<DomainEntity> {
        validate(EntityKind::Sale, payload)
    }

    fn route_table() -> RouteTable<Self> {
        PEERS.iter().fold(RouteTable::new(), |table, &(peer, kind)| {
            let handler: InboundHandler<Self> = match peer {
                ChainId::SupplyChain => Self::handle_supply_chain,
                _ => accept,
            };
            table
                .inbound(peer, Schema::Entity(kind), handler)
                .outbound(peer, passthrough)
                .callback(peer, acknowledge)
        })
    }
}
