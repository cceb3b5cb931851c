//! Finance interchain contract.
//!
//! Every peer (realestate, insurance, retail) sends a `FinancialTransaction`
//! which is settled through the funds processor.

use ic_01_entity_validation::{validate, DomainEntity, EntityKind, FinancialTransaction, Schema};
use ic_02_interchain_router::{acknowledge, passthrough, RouteTable, RoutingDomain};
use shared_types::{ChainId, InterchainResult};
use tracing::info;

use super::ports::FinanceCollaborators;

const PEERS: [ChainId; 3] = [ChainId::RealEstate, ChainId::Insurance, ChainId::Retail];

/// Finance domain contract.
pub struct FinanceContract {
    collaborators: FinanceCollaborators,
}

impl FinanceContract {
    /// Contract over `collaborators`.
    pub fn new(collaborators: FinanceCollaborators) -> Self {
        Self { collaborators }
    }

    /// Injected collaborators.
    pub fn collaborators(&self) -> &FinanceCollaborators {
        &self.collaborators
    }

    fn settle(&self, entity: DomainEntity) -> InterchainResult<()> {
        let tx = FinancialTransaction::try_from(entity)?;
        info!("[finance] settling inbound payment {}", tx.transaction_id);
        self.collaborators.funds.process_payment(&tx)
    }
}

impl RoutingDomain for FinanceContract {
    const CHAIN: ChainId = ChainId::Finance;

    fn validate_inbound(&self, payload: &[u8]) -> InterchainResult<DomainEntity> {
        let entity = validate(EntityKind::FinancialTransaction, payload)?;
        if let DomainEntity::FinancialTransaction(tx) = &entity {
            self.collaborators.validator.validate_compliance(tx)?;
        }
        Ok(entity)
    }

    fn route_table() -> RouteTable<Self> {
        PEERS.iter().fold(RouteTable::new(), |table, &peer| {
            table
                .inbound(peer, Schema::Entity(EntityKind::FinancialTransaction), Self::settle)
                .outbound(peer, passthrough)
                .callback(peer, acknowledge)
        })
    }
}
