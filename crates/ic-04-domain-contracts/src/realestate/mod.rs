//! # Real Estate Domain
//!
//! Property records shared with finance, government and insurance.

pub mod contract;
pub mod ports;
pub mod transactions;

pub use contract::{purpose_for, RealEstateContract};
pub use ports::{PropertyDataValidator, RealEstateCollaborators};
pub use transactions::{
    PropertyDocument, PropertyPayload, PropertyTransactionRequest, PropertyTransactionType,
    PropertyTransactions, PROPERTY_PEERS,
};

use ic_01_entity_validation::{decode, EntityKind, Property, Validate};
use ic_02_interchain_router::{InterchainContract, InterchainRouter};
use ic_03_transaction_dispatch::{TransactionApi, TransactionDispatcher};
use shared_types::{ChainId, InterchainResult};
use std::sync::Arc;

use crate::wiring::{DomainService, DomainWiring};

/// Real estate service facade.
pub struct RealEstateService {
    router: Arc<InterchainRouter<RealEstateContract>>,
    dispatcher: TransactionDispatcher<PropertyTransactions>,
}

impl RealEstateService {
    /// Wire the real estate domain.
    pub fn new(collaborators: RealEstateCollaborators, wiring: &DomainWiring) -> Self {
        let router = Arc::new(InterchainRouter::new(
            RealEstateContract::new(collaborators),
            wiring.audit.clone(),
            wiring.outbox.clone(),
        ));
        let dispatcher = TransactionDispatcher::new(
            PropertyTransactions::new(router.clone()),
            wiring.store.clone(),
        );
        Self { router, dispatcher }
    }

    /// Interchain router.
    pub fn router(&self) -> &InterchainRouter<RealEstateContract> {
        &self.router
    }

    /// Transaction dispatcher.
    pub fn dispatcher(&self) -> &TransactionDispatcher<PropertyTransactions> {
        &self.dispatcher
    }

    /// Structural plus registry validation of a property.
    pub fn validate_property(&self, property: &[u8]) -> InterchainResult<()> {
        let property: Property = decode(EntityKind::Property, property)?;
        property.validate()?;
        self.router
            .domain()
            .collaborators()
            .validator
            .validate_data(&property)
    }

    /// Validate a property message as if it were our own, then route it
    /// from `source`.
    pub fn process_property_message(&self, source: &str, message: &[u8]) -> InterchainResult<()> {
        self.router.validate_entity(message)?;
        self.router.route_inbound(source, message)
    }
}

impl DomainService for RealEstateService {
    fn chain(&self) -> ChainId {
        ChainId::RealEstate
    }

    fn contract(&self) -> &dyn InterchainContract {
        self.router.as_ref()
    }

    fn transactions(&self) -> &dyn TransactionApi {
        &self.dispatcher
    }
}
