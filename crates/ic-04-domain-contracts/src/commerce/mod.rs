//! # Commerce Domain
//!
//! E-commerce chain (`ecommerce`): orders in, payments out to finance,
//! stock updates from supply chain.

pub mod contract;
pub mod ports;
pub mod transactions;

pub use contract::CommerceContract;
pub use ports::{CommerceCollaborators, OrderProcessor, ProductManager};
pub use transactions::{
    OrderPayload, OrderTransactionRequest, OrderTransactionType, OrderTransactions,
};

use ic_01_entity_validation::domain::invariants::require_id;
use ic_01_entity_validation::{decode, validate, EntityKind, FinancialTransaction, Order, Validate};
use ic_02_interchain_router::{InterchainContract, InterchainRouter};
use ic_03_transaction_dispatch::{TransactionApi, TransactionDispatcher};
use shared_types::{ChainId, InterchainResult, OutboundMessage};
use std::sync::Arc;
use tracing::info;

use crate::wiring::{encode, DomainService, DomainWiring};

/// Commerce service facade.
pub struct CommerceService {
    router: Arc<InterchainRouter<CommerceContract>>,
    dispatcher: TransactionDispatcher<OrderTransactions>,
}

impl CommerceService {
    /// Wire the commerce domain.
    pub fn new(collaborators: CommerceCollaborators, wiring: &DomainWiring) -> Self {
        let router = Arc::new(InterchainRouter::new(
            CommerceContract::new(collaborators),
            wiring.audit.clone(),
            wiring.outbox.clone(),
        ));
        let dispatcher = TransactionDispatcher::new(
            OrderTransactions::new(router.clone()),
            wiring.store.clone(),
        );
        Self { router, dispatcher }
    }

    /// Interchain router.
    pub fn router(&self) -> &InterchainRouter<CommerceContract> {
        &self.router
    }

    /// Transaction dispatcher.
    pub fn dispatcher(&self) -> &TransactionDispatcher<OrderTransactions> {
        &self.dispatcher
    }

    /// Validate an order and hand it to the order processor.
    pub fn process_order(&self, order: &[u8]) -> InterchainResult<()> {
        let order: Order = decode(EntityKind::Order, order)?;
        order.validate()?;
        self.router
            .domain()
            .collaborators()
            .orders
            .process_order(&order)
    }

    /// Set a product's stock level.
    pub fn update_inventory(&self, product_id: &str, quantity: i64) -> InterchainResult<()> {
        require_id(product_id, "product ID is required")?;
        self.router
            .domain()
            .collaborators()
            .products
            .update_inventory(product_id, quantity)
    }

    /// Structural product check.
    pub fn validate_product(&self, product: &[u8]) -> InterchainResult<()> {
        validate(EntityKind::Product, product).map(|_| ())
    }

    /// Validate a payment and send it to finance.
    pub fn process_payment(&self, payment: &[u8]) -> InterchainResult<OutboundMessage> {
        let payment: FinancialTransaction = decode(EntityKind::FinancialTransaction, payment)?;
        payment.validate()?;
        info!("[commerce] forwarding payment {} to finance", payment.transaction_id);
        self.router.send(ChainId::Finance, &encode(&payment)?)
    }
}

impl DomainService for CommerceService {
    fn chain(&self) -> ChainId {
        ChainId::Commerce
    }

    fn contract(&self) -> &dyn InterchainContract {
        self.router.as_ref()
    }

    fn transactions(&self) -> &dyn TransactionApi {
        &self.dispatcher
    }
}
