//! Commerce capability collaborators.

use ic_01_entity_validation::Order;
use shared_types::InterchainResult;
use std::sync::Arc;

/// Catalog and stock management.
pub trait ProductManager: Send + Sync {
    /// Set the stock level of a product.
    fn update_inventory(&self, product_id: &str, quantity: i64) -> InterchainResult<()>;
}

/// Order lifecycle.
pub trait OrderProcessor: Send + Sync {
    /// Accept a new, validated order.
    fn process_order(&self, order: &Order) -> InterchainResult<()>;

    /// Record a status change.
    fn update_order_status(&self, order_id: &str, status: &str) -> InterchainResult<()>;

    /// Cancel an order.
    fn cancel_order(&self, order_id: &str) -> InterchainResult<()>;
}

/// Collaborators injected into the commerce contract.
#[derive(Clone)]
pub struct CommerceCollaborators {
    /// Product manager.
    pub products: Arc<dyn ProductManager>,
    /// Order processor.
    pub orders: Arc<dyn OrderProcessor>,
}

impl CommerceCollaborators {
    /// Use one implementation for every capability.
    pub fn shared<C>(collaborator: Arc<C>) -> Self
    where
        C: ProductManager + OrderProcessor + 'static,
    {
        Self {
            products: collaborator.clone(),
            orders: collaborator,
        }
    }
}
