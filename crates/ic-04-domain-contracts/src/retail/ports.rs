//! Retail capability collaborators.

use ic_01_entity_validation::Sale;
use serde::{Deserialize, Serialize};
use shared_types::{Amount, InterchainResult};
use std::sync::Arc;

/// Stock change for one product, optionally at one store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryAdjustment {
    /// Product identifier.
    pub product_id: String,
    /// New stock level.
    pub quantity: i64,
    /// Store, empty for all stores.
    pub store_id: String,
}

/// Store inventory.
pub trait InventoryManager: Send + Sync {
    /// Apply a stock change.
    fn update_inventory(&self, adjustment: &InventoryAdjustment) -> InterchainResult<()>;
}

/// Point of sale.
pub trait SalesProcessor: Send + Sync {
    /// Business checks (store open, prices current). Runs before processing.
    fn validate_sale(&self, sale: &Sale) -> InterchainResult<()>;

    /// Book a sale.
    fn process_sale(&self, sale: &Sale) -> InterchainResult<()>;

    /// Book a return.
    fn process_return(&self, sale: &Sale) -> InterchainResult<()>;
}

/// Loyalty programme.
pub trait LoyaltyManager: Send + Sync {
    /// Credit `points` to a customer.
    fn update_points(&self, customer_id: &str, points: &Amount) -> InterchainResult<()>;
}

/// Collaborators injected into the retail contract.
#[derive(Clone)]
pub struct RetailCollaborators {
    /// Store inventory.
    pub inventory: Arc<dyn InventoryManager>,
    /// Point of sale.
    pub sales: Arc<dyn SalesProcessor>,
    /// Loyalty programme.
    pub loyalty: Arc<dyn LoyaltyManager>,
}

impl RetailCollaborators {
    /// Use one implementation for every capability.
    pub fn shared<C>(collaborator: Arc<C>) -> Self
    where
        C: InventoryManager + SalesProcessor + LoyaltyManager + 'static,
    {
        Self {
            inventory: collaborator.clone(),
            sales: collaborator.clone(),
            loyalty: collaborator,
        }
    }
}
