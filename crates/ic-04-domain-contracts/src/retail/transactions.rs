//! Retail transactions.

use ic_01_entity_validation::domain::invariants::{require_amount, require_id};
use ic_01_entity_validation::{Sale, Validate};
use ic_02_interchain_router::InterchainRouter;
use ic_03_transaction_dispatch::{
    transaction_kinds, StatusNotice, TransactionDomain, TransactionRequest,
};
use serde::{Deserialize, Serialize};
use shared_types::{Amount, ChainId, InterchainError, InterchainResult};
use std::sync::Arc;

use super::contract::RetailContract;
use super::ports::InventoryAdjustment;
use crate::wiring::encode;

transaction_kinds! {
    /// Retail transaction types.
    pub enum RetailTransactionType {
        /// Book a sale.
        Sale => "SALE",
        /// Book a return.
        Return => "RETURN",
        /// Adjust stock.
        UpdateInventory => "UPDATE_INVENTORY",
        /// Credit loyalty points.
        UpdateLoyalty => "UPDATE_LOYALTY",
    }
}

/// Loyalty credit for one customer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoyaltyAdjustment {
    /// Customer identifier.
    pub customer_id: String,
    /// Points to credit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Amount>,
}

/// Sale, inventory or loyalty sub-record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetailPayload {
    /// Sale sub-record (SALE, RETURN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_data: Option<Sale>,
    /// Inventory sub-record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_data: Option<InventoryAdjustment>,
    /// Loyalty sub-record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loyalty_data: Option<LoyaltyAdjustment>,
}

impl RetailPayload {
    fn sale(&self) -> InterchainResult<&Sale> {
        self.sale_data
            .as_ref()
            .ok_or_else(|| InterchainError::invalid("sale data is required"))
    }

    fn inventory(&self) -> InterchainResult<&InventoryAdjustment> {
        self.inventory_data
            .as_ref()
            .ok_or_else(|| InterchainError::invalid("inventory data is required"))
    }

    fn loyalty(&self) -> InterchainResult<&LoyaltyAdjustment> {
        self.loyalty_data
            .as_ref()
            .ok_or_else(|| InterchainError::invalid("loyalty data is required"))
    }
}

/// Retail request.
pub type RetailTransactionRequest = TransactionRequest<RetailPayload>;

/// Retail half of the dispatcher.
pub struct RetailTransactions {
    router: Arc<InterchainRouter<RetailContract>>,
}

impl RetailTransactions {
    /// Dispatch through `router`.
    pub fn new(router: Arc<InterchainRouter<RetailContract>>) -> Self {
        Self { router }
    }
}

impl TransactionDomain for RetailTransactions {
    type Payload = RetailPayload;
    type Kind = RetailTransactionType;
    const CHAIN: ChainId = ChainId::Retail;

    fn validate(
        &self,
        kind: RetailTransactionType,
        request: &RetailTransactionRequest,
    ) -> InterchainResult<()> {
        let payload = &request.payload;
        match kind {
            RetailTransactionType::Sale | RetailTransactionType::Return => {
                payload.sale()?.validate()
            }
            RetailTransactionType::UpdateInventory => {
                require_id(&payload.inventory()?.product_id, "product ID is required")
            }
            RetailTransactionType::UpdateLoyalty => {
                let loyalty = payload.loyalty()?;
                require_id(&loyalty.customer_id, "customer ID is required")?;
                require_amount(loyalty.points.as_ref(), "invalid loyalty points")
            }
        }
    }

    fn process(
        &self,
        kind: RetailTransactionType,
        request: &RetailTransactionRequest,
    ) -> InterchainResult<Vec<ChainId>> {
        let contract = self.router.domain();
        let c = contract.collaborators();
        let payload = &request.payload;
        match kind {
            RetailTransactionType::Sale => contract.book_sale(payload.sale()?)?,
            RetailTransactionType::Return => c.sales.process_return(payload.sale()?)?,
            RetailTransactionType::UpdateInventory => {
                c.inventory.update_inventory(payload.inventory()?)?
            }
            RetailTransactionType::UpdateLoyalty => {
                let loyalty = payload.loyalty()?;
                let points = loyalty.points.unwrap_or_default();
                c.loyalty.update_points(&loyalty.customer_id, &points)?;
            }
        }
        Ok(Vec::new())
    }

    fn notify_peer(&self, peer: ChainId, notice: &StatusNotice) -> InterchainResult<()> {
        self.router.send(peer, &encode(notice)?).map(|_| ())
    }
}
