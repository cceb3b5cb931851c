//! # Retail Domain
//!
//! Point-of-sale, store inventory and loyalty, exchanged with ecommerce,
//! supply chain and finance.

pub mod contract;
pub mod ports;
pub mod transactions;

pub use contract::RetailContract;
pub use ports::{
    InventoryAdjustment, InventoryManager, LoyaltyManager, RetailCollaborators, SalesProcessor,
};
pub use transactions::{
    LoyaltyAdjustment, RetailPayload, RetailTransactionRequest, RetailTransactionType,
    RetailTransactions,
};

use ic_01_entity_validation::domain::invariants::{require_amount, require_id};
use ic_01_entity_validation::{decode, EntityKind, Sale, Validate};
use ic_02_interchain_router::{InterchainContract, InterchainRouter};
use ic_03_transaction_dispatch::{TransactionApi, TransactionDispatcher};
use shared_types::{Amount, ChainId, InterchainResult};
use std::sync::Arc;

use crate::wiring::{DomainService, DomainWiring};

/// Retail service facade.
pub struct RetailService {
    router: Arc<InterchainRouter<RetailContract>>,
    dispatcher: TransactionDispatcher<RetailTransactions>,
}

impl RetailService {
    /// Wire the retail domain.
    pub fn new(collaborators: RetailCollaborators, wiring: &DomainWiring) -> Self {
        let router = Arc::new(InterchainRouter::new(
            RetailContract::new(collaborators),
            wiring.audit.clone(),
            wiring.outbox.clone(),
        ));
        let dispatcher = TransactionDispatcher::new(
            RetailTransactions::new(router.clone()),
            wiring.store.clone(),
        );
        Self { router, dispatcher }
    }

    /// Interchain router.
    pub fn router(&self) -> &InterchainRouter<RetailContract> {
        &self.router
    }

    /// Transaction dispatcher.
    pub fn dispatcher(&self) -> &TransactionDispatcher<RetailTransactions> {
        &self.dispatcher
    }

    fn collaborators(&self) -> &RetailCollaborators {
        self.router.domain().collaborators()
    }

    /// Validate and book a sale, crediting its loyalty points.
    pub fn process_sale(&self, sale: &[u8]) -> InterchainResult<()> {
        let sale: Sale = decode(EntityKind::Sale, sale)?;
        sale.validate()?;
        self.router.domain().book_sale(&sale)
    }

    /// Set the stock level of a product across stores.
    pub fn update_inventory(&self, product_id: &str, quantity: i64) -> InterchainResult<()> {
        require_id(product_id, "product ID is required")?;
        self.collaborators().inventory.update_inventory(&InventoryAdjustment {
            product_id: product_id.to_string(),
            quantity,
            store_id: String::new(),
        })
    }

    /// Credit loyalty points to a customer.
    pub fn update_loyalty_points(&self, customer_id: &str, points: Amount) -> InterchainResult<()> {
        require_id(customer_id, "customer ID is required")?;
        require_amount(Some(&points), "invalid loyalty points")?;
        self.collaborators().loyalty.update_points(customer_id, &points)
    }
}

impl DomainService for RetailService {
    fn chain(&self) -> ChainId {
        ChainId::Retail
    }

    fn contract(&self) -> &dyn InterchainContract {
        self.router.as_ref()
    }

    fn transactions(&self) -> &dyn TransactionApi {
        &self.dispatcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RecordingCollaborators;
    use crate::test_support::{json, Harness};
    use serde_json::json as j;

    fn service(h: &Harness) -> RetailService {
        RetailService::new(RetailCollaborators::shared(h.rec.clone()), &h.wiring)
    }

    fn sale_data(points: u64) -> serde_json::Value {
        j!({
            "sale_id": "S-1",
            "customer_id": "C-1",
            "store_id": "ST-1",
            "items": [{"product_id": "P-1", "quantity": 2, "unit_price": "5"}],
            "total_amount": "10",
            "loyalty_points": points
        })
    }

    #[test]
    fn test_claim_type_unsupported() {
        let h = Harness::new();
        let svc = service(&h);
        let request = json(j!({"transaction_id": "R1", "transaction_type": "FILE_CLAIM"}));
        let err = svc.transactions().initiate_json(&request).unwrap_err();
        assert_eq!(err.reason(), Some("unsupported transaction type"));
        assert_eq!(h.rec.count(), 0);
        assert!(h.outbox.is_empty());
    }

    #[test]
    fn test_sale_credits_loyalty() {
        let h = Harness::new();
        let svc = service(&h);
        let request = json(j!({
            "transaction_id": "R2",
            "transaction_type": "SALE",
            "sale_data": sale_data(15)
        }));
        let record = svc.transactions().initiate_json(&request).unwrap();
        assert!(record.engaged_peers.is_empty());
        assert_eq!(
            h.rec.capabilities(),
            vec!["retail.validate_sale", "retail.process_sale", "retail.update_points"]
        );
    }

    #[test]
    fn test_sale_without_points_skips_loyalty() {
        let h = Harness::new();
        let svc = service(&h);
        svc.process_sale(&json(sale_data(0))).unwrap();
        assert_eq!(h.rec.calls_to("retail.update_points"), 0);
        let err = svc
            .process_sale(&json(j!({"sale_id": "S-2", "customer_id": "C-1"})))
            .unwrap_err();
        assert_eq!(err.reason(), Some("sale must contain items"));
    }

    #[test]
    fn test_return_and_sub_record_rules() {
        let h = Harness::new();
        let svc = service(&h);
        let request = json(j!({
            "transaction_id": "R3",
            "transaction_type": "RETURN",
            "sale_data": sale_data(5)
        }));
        svc.transactions().initiate_json(&request).unwrap();
        assert_eq!(h.rec.capabilities(), vec!["retail.process_return"]);

        let request = json(j!({"transaction_id": "R4", "transaction_type": "UPDATE_INVENTORY"}));
        let err = svc.transactions().initiate_json(&request).unwrap_err();
        assert_eq!(err.reason(), Some("inventory data is required"));

        let request = json(j!({
            "transaction_id": "R5",
            "transaction_type": "UPDATE_LOYALTY",
            "loyalty_data": {"customer_id": "C-1", "points": "-3"}
        }));
        let err = svc.transactions().initiate_json(&request).unwrap_err();
        assert_eq!(err.reason(), Some("invalid loyalty points"));
    }

    #[test]
    fn test_supply_chain_product_updates_inventory() {
        let h = Harness::new();
        let svc = service(&h);
        let product = json(j!({
            "product_id": "P-1",
            "name": "Widget",
            "price": "5",
            "inventory": 40
        }));
        svc.contract().route_inbound("supplychain", &product).unwrap();
        assert_eq!(h.rec.capabilities(), vec!["retail.update_inventory"]);
        let calls = h.rec.calls();
        assert_eq!(calls[0].subject, "P-1");
    }

    #[test]
    fn test_unknown_peer_rejected() {
        let h = Harness::new();
        let svc = service(&h);
        let err = svc.contract().route_inbound("healthcare", b"{}").unwrap_err();
        assert_eq!(err.kind(), shared_types::ErrorKind::UnsupportedRoute);
        assert_eq!(h.rec.count(), 0);
    }

    #[test]
    fn test_inventory_and_loyalty_operations() {
        let h = Harness::with(RecordingCollaborators::new().fail_on("retail.update_points"));
        let svc = service(&h);
        svc.update_inventory("P-1", 12).unwrap();
        assert_eq!(
            svc.update_inventory("", 1).unwrap_err().reason(),
            Some("product ID is required")
        );
        assert!(svc.update_loyalty_points("C-1", Amount::from(10)).is_err());
        assert_eq!(
            svc.update_loyalty_points("C-1", Amount::from_i64(-1)).unwrap_err().reason(),
            Some("invalid loyalty points")
        );
    }
}
