//! Order transactions.

use ic_01_entity_validation::domain::invariants::{require_amount, require_id, require_non_empty};
use ic_01_entity_validation::{
    FinancialTransaction, LineItem, Order, ShippingInfo, TransactionMetadata, Validate,
};
use ic_02_interchain_router::InterchainRouter;
use ic_03_transaction_dispatch::{
    transaction_kinds, StatusNotice, TransactionDomain, TransactionRequest,
};
use serde::{Deserialize, Serialize};
use shared_types::{Amount, ChainId, InterchainResult};
use std::sync::Arc;

use super::contract::CommerceContract;
use crate::wiring::encode;

transaction_kinds! {
    /// Commerce transaction types.
    pub enum OrderTransactionType {
        /// Place an order.
        NewOrder => "NEW_ORDER",
        /// Change an order's status.
        UpdateOrder => "UPDATE_ORDER",
        /// Cancel an order.
        CancelOrder => "CANCEL_ORDER",
        /// Refund an order through finance.
        RefundOrder => "REFUND_ORDER",
    }
}

/// Order fields carried by a commerce request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderPayload {
    /// Order identifier.
    pub order_id: String,
    /// Customer identifier.
    pub customer_id: String,
    /// Line items.
    pub items: Vec<LineItem>,
    /// Order total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Amount>,
    /// Target status for updates.
    pub status: String,
    /// Shipping details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_info: Option<ShippingInfo>,
    /// Payment method.
    pub payment_method: String,
}

/// Commerce request.
pub type OrderTransactionRequest = TransactionRequest<OrderPayload>;

/// Commerce half of the dispatcher.
pub struct OrderTransactions {
    router: Arc<InterchainRouter<CommerceContract>>,
}

impl OrderTransactions {
    /// Dispatch through `router`.
    pub fn new(router: Arc<InterchainRouter<CommerceContract>>) -> Self {
        Self { router }
    }

    fn order_from(request: &OrderTransactionRequest) -> Order {
        let payload = &request.payload;
        Order {
            order_id: payload.order_id.clone(),
            customer_id: payload.customer_id.clone(),
            items: payload.items.clone(),
            total_amount: payload.total_amount,
            status: "created".to_string(),
            payment_status: "pending".to_string(),
            shipping_info: payload.shipping_info.clone(),
            created_at: request.timestamp,
            updated_at: request.timestamp,
        }
    }

    fn refund_from(request: &OrderTransactionRequest) -> FinancialTransaction {
        let payload = &request.payload;
        FinancialTransaction {
            transaction_id: request.transaction_id.clone(),
            from_address: ChainId::Commerce.as_str().to_string(),
            to_address: payload.customer_id.clone(),
            amount: payload.total_amount,
            currency: String::new(),
            tx_type: "REFUND".to_string(),
            status: "pending".to_string(),
            timestamp: request.timestamp,
            metadata: TransactionMetadata {
                purpose: format!("refund for order {}", payload.order_id),
                references: vec![payload.order_id.clone()],
                ..Default::default()
            },
        }
    }
}

impl TransactionDomain for OrderTransactions {
    type Payload = OrderPayload;
    type Kind = OrderTransactionType;
    const CHAIN: ChainId = ChainId::Commerce;

    fn validate(
        &self,
        kind: OrderTransactionType,
        request: &OrderTransactionRequest,
    ) -> InterchainResult<()> {
        let payload = &request.payload;
        match kind {
            OrderTransactionType::NewOrder => {
                require_non_empty(&payload.items, "order must contain items")?;
                require_amount(payload.total_amount.as_ref(), "invalid total amount")?;
                require_id(&payload.order_id, "order ID is required")?;
                require_id(&payload.customer_id, "customer ID is required")?;
                payload.items.iter().try_for_each(LineItem::validate)
            }
            OrderTransactionType::UpdateOrder => {
                require_id(&payload.order_id, "order ID is required")?;
                require_id(&payload.status, "order status is required")
            }
            OrderTransactionType::CancelOrder => {
                require_id(&payload.order_id, "order ID is required")
            }
            OrderTransactionType::RefundOrder => {
                require_id(&payload.order_id, "order ID is required")?;
                require_id(&payload.customer_id, "customer ID is required")?;
                require_amount(payload.total_amount.as_ref(), "invalid total amount")
            }
        }
    }

    fn process(
        &self,
        kind: OrderTransactionType,
        request: &OrderTransactionRequest,
    ) -> InterchainResult<Vec<ChainId>> {
        let orders = &self.router.domain().collaborators().orders;
        let payload = &request.payload;
        match kind {
            OrderTransactionType::NewOrder => {
                orders.process_order(&Self::order_from(request))?;
                Ok(Vec::new())
            }
            OrderTransactionType::UpdateOrder => {
                orders.update_order_status(&payload.order_id, &payload.status)?;
                Ok(Vec::new())
            }
            OrderTransactionType::CancelOrder => {
                orders.cancel_order(&payload.order_id)?;
                Ok(Vec::new())
            }
            OrderTransactionType::RefundOrder => {
                let refund = Self::refund_from(request);
                refund.validate()?;
                self.router.send(ChainId::Finance, &encode(&refund)?)?;
                Ok(vec![ChainId::Finance])
            }
        }
    }

    fn notify_peer(&self, peer: ChainId, notice: &StatusNotice) -> InterchainResult<()> {
        self.router.send(peer, &encode(notice)?).map(|_| ())
    }
}
