//! # Commerce Entities
//!
//! Catalog products and customer orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{Amount, InterchainResult};
use std::collections::BTreeMap;

use super::invariants::{optional_amount, require_amount, require_id, require_non_empty};
use super::Validate;

/// A priced line on an order or a sale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    /// Product identifier.
    pub product_id: String,
    /// Units.
    pub quantity: u32,
    /// Price per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Amount>,
    /// Line total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Amount>,
}

impl Validate for LineItem {
    fn validate(&self) -> InterchainResult<()> {
        require_id(&self.product_id, "item product ID is required")?;
        optional_amount(self.unit_price.as_ref(), "invalid item price")?;
        optional_amount(self.subtotal.as_ref(), "invalid item price")
    }
}

/// Delivery details attached to an order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingInfo {
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
    /// Postal code.
    pub postal_code: String,
    /// Carrier name.
    pub carrier: String,
    /// Carrier tracking number.
    pub tracking_id: String,
    /// Shipment status.
    pub status: String,
    /// Estimated delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub est_delivery: Option<DateTime<Utc>>,
}

/// Catalog product.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Product identifier.
    pub product_id: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Amount>,
    /// Price currency.
    pub currency: String,
    /// Units in stock.
    pub inventory: i64,
    /// Catalog category.
    pub category: String,
    /// Extra attributes.
    pub attributes: BTreeMap<String, String>,
    /// Image links.
    pub images: Vec<String>,
    /// Listing status.
    pub status: String,
    /// Last modification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl Validate for Product {
    fn validate(&self) -> InterchainResult<()> {
        require_id(&self.product_id, "product ID is required")?;
        require_id(&self.name, "product name is required")?;
        require_amount(self.price.as_ref(), "invalid price")
    }
}

/// Customer order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    /// Order identifier.
    pub order_id: String,
    /// Customer identifier.
    pub customer_id: String,
    /// Ordered lines.
    pub items: Vec<LineItem>,
    /// Order total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Amount>,
    /// Fulfilment status.
    pub status: String,
    /// Payment status.
    pub payment_status: String,
    /// Delivery details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_info: Option<ShippingInfo>,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Validate for Order {
    fn validate(&self) -> InterchainResult<()> {
        require_id(&self.order_id, "order ID is required")?;
        require_id(&self.customer_id, "customer ID is required")?;
        require_non_empty(&self.items, "order must contain items")?;
        optional_amount(self.total_amount.as_ref(), "invalid total amount")?;
        self.items.iter().try_for_each(Validate::validate)
    }
}
