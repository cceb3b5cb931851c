//! # Retail Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{Amount, InterchainResult};

use super::commerce::LineItem;
use super::invariants::{optional_amount, require_id, require_non_empty};
use super::Validate;

/// Discount applied to a sale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discount {
    /// Discount kind (coupon, loyalty, ...).
    #[serde(rename = "type")]
    pub discount_type: String,
    /// Amount deducted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Description.
    pub description: String,
}

/// Payment taken for a sale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentInfo {
    /// Payment method.
    pub method: String,
    /// Amount paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Payment status.
    pub status: String,
    /// Processor reference.
    pub reference: String,
    /// Settlement time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
}

/// A point-of-sale transaction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sale {
    /// Sale identifier.
    pub sale_id: String,
    /// Customer identifier.
    pub customer_id: String,
    /// Store identifier.
    pub store_id: String,
    /// Sold lines.
    pub items: Vec<LineItem>,
    /// Sale total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Amount>,
    /// Discounts applied.
    pub discounts: Vec<Discount>,
    /// Payment taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_info: Option<PaymentInfo>,
    /// Loyalty points earned.
    pub loyalty_points: u64,
    /// Sale status.
    pub status: String,
    /// Sale time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Validate for Sale {
    fn validate(&self) -> InterchainResult<()> {
        require_id(&self.sale_id, "sale ID is required")?;
        require_id(&self.customer_id, "customer ID is required")?;
        require_non_empty(&self.items, "sale must contain items")?;
        optional_amount(self.total_amount.as_ref(), "invalid total amount")?;
        self.items.iter().try_for_each(Validate::validate)?;
        for discount in &self.discounts {
            optional_amount(discount.amount.as_ref(), "invalid discount amount")?;
        }
        if let Some(payment) = &self.payment_info {
            optional_amount(payment.amount.as_ref(), "invalid payment amount")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale() -> Sale {
        Sale {
            sale_id: "S-1".into(),
            customer_id: "C-1".into(),
            store_id: "ST-1".into(),
            items: vec![LineItem {
                product_id: "P-1".into(),
                quantity: 1,
                unit_price: Some(Amount::from(5)),
                subtotal: Some(Amount::from(5)),
            }],
            total_amount: Some(Amount::from(5)),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_sale() {
        assert!(sale().validate().is_ok());
    }

    #[test]
    fn test_sale_requires_items() {
        let mut s = sale();
        s.items.clear();
        assert_eq!(s.validate().unwrap_err().reason(), Some("sale must contain items"));
    }

    #[test]
    fn test_negative_discount_rejected() {
        let mut s = sale();
        s.discounts.push(Discount {
            discount_type: "coupon".into(),
            amount: Some(Amount::from_i64(-2)),
            description: String::new(),
        });
        assert_eq!(s.validate().unwrap_err().reason(), Some("invalid discount amount"));
    }

    #[test]
    fn test_discount_type_uses_wire_name() {
        let json = serde_json::to_value(Discount {
            discount_type: "coupon".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json["type"], "coupon");
    }
}
