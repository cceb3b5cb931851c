//! # Finance Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{Amount, InterchainError, InterchainResult};
use std::collections::BTreeMap;

use super::invariants::{require_amount, require_id};
use super::Validate;

/// KYC/AML status of a transaction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceInfo {
    /// Know-your-customer verified.
    pub kyc_verified: bool,
    /// Anti-money-laundering screened.
    pub aml_checked: bool,
    /// Assigned risk level.
    pub risk_level: String,
    /// Last screening time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_checked: Option<DateTime<Utc>>,
    /// Compliance references.
    pub compliance_refs: Vec<String>,
}

/// Risk assessment snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskInfo {
    /// Score in `[0, 1]`.
    pub risk_score: f64,
    /// Contributing factors.
    pub risk_factors: Vec<String>,
    /// Assessment time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessed_at: Option<DateTime<Utc>>,
    /// Expiry of the assessment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    /// Restrictions imposed.
    pub restrictions: Vec<String>,
}

/// Supplementary data carried by a financial transaction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionMetadata {
    /// Stated purpose.
    pub purpose: String,
    /// External references (order ids, invoices).
    pub references: Vec<String>,
    /// Compliance status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance: Option<ComplianceInfo>,
    /// Risk snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskInfo>,
    /// Attachment links.
    pub attachments: Vec<String>,
    /// Extra key/value data.
    pub extra: BTreeMap<String, String>,
}

/// Value transfer between two addresses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialTransaction {
    /// Transaction identifier.
    pub transaction_id: String,
    /// Payer.
    pub from_address: String,
    /// Payee.
    pub to_address: String,
    /// Amount moved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Currency code.
    pub currency: String,
    /// Transaction category.
    pub tx_type: String,
    /// Settlement status.
    pub status: String,
    /// Submission time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Supplementary data.
    pub metadata: TransactionMetadata,
}

impl Validate for FinancialTransaction {
    fn validate(&self) -> InterchainResult<()> {
        require_id(&self.transaction_id, "transaction ID is required")?;
        if self.from_address.is_empty() || self.to_address.is_empty() {
            return Err(InterchainError::invalid("from and to addresses are required"));
        }
        require_amount(self.amount.as_ref(), "invalid amount")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer() -> FinancialTransaction {
        FinancialTransaction {
            transaction_id: "F1".into(),
            from_address: "A".into(),
            to_address: "B".into(),
            amount: Some(Amount::from(50)),
            currency: "USD".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_transfer() {
        assert!(transfer().validate().is_ok());
    }

    #[test]
    fn test_empty_party_rejected() {
        let mut tx = transfer();
        tx.from_address.clear();
        assert_eq!(
            tx.validate().unwrap_err().reason(),
            Some("from and to addresses are required")
        );
    }

    #[test]
    fn test_nil_and_negative_amount_rejected() {
        let mut tx = transfer();
        tx.amount = None;
        assert_eq!(tx.validate().unwrap_err().reason(), Some("invalid amount"));
        tx.amount = Some(Amount::from_i64(-50));
        assert_eq!(tx.validate().unwrap_err().reason(), Some("invalid amount"));
        tx.amount = Some(Amount::ZERO);
        assert!(tx.validate().is_ok());
    }
}
