//! Recording Collaborator Adapter
//!
//! One type implementing every domain capability port. Each call is
//! appended to a log as `(capability, subject)`; selected capabilities can
//! be made to fail. Used by the runtime's demo wiring and by tests that
//! assert collaborator call counts and ordering.

use ic_01_entity_validation::{
    Claim, ComplianceRecord, Document, FinancialTransaction, MedicalRecord, Order, Permit, Policy,
    Property, Regulation, Sale,
};
use parking_lot::Mutex;
use shared_types::{Amount, InterchainError, InterchainResult};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

use crate::commerce::{OrderProcessor, ProductManager};
use crate::finance::{FeeSchedule, FinanceValidator, FundsProcessor, RiskAssessment};
use crate::government::{ComplianceProcessor, DocumentVerifier, PermitManager, RegulationManager};
use crate::healthcare::HealthDataValidator;
use crate::insurance::{ClaimProcessor, InsuranceCompliance, PolicyManager, RiskAssessor};
use crate::realestate::PropertyDataValidator;
use crate::retail::{InventoryAdjustment, InventoryManager, LoyaltyManager, SalesProcessor};

/// Message carried by injected failures.
pub const INJECTED_FAILURE: &str = "injected failure";

/// One recorded collaborator invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollaboratorCall {
    /// `<domain>.<operation>`, e.g. `insurance.process_claim`.
    pub capability: String,
    /// Identifier of the record the call was about.
    pub subject: String,
}

/// Collaborator that accepts everything and remembers it.
pub struct RecordingCollaborators {
    calls: Mutex<Vec<CollaboratorCall>>,
    failing: HashSet<String>,
    risk_level: String,
    fee: Amount,
    premium: Amount,
}

impl Default for RecordingCollaborators {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing: HashSet::new(),
            risk_level: "low".to_string(),
            fee: Amount::ZERO,
            premium: Amount::ZERO,
        }
    }
}

impl RecordingCollaborators {
    /// Collaborator that never fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every call to `capability` with [`INJECTED_FAILURE`].
    #[must_use]
    pub fn fail_on(mut self, capability: &str) -> Self {
        self.failing.insert(capability.to_string());
        self
    }

    /// Risk level returned by both risk assessors.
    #[must_use]
    pub fn with_risk_level(mut self, level: &str) -> Self {
        self.risk_level = level.to_string();
        self
    }

    /// Fee returned by the fee schedule.
    #[must_use]
    pub fn with_fee(mut self, fee: Amount) -> Self {
        self.fee = fee;
        self
    }

    /// Premium returned by the underwriter.
    #[must_use]
    pub fn with_premium(mut self, premium: Amount) -> Self {
        self.premium = premium;
        self
    }

    /// Snapshot of every call so far, in order.
    pub fn calls(&self) -> Vec<CollaboratorCall> {
        self.calls.lock().clone()
    }

    /// Total number of calls.
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Number of calls to `capability`.
    pub fn calls_to(&self, capability: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.capability == capability)
            .count()
    }

    /// Capabilities in call order.
    pub fn capabilities(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .map(|call| call.capability.clone())
            .collect()
    }

    /// Forget recorded calls.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, capability: &str, subject: &str) -> InterchainResult<()> {
        debug!("[recording] {} ({})", capability, subject);
        self.calls.lock().push(CollaboratorCall {
            capability: capability.to_string(),
            subject: subject.to_string(),
        });
        if self.failing.contains(capability) {
            return Err(InterchainError::collaborator(capability, INJECTED_FAILURE));
        }
        Ok(())
    }
}

// =============================================================================
// COMMERCE
// =============================================================================

impl ProductManager for RecordingCollaborators {
    fn update_inventory(&self, product_id: &str, _quantity: i64) -> InterchainResult<()> {
        self.record("commerce.update_inventory", product_id)
    }
}

impl OrderProcessor for RecordingCollaborators {
    fn process_order(&self, order: &Order) -> InterchainResult<()> {
        self.record("commerce.process_order", &order.order_id)
    }

    fn update_order_status(&self, order_id: &str, _status: &str) -> InterchainResult<()> {
        self.record("commerce.update_order_status", order_id)
    }

    fn cancel_order(&self, order_id: &str) -> InterchainResult<()> {
        self.record("commerce.cancel_order", order_id)
    }
}

// =============================================================================
// FINANCE
// =============================================================================

impl FinanceValidator for RecordingCollaborators {
    fn validate_transaction(&self, tx: &FinancialTransaction) -> InterchainResult<()> {
        self.record("finance.validate_transaction", &tx.transaction_id)
    }

    fn validate_compliance(&self, tx: &FinancialTransaction) -> InterchainResult<()> {
        self.record("finance.validate_compliance", &tx.transaction_id)
    }
}

impl FundsProcessor for RecordingCollaborators {
    fn process_payment(&self, tx: &FinancialTransaction) -> InterchainResult<()> {
        self.record("finance.process_payment", &tx.transaction_id)
    }

    fn process_transfer(&self, tx: &FinancialTransaction) -> InterchainResult<()> {
        self.record("finance.process_transfer", &tx.transaction_id)
    }

    fn process_investment(&self, tx: &FinancialTransaction) -> InterchainResult<()> {
        self.record("finance.process_investment", &tx.transaction_id)
    }

    fn process_loan(&self, tx: &FinancialTransaction) -> InterchainResult<()> {
        self.record("finance.process_loan", &tx.transaction_id)
    }
}

impl FeeSchedule for RecordingCollaborators {
    fn calculate_fees(&self, _amount: &Amount, tx_type: &str) -> InterchainResult<Amount> {
        self.record("finance.calculate_fees", tx_type)?;
        Ok(self.fee)
    }
}

impl RiskAssessment for RecordingCollaborators {
    fn assess_transaction_risk(&self, tx: &FinancialTransaction) -> InterchainResult<String> {
        self.record("finance.assess_transaction_risk", &tx.transaction_id)?;
        Ok(self.risk_level.clone())
    }

    fn validate_risk_thresholds(&self, _amount: &Amount, risk_level: &str) -> InterchainResult<()> {
        self.record("finance.validate_risk_thresholds", risk_level)
    }
}

// =============================================================================
// GOVERNMENT
// =============================================================================

impl RegulationManager for RecordingCollaborators {
    fn create_regulation(&self, regulation: &Regulation) -> InterchainResult<()> {
        self.record("government.create_regulation", &regulation.regulation_id)
    }

    fn update_regulation(&self, regulation: &Regulation) -> InterchainResult<()> {
        self.record("government.update_regulation", &regulation.regulation_id)
    }

    fn validate_regulation(&self, regulation: &Regulation) -> InterchainResult<()> {
        self.record("government.validate_regulation", &regulation.regulation_id)
    }
}

impl ComplianceProcessor for RecordingCollaborators {
    fn process_compliance(&self, record: &ComplianceRecord) -> InterchainResult<()> {
        self.record("government.process_compliance", &record.entity_id)
    }

    fn validate_compliance(&self, record: &ComplianceRecord) -> InterchainResult<()> {
        self.record("government.validate_compliance", &record.entity_id)
    }
}

impl PermitManager for RecordingCollaborators {
    fn issue_permit(&self, permit: &Permit) -> InterchainResult<()> {
        self.record("government.issue_permit", &permit.permit_id)
    }

    fn revoke_permit(&self, permit_id: &str) -> InterchainResult<()> {
        self.record("government.revoke_permit", permit_id)
    }

    fn validate_permit(&self, permit: &Permit) -> InterchainResult<()> {
        self.record("government.validate_permit", &permit.permit_id)
    }
}

impl DocumentVerifier for RecordingCollaborators {
    fn verify_document(&self, document: &Document) -> InterchainResult<()> {
        self.record("government.verify_document", &document.document_id)
    }
}

// =============================================================================
// HEALTHCARE
// =============================================================================

impl HealthDataValidator for RecordingCollaborators {
    fn validate_privacy(&self, record: &MedicalRecord) -> InterchainResult<()> {
        self.record("healthcare.validate_privacy", &record.record_id)
    }

    fn validate_access(&self, user_id: &str, _data_type: &str) -> InterchainResult<()> {
        self.record("healthcare.validate_access", user_id)
    }
}

// =============================================================================
// INSURANCE
// =============================================================================

impl PolicyManager for RecordingCollaborators {
    fn create_policy(&self, policy: &Policy) -> InterchainResult<()> {
        self.record("insurance.create_policy", &policy.policy_id)
    }

    fn update_policy(&self, policy: &Policy) -> InterchainResult<()> {
        self.record("insurance.update_policy", &policy.policy_id)
    }

    fn cancel_policy(&self, policy_id: &str) -> InterchainResult<()> {
        self.record("insurance.cancel_policy", policy_id)
    }
}

impl ClaimProcessor for RecordingCollaborators {
    fn process_claim(&self, claim: &Claim) -> InterchainResult<()> {
        self.record("insurance.process_claim", &claim.claim_id)
    }

    fn update_claim_status(&self, claim_id: &str, _status: &str) -> InterchainResult<()> {
        self.record("insurance.update_claim_status", claim_id)
    }

    fn validate_claim(&self, claim: &Claim) -> InterchainResult<()> {
        self.record("insurance.validate_claim", &claim.claim_id)
    }
}

impl RiskAssessor for RecordingCollaborators {
    fn assess_risk(&self, policy: &Policy) -> InterchainResult<String> {
        self.record("insurance.assess_risk", &policy.policy_id)?;
        Ok(self.risk_level.clone())
    }

    fn calculate_premium(
        &self,
        policy_type: &str,
        _risk_factors: &BTreeMap<String, serde_json::Value>,
    ) -> InterchainResult<Amount> {
        self.record("insurance.calculate_premium", policy_type)?;
        Ok(self.premium)
    }
}

impl InsuranceCompliance for RecordingCollaborators {
    fn validate_compliance(&self, policy: &Policy) -> InterchainResult<()> {
        self.record("insurance.validate_compliance", &policy.policy_id)
    }
}

// =============================================================================
// REAL ESTATE
// =============================================================================

impl PropertyDataValidator for RecordingCollaborators {
    fn validate_data(&self, property: &Property) -> InterchainResult<()> {
        self.record("realestate.validate_data", &property.property_id)
    }
}

// =============================================================================
// RETAIL
// =============================================================================

impl InventoryManager for RecordingCollaborators {
    fn update_inventory(&self, adjustment: &InventoryAdjustment) -> InterchainResult<()> {
        self.record("retail.update_inventory", &adjustment.product_id)
    }
}

impl SalesProcessor for RecordingCollaborators {
    fn validate_sale(&self, sale: &Sale) -> InterchainResult<()> {
        self.record("retail.validate_sale", &sale.sale_id)
    }

    fn process_sale(&self, sale: &Sale) -> InterchainResult<()> {
        self.record("retail.process_sale", &sale.sale_id)
    }

    fn process_return(&self, sale: &Sale) -> InterchainResult<()> {
        self.record("retail.process_return", &sale.sale_id)
    }
}

impl LoyaltyManager for RecordingCollaborators {
    fn update_points(&self, customer_id: &str, _points: &Amount) -> InterchainResult<()> {
        self.record("retail.update_points", customer_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let rec = RecordingCollaborators::new();
        OrderProcessor::cancel_order(&rec, "O-1").unwrap();
        ProductManager::update_inventory(&rec, "P-1", 3).unwrap();
        assert_eq!(
            rec.capabilities(),
            vec!["commerce.cancel_order", "commerce.update_inventory"]
        );
        assert_eq!(rec.calls()[0].subject, "O-1");
        assert_eq!(rec.calls_to("commerce.cancel_order"), 1);
    }

    #[test]
    fn test_injected_failure_is_recorded_and_returned() {
        let rec = RecordingCollaborators::new().fail_on("insurance.cancel_policy");
        let err = rec.cancel_policy("POL-1").unwrap_err();
        assert_eq!(
            err,
            InterchainError::collaborator("insurance.cancel_policy", INJECTED_FAILURE)
        );
        assert_eq!(rec.count(), 1);
        assert!(rec.revoke_permit("PM-1").is_ok());
    }

    #[test]
    fn test_configured_answers() {
        let rec = RecordingCollaborators::new()
            .with_risk_level("high")
            .with_fee(Amount::from(7))
            .with_premium(Amount::from(90));
        assert_eq!(rec.assess_risk(&Policy::default()).unwrap(), "high");
        assert_eq!(rec.calculate_fees(&Amount::from(100), "PAYMENT").unwrap(), Amount::from(7));
        assert_eq!(rec.calculate_premium("auto", &BTreeMap::new()).unwrap(), Amount::from(90));
        rec.clear();
        assert_eq!(rec.count(), 0);
    }
}
