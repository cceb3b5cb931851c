//! Finance capability collaborators.

use ic_01_entity_validation::FinancialTransaction;
use shared_types::{Amount, InterchainResult};
use std::sync::Arc;

/// Regulatory and business-rule checks on transactions.
pub trait FinanceValidator: Send + Sync {
    /// Business-rule validation beyond structure.
    fn validate_transaction(&self, tx: &FinancialTransaction) -> InterchainResult<()>;

    /// KYC/AML compliance.
    fn validate_compliance(&self, tx: &FinancialTransaction) -> InterchainResult<()>;
}

/// Funds movement, one operation per transaction type.
pub trait FundsProcessor: Send + Sync {
    /// Settle a payment.
    fn process_payment(&self, tx: &FinancialTransaction) -> InterchainResult<()>;

    /// Move funds between accounts.
    fn process_transfer(&self, tx: &FinancialTransaction) -> InterchainResult<()>;

    /// Book an investment.
    fn process_investment(&self, tx: &FinancialTransaction) -> InterchainResult<()>;

    /// Disburse a loan.
    fn process_loan(&self, tx: &FinancialTransaction) -> InterchainResult<()>;
}

/// Fee schedule.
pub trait FeeSchedule: Send + Sync {
    /// Fee owed for moving `amount` as `tx_type`.
    fn calculate_fees(&self, amount: &Amount, tx_type: &str) -> InterchainResult<Amount>;
}

/// Transaction risk scoring.
pub trait RiskAssessment: Send + Sync {
    /// Risk level label for a transaction.
    fn assess_transaction_risk(&self, tx: &FinancialTransaction) -> InterchainResult<String>;

    /// Reject amounts above the threshold for `risk_level`.
    fn validate_risk_thresholds(&self, amount: &Amount, risk_level: &str) -> InterchainResult<()>;
}

/// Collaborators injected into the finance contract.
#[derive(Clone)]
pub struct FinanceCollaborators {
    /// Validator.
    pub validator: Arc<dyn FinanceValidator>,
    /// Funds processor.
    pub funds: Arc<dyn FundsProcessor>,
    /// Fee schedule.
    pub fees: Arc<dyn FeeSchedule>,
    /// Risk assessment.
    pub risk: Arc<dyn RiskAssessment>,
}

impl FinanceCollaborators {
    /// Use one implementation for every capability.
    pub fn shared<C>(collaborator: Arc<C>) -> Self
    where
        C: FinanceValidator + FundsProcessor + FeeSchedule + RiskAssessment + 'static,
    {
        Self {
            validator: collaborator.clone(),
            funds: collaborator.clone(),
            fees: collaborator.clone(),
            risk: collaborator,
        }
    }
}
