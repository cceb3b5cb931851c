//! Government transactions.
//!
//! Each type requires exactly one sub-record (`regulation_data`,
//! `permit_data`, `document_data`, `compliance_data`), which must itself be
//! structurally valid.

use ic_01_entity_validation::domain::invariants::require_id;
use ic_01_entity_validation::{ComplianceRecord, Document, Permit, Regulation, Validate};
use ic_02_interchain_router::InterchainRouter;
use ic_03_transaction_dispatch::{
    transaction_kinds, StatusNotice, TransactionDomain, TransactionRequest,
};
use serde::{Deserialize, Serialize};
use shared_types::{ChainId, InterchainError, InterchainResult};
use std::sync::Arc;

use super::contract::GovernmentContract;
use crate::wiring::encode;

transaction_kinds! {
    /// Government transaction types.
    pub enum GovernmentTransactionType {
        /// Publish a regulation.
        NewRegulation => "NEW_REGULATION",
        /// Amend a regulation.
        UpdateRegulation => "UPDATE_REGULATION",
        /// Issue a permit.
        IssuePermit => "ISSUE_PERMIT",
        /// Revoke a permit.
        RevokePermit => "REVOKE_PERMIT",
        /// Verify a document.
        VerifyDocument => "VERIFY_DOCUMENT",
        /// Record a compliance submission.
        ProcessCompliance => "PROCESS_COMPLIANCE",
    }
}

/// Optional sub-records; the transaction type selects which is required.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernmentPayload {
    /// Regulation sub-record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulation_data: Option<Regulation>,
    /// Permit sub-record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permit_data: Option<Permit>,
    /// Document sub-record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_data: Option<Document>,
    /// Compliance sub-record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_data: Option<ComplianceRecord>,
}

/// Government request.
pub type GovernmentTransactionRequest = TransactionRequest<GovernmentPayload>;

fn required<'a, T>(record: &'a Option<T>, name: &str) -> InterchainResult<&'a T> {
    record
        .as_ref()
        .ok_or_else(|| InterchainError::invalid(format!("{name} data is required")))
}

/// Government half of the dispatcher.
pub struct GovernmentTransactions {
    router: Arc<InterchainRouter<GovernmentContract>>,
}

impl GovernmentTransactions {
    /// Dispatch through `router`.
    pub fn new(router: Arc<InterchainRouter<GovernmentContract>>) -> Self {
        Self { router }
    }
}

impl TransactionDomain for GovernmentTransactions {
    type Payload = GovernmentPayload;
    type Kind = GovernmentTransactionType;
    const CHAIN: ChainId = ChainId::Government;

    fn validate(
        &self,
        kind: GovernmentTransactionType,
        request: &GovernmentTransactionRequest,
    ) -> InterchainResult<()> {
        let payload = &request.payload;
        match kind {
            GovernmentTransactionType::NewRegulation
            | GovernmentTransactionType::UpdateRegulation => {
                required(&payload.regulation_data, "regulation")?.validate()
            }
            GovernmentTransactionType::IssuePermit => {
                required(&payload.permit_data, "permit")?.validate()
            }
            GovernmentTransactionType::RevokePermit => {
                let permit = required(&payload.permit_data, "permit")?;
                require_id(&permit.permit_id, "permit ID is required")
            }
            GovernmentTransactionType::VerifyDocument => {
                required(&payload.document_data, "document")?.validate()
            }
            GovernmentTransactionType::ProcessCompliance => {
                required(&payload.compliance_data, "compliance")?.validate()
            }
        }
    }

    fn process(
        &self,
        kind: GovernmentTransactionType,
        request: &GovernmentTransactionRequest,
    ) -> InterchainResult<Vec<ChainId>> {
        let c = self.router.domain().collaborators();
        let payload = &request.payload;
        match kind {
            GovernmentTransactionType::NewRegulation => {
                let regulation = required(&payload.regulation_data, "regulation")?;
                c.regulations.validate_regulation(regulation)?;
                c.regulations.create_regulation(regulation)?;
            }
            GovernmentTransactionType::UpdateRegulation => {
                c.regulations
                    .update_regulation(required(&payload.regulation_data, "regulation")?)?;
            }
            GovernmentTransactionType::IssuePermit => {
                let permit = required(&payload.permit_data, "permit")?;
                c.permits.validate_permit(permit)?;
                c.permits.issue_permit(permit)?;
            }
            GovernmentTransactionType::RevokePermit => {
                c.permits
                    .revoke_permit(&required(&payload.permit_data, "permit")?.permit_id)?;
            }
            GovernmentTransactionType::VerifyDocument => {
                c.documents
                    .verify_document(required(&payload.document_data, "document")?)?;
            }
            GovernmentTransactionType::ProcessCompliance => {
                c.compliance
                    .process_compliance(required(&payload.compliance_data, "compliance")?)?;
            }
        }
        Ok(Vec::new())
    }

    fn notify_peer(&self, peer: ChainId, notice: &StatusNotice) -> InterchainResult<()> {
        self.router.send(peer, &encode(notice)?).map(|_| ())
    }
}
