//! Medical transactions.
//!
//! The record built from a request is privacy-checked before anything is
//! shared; prescriptions, lab tests and treatments are then forwarded
//! (sealed) to the pharmacy, laboratory and insurance chains respectively.

use ic_01_entity_validation::domain::invariants::require_id;
use ic_01_entity_validation::{Attachment, MedicalRecord};
use ic_02_interchain_router::InterchainRouter;
use ic_03_transaction_dispatch::{
    transaction_kinds, StatusNotice, TransactionDomain, TransactionKind, TransactionRequest,
};
use serde::{Deserialize, Serialize};
use shared_types::{ChainId, InterchainResult};
use std::sync::Arc;

use super::contract::HealthcareContract;
use crate::wiring::encode;

transaction_kinds! {
    /// Healthcare transaction types.
    pub enum MedicalTransactionType {
        /// Record a diagnosis.
        Diagnosis => "DIAGNOSIS",
        /// Prescription, forwarded to pharmacy.
        Prescription => "PRESCRIPTION",
        /// Lab order, forwarded to laboratory.
        LabTest => "LAB_TEST",
        /// Treatment, forwarded to insurance.
        Treatment => "TREATMENT",
    }
}

impl MedicalTransactionType {
    /// Chain that receives this kind of transaction, if any.
    pub fn recipient(&self) -> Option<ChainId> {
        match self {
            Self::Diagnosis => None,
            Self::Prescription => Some(ChainId::Pharmacy),
            Self::LabTest => Some(ChainId::Laboratory),
            Self::Treatment => Some(ChainId::Insurance),
        }
    }
}

/// Clinical fields carried by a healthcare request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicalPayload {
    /// Patient identifier.
    pub patient_id: String,
    /// Provider identifier.
    pub provider_id: String,
    /// Opaque clinical data.
    pub data: String,
    /// Provider-side status.
    pub status: String,
    /// Documents and images.
    pub attachments: Vec<Attachment>,
    /// Parties the patient consented to share with.
    pub consent: Vec<String>,
}

/// Healthcare request.
pub type MedicalTransactionRequest = TransactionRequest<MedicalPayload>;

/// Healthcare half of the dispatcher.
pub struct MedicalTransactions {
    router: Arc<InterchainRouter<HealthcareContract>>,
}

impl MedicalTransactions {
    /// Dispatch through `router`.
    pub fn new(router: Arc<InterchainRouter<HealthcareContract>>) -> Self {
        Self { router }
    }

    fn record_from(
        kind: MedicalTransactionType,
        request: &MedicalTransactionRequest,
    ) -> MedicalRecord {
        let payload = &request.payload;
        MedicalRecord {
            record_id: request.transaction_id.clone(),
            patient_id: payload.patient_id.clone(),
            provider_id: payload.provider_id.clone(),
            record_type: kind.as_str().to_lowercase(),
            data: payload.data.clone(),
            timestamp: request.timestamp,
            last_modified: request.timestamp,
            access_control: payload.consent.clone(),
            ..Default::default()
        }
    }
}

impl TransactionDomain for MedicalTransactions {
    type Payload = MedicalPayload;
    type Kind = MedicalTransactionType;
    const CHAIN: ChainId = ChainId::Healthcare;

    fn validate(
        &self,
        _kind: MedicalTransactionType,
        request: &MedicalTransactionRequest,
    ) -> InterchainResult<()> {
        require_id(&request.payload.patient_id, "patient ID is required")?;
        require_id(&request.payload.provider_id, "provider ID is required")
    }

    fn process(
        &self,
        kind: MedicalTransactionType,
        request: &MedicalTransactionRequest,
    ) -> InterchainResult<Vec<ChainId>> {
        let record = Self::record_from(kind, request);
        self.router
            .domain()
            .collaborators()
            .validator
            .validate_privacy(&record)?;
        match kind.recipient() {
            Some(peer) => {
                self.router.send(peer, &encode(&record)?)?;
                Ok(vec![peer])
            }
            None => Ok(Vec::new()),
        }
    }

    fn notify_peer(&self, peer: ChainId, notice: &StatusNotice) -> InterchainResult<()> {
        self.router.send(peer, &encode(notice)?).map(|_| ())
    }
}
