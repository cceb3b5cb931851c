//! # Healthcare Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::InterchainResult;

use super::invariants::require_id;
use super::Validate;

/// Patient consent granted to a party.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsentRecord {
    /// Consenting patient.
    pub patient_id: String,
    /// Party granted access.
    pub granted_to: String,
    /// Data category covered.
    pub data_type: String,
    /// Start of validity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    /// End of validity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    /// Declared purpose.
    pub purpose: String,
    /// Usage restrictions.
    pub restrictions: Vec<String>,
}

/// A clinical record. The `data` field is opaque and typically sealed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicalRecord {
    /// Record identifier.
    pub record_id: String,
    /// Patient identifier.
    pub patient_id: String,
    /// Provider identifier.
    pub provider_id: String,
    /// Record category.
    pub record_type: String,
    /// Encoded clinical payload.
    pub data: String,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Last modification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    /// Parties allowed to read the record.
    pub access_control: Vec<String>,
    /// Consents on file.
    pub consent_records: Vec<ConsentRecord>,
    /// Encryption scheme of `data`.
    pub encryption_type: String,
    /// Hash of `data`.
    pub data_hash: String,
}

impl Validate for MedicalRecord {
    fn validate(&self) -> InterchainResult<()> {
        require_id(&self.record_id, "record ID is required")?;
        require_id(&self.patient_id, "patient ID is required")?;
        require_id(&self.provider_id, "provider ID is required")
    }
}
