//! # Government Entities
//!
//! Regulations, permits, public documents and compliance submissions.
//! All four travel under the same `type` discriminator, so each record names
//! its own category `<kind>_type`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::InterchainResult;
use std::collections::BTreeMap;

use super::invariants::require_id;
use super::{Attachment, Validate};

/// A regulation published by an authority.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Regulation {
    /// Regulation identifier.
    pub regulation_id: String,
    /// Title.
    pub title: String,
    /// Summary.
    pub description: String,
    /// Category (tax, zoning, ...).
    pub regulation_type: String,
    /// Lifecycle status.
    pub status: String,
    /// Takes effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<DateTime<Utc>>,
    /// Lapses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    /// Issuing jurisdiction.
    pub jurisdiction: String,
    /// Named requirements.
    pub requirements: BTreeMap<String, String>,
    /// Supporting document ids.
    pub documents: Vec<String>,
    /// Last modification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl Validate for Regulation {
    fn validate(&self) -> InterchainResult<()> {
        require_id(&self.regulation_id, "regulation ID is required")?;
        require_id(&self.title, "title is required")?;
        require_id(&self.regulation_type, "type is required")
    }
}

/// A permit granted to a holder.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permit {
    /// Permit identifier.
    pub permit_id: String,
    /// Holder identifier.
    pub holder_id: String,
    /// Category.
    pub permit_type: String,
    /// Lifecycle status.
    pub status: String,
    /// Issue date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<DateTime<Utc>>,
    /// Expiry date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    /// Conditions attached.
    pub conditions: Vec<String>,
    /// Supporting document ids.
    pub documents: Vec<String>,
}

impl Validate for Permit {
    fn validate(&self) -> InterchainResult<()> {
        require_id(&self.permit_id, "permit ID is required")?;
        require_id(&self.holder_id, "holder ID is required")
    }
}

/// An official document registered by hash.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Document identifier.
    pub document_id: String,
    /// Category.
    pub document_type: String,
    /// Title.
    pub title: String,
    /// Content hash.
    pub hash: String,
    /// Content location.
    pub ipfs_link: String,
    /// Lifecycle status.
    pub status: String,
    /// Issue date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<DateTime<Utc>>,
    /// Validity end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    /// Issuing authority.
    pub issued_by: String,
    /// Hash confirmed by the verifier, if any.
    pub verified_hash: String,
}

impl Validate for Document {
    fn validate(&self) -> InterchainResult<()> {
        require_id(&self.document_id, "document ID is required")?;
        require_id(&self.hash, "document hash is required")
    }
}

/// Evidence submitted to demonstrate compliance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceRecord {
    /// Entity under review.
    pub entity_id: String,
    /// Compliance program.
    pub compliance_type: String,
    /// Requirement ids addressed.
    pub requirements: Vec<String>,
    /// Evidence items.
    pub evidence: Vec<Attachment>,
    /// Review status.
    pub status: String,
    /// Review time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_at: Option<DateTime<Utc>>,
}

impl Validate for ComplianceRecord {
    fn validate(&self) -> InterchainResult<()> {
        require_id(&self.entity_id, "entity ID is required")?;
        require_id(&self.compliance_type, "compliance type is required")
    }
}
