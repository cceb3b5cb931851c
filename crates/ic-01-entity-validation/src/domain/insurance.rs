//! # Insurance Entities
//!
//! Policies and claims. Both travel under the `type` discriminator
//! (`policy` / `claim`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{Amount, InterchainResult};
use std::collections::BTreeMap;

use super::invariants::{require_amount, require_id};
use super::{Attachment, Validate};

/// An insurance policy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Policy identifier.
    pub policy_id: String,
    /// Policy holder.
    pub holder_id: String,
    /// Line of business (health, life, property, ...).
    pub policy_type: String,
    /// Insured amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Amount>,
    /// Premium charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium: Option<Amount>,
    /// Lifecycle status.
    pub status: String,
    /// Coverage start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Coverage end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Underwriting risk level.
    pub risk_level: String,
    /// Policy terms.
    pub terms: BTreeMap<String, String>,
    /// Policy documents.
    pub documents: Vec<Attachment>,
    /// Last modification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl Validate for Policy {
    fn validate(&self) -> InterchainResult<()> {
        require_id(&self.policy_id, "policy ID is required")?;
        require_id(&self.holder_id, "holder ID is required")?;
        require_amount(self.coverage.as_ref(), "invalid coverage amount")?;
        require_amount(self.premium.as_ref(), "invalid premium amount")
    }
}

/// A claim filed against a policy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Claim {
    /// Claim identifier.
    pub claim_id: String,
    /// Policy claimed against.
    pub policy_id: String,
    /// Claimant.
    pub holder_id: String,
    /// Claim category.
    pub claim_type: String,
    /// Amount claimed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Processing status.
    pub status: String,
    /// Narrative.
    pub description: String,
    /// Supporting evidence.
    pub evidence: Vec<Attachment>,
    /// Filing time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filed_date: Option<DateTime<Utc>>,
    /// Processing time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_date: Option<DateTime<Utc>>,
}

impl Validate for Claim {
    fn validate(&self) -> InterchainResult<()> {
        require_id(&self.claim_id, "claim ID is required")?;
        require_id(&self.policy_id, "policy ID is required")?;
        require_amount(self.amount.as_ref(), "invalid claim amount")
    }
}
