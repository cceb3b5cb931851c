//! # Domain Layer
//!
//! Entity records for every domain and the [`DomainEntity`] tagged union.

pub mod commerce;
pub mod finance;
pub mod government;
pub mod healthcare;
pub mod insurance;
pub mod invariants;
pub mod realestate;
pub mod retail;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{InterchainError, InterchainResult};
use std::fmt;

pub use commerce::{LineItem, Order, Product, ShippingInfo};
pub use finance::{ComplianceInfo, FinancialTransaction, RiskInfo, TransactionMetadata};
pub use government::{ComplianceRecord, Document, Permit, Regulation};
pub use healthcare::{ConsentRecord, MedicalRecord};
pub use insurance::{Claim, Policy};
pub use realestate::Property;
pub use retail::{Discount, PaymentInfo, Sale};

/// Structural validation of a decoded record.
///
/// Pure: no side effects, first failing rule wins.
pub trait Validate {
    /// Check required identifiers, amounts and collections.
    fn validate(&self) -> InterchainResult<()>;
}

/// A file referenced by hash (evidence, policy documents).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    /// Attachment category.
    #[serde(rename = "type")]
    pub attachment_type: String,
    /// Description.
    pub description: String,
    /// Content hash.
    pub hash: String,
    /// Content location.
    pub ipfs_link: String,
    /// Upload time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// Every entity kind the validator understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Catalog product.
    Product,
    /// Customer order.
    Order,
    /// Payment or transfer.
    FinancialTransaction,
    /// Published regulation.
    Regulation,
    /// Issued permit.
    Permit,
    /// Registered document.
    Document,
    /// Compliance submission.
    Compliance,
    /// Clinical record.
    MedicalRecord,
    /// Insurance policy.
    Policy,
    /// Insurance claim.
    Claim,
    /// Real estate property.
    Property,
    /// Point-of-sale transaction.
    Sale,
}

impl EntityKind {
    /// All kinds.
    pub const ALL: [EntityKind; 12] = [
        EntityKind::Product,
        EntityKind::Order,
        EntityKind::FinancialTransaction,
        EntityKind::Regulation,
        EntityKind::Permit,
        EntityKind::Document,
        EntityKind::Compliance,
        EntityKind::MedicalRecord,
        EntityKind::Policy,
        EntityKind::Claim,
        EntityKind::Property,
        EntityKind::Sale,
    ];

    /// Value of the `type` discriminator for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            EntityKind::Product => "product",
            EntityKind::Order => "order",
            EntityKind::FinancialTransaction => "financial_transaction",
            EntityKind::Regulation => "regulation",
            EntityKind::Permit => "permit",
            EntityKind::Document => "document",
            EntityKind::Compliance => "compliance",
            EntityKind::MedicalRecord => "medical_record",
            EntityKind::Policy => "policy",
            EntityKind::Claim => "claim",
            EntityKind::Property => "property",
            EntityKind::Sale => "sale",
        }
    }

    /// Kind for a discriminator value.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
    }

    /// Noun used in decode failure messages (`invalid <label> format`).
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::FinancialTransaction => "transaction",
            EntityKind::MedicalRecord => "medical record",
            EntityKind::Property => "property data",
            EntityKind::Compliance => "compliance data",
            other => other.tag(),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A decoded record of any kind.
///
/// Serialises internally tagged on `type`, so an encoded entity can be fed
/// straight back into discriminator-based validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEntity {
    /// Catalog product.
    Product(Product),
    /// Customer order.
    Order(Order),
    /// Payment or transfer.
    FinancialTransaction(FinancialTransaction),
    /// Published regulation.
    Regulation(Regulation),
    /// Issued permit.
    Permit(Permit),
    /// Registered document.
    Document(Document),
    /// Compliance submission.
    Compliance(ComplianceRecord),
    /// Clinical record.
    MedicalRecord(MedicalRecord),
    /// Insurance policy.
    Policy(Policy),
    /// Insurance claim.
    Claim(Claim),
    /// Real estate property.
    Property(Property),
    /// Point-of-sale transaction.
    Sale(Sale),
}

impl DomainEntity {
    /// Kind of this entity.
    pub fn kind(&self) -> EntityKind {
        match self {
            DomainEntity::Product(_) => EntityKind::Product,
            DomainEntity::Order(_) => EntityKind::Order,
            DomainEntity::FinancialTransaction(_) => EntityKind::FinancialTransaction,
            DomainEntity::Regulation(_) => EntityKind::Regulation,
            DomainEntity::Permit(_) => EntityKind::Permit,
            DomainEntity::Document(_) => EntityKind::Document,
            DomainEntity::Compliance(_) => EntityKind::Compliance,
            DomainEntity::MedicalRecord(_) => EntityKind::MedicalRecord,
            DomainEntity::Policy(_) => EntityKind::Policy,
            DomainEntity::Claim(_) => EntityKind::Claim,
            DomainEntity::Property(_) => EntityKind::Property,
            DomainEntity::Sale(_) => EntityKind::Sale,
        }
    }

    /// Primary identifier.
    pub fn id(&self) -> &str {
        match self {
            DomainEntity::Product(e) => &e.product_id,
            DomainEntity::Order(e) => &e.order_id,
            DomainEntity::FinancialTransaction(e) => &e.transaction_id,
            DomainEntity::Regulation(e) => &e.regulation_id,
            DomainEntity::Permit(e) => &e.permit_id,
            DomainEntity::Document(e) => &e.document_id,
            DomainEntity::Compliance(e) => &e.entity_id,
            DomainEntity::MedicalRecord(e) => &e.record_id,
            DomainEntity::Policy(e) => &e.policy_id,
            DomainEntity::Claim(e) => &e.claim_id,
            DomainEntity::Property(e) => &e.property_id,
            DomainEntity::Sale(e) => &e.sale_id,
        }
    }
}

impl Validate for DomainEntity {
    fn validate(&self) -> InterchainResult<()> {
        match self {
            DomainEntity::Product(e) => e.validate(),
            DomainEntity::Order(e) => e.validate(),
            DomainEntity::FinancialTransaction(e) => e.validate(),
            DomainEntity::Regulation(e) => e.validate(),
            DomainEntity::Permit(e) => e.validate(),
            DomainEntity::Document(e) => e.validate(),
            DomainEntity::Compliance(e) => e.validate(),
            DomainEntity::MedicalRecord(e) => e.validate(),
            DomainEntity::Policy(e) => e.validate(),
            DomainEntity::Claim(e) => e.validate(),
            DomainEntity::Property(e) => e.validate(),
            DomainEntity::Sale(e) => e.validate(),
        }
    }
}

/// `TryFrom<DomainEntity>` for each record type, so route handlers can
/// take the variant they expect.
macro_rules! impl_entity_conversion {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl TryFrom<DomainEntity> for $ty {
                type Error = InterchainError;

                fn try_from(entity: DomainEntity) -> Result<Self, Self::Error> {
                    match entity {
                        DomainEntity::$variant(inner) => Ok(inner),
                        other => Err(InterchainError::invalid(format!(
                            "expected {} payload, got {}",
                            EntityKind::$variant,
                            other.kind()
                        ))),
                    }
                }
            }
        )*
    };
}

impl_entity_conversion! {
    Product => Product,
    Order => Order,
    FinancialTransaction => FinancialTransaction,
    Regulation => Regulation,
    Permit => Permit,
    Document => Document,
    Compliance => ComplianceRecord,
    MedicalRecord => MedicalRecord,
    Policy => Policy,
    Claim => Claim,
    Property => Property,
    Sale => Sale,
}
