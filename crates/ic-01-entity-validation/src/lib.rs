//! # IC-01 Entity Validation
//!
//! Entity model and structural validation for every interchain domain.
//!
//! **Subsystem ID:** 01
//! **Architecture:** Hexagonal (DDD), pure domain layer
//!
//! ## Purpose
//!
//! Every inbound payload and every local transaction sub-record passes
//! through this crate before any collaborator is invoked:
//! - Decode JSON into the entity implied by the route, or by the embedded
//!   `type` discriminator for polymorphic payloads
//! - Reject empty identifiers, nil or negative amounts, empty required
//!   collections
//!
//! ## Module Structure
//!
//! ```text
//! ic-01-entity-validation/
//! ├── domain/       # Entity records per domain, DomainEntity, invariants
//! └── validator.rs  # validate(kind, bytes), tagged two-step decode
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod validator;

pub use domain::{
    Attachment, Claim, ComplianceInfo, ComplianceRecord, ConsentRecord, Discount, Document,
    DomainEntity, EntityKind, FinancialTransaction, LineItem, MedicalRecord, Order, PaymentInfo,
    Permit, Policy, Product, Property, Regulation, RiskInfo, Sale, ShippingInfo,
    TransactionMetadata, Validate,
};
pub use validator::{decode, decode_entity, peek_discriminator, validate, validate_tagged, Schema};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
