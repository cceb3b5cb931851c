//! # IC-04 Domain Contracts
//!
//! The seven interchain domains, each a thin configuration of the generic
//! router (ic-02) and dispatcher (ic-03).
//!
//! **Subsystem ID:** 04
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Domains
//!
//! | Module | Chain key | Peers | Sealed |
//! |--------|-----------|-------|--------|
//! | `commerce` | `ecommerce` | finance, supplychain, retail | no |
//! | `finance` | `finance` | realestate, insurance, retail | no |
//! | `government` | `government` | finance, healthcare, realestate | no |
//! | `healthcare` | `healthcare` | insurance, pharmacy, laboratory | yes |
//! | `insurance` | `insurance` | healthcare, finance, realestate | no |
//! | `realestate` | `realestate` | finance, government, insurance | no |
//! | `retail` | `retail` | ecommerce, supplychain, finance | no |
//!
//! Every domain module has the same layout:
//!
//! ```text
//! <domain>/
//! ├── ports.rs         # Capability collaborator traits + injection struct
//! ├── contract.rs      # RoutingDomain impl: own-kind validation, route table
//! ├── transactions.rs  # Transaction types, payload, TransactionDomain impl
//! └── mod.rs           # <Domain>Service facade and supplemented operations
//! ```
//!
//! Collaborators are injected; [`adapters::RecordingCollaborators`]
//! implements every port for demos and tests.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod commerce;
pub mod finance;
pub mod government;
pub mod healthcare;
pub mod insurance;
pub mod realestate;
pub mod retail;
pub mod wiring;

#[cfg(test)]
mod test_support;

pub use adapters::{CollaboratorCall, RecordingCollaborators, INJECTED_FAILURE};
pub use commerce::{CommerceCollaborators, CommerceService};
pub use finance::{FinanceCollaborators, FinanceService};
pub use government::{GovernmentCollaborators, GovernmentService};
pub use healthcare::{HealthcareCollaborators, HealthcareService};
pub use insurance::{InsuranceCollaborators, InsuranceService};
pub use realestate::{RealEstateCollaborators, RealEstateService};
pub use retail::{RetailCollaborators, RetailService};
pub use wiring::{DomainService, DomainWiring};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
