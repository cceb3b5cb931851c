//! # IC-03 Transaction Dispatch
//!
//! Generic transaction lifecycle shared by every domain.
//!
//! **Subsystem ID:** 03
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## State Machine
//!
//! ```text
//! Initiated → Validated → Processing → { Completed | Failed } → Finalized
//! ```
//!
//! A domain supplies a closed [`TransactionKind`] enumeration, type-conditional
//! validation and one processing branch per type through [`TransactionDomain`].
//! The dispatcher owns ordering: universal checks, type lookup, domain
//! validation and duplicate detection all complete before anything is stored
//! or any collaborator runs.
//!
//! ## Module Structure
//!
//! ```text
//! ic-03-transaction-dispatch/
//! ├── domain/      # TransactionState, TransactionRecord, requests, notices
//! ├── ports/       # TransactionApi, TransactionDomain, TransactionStore
//! ├── adapters/    # Bounded in-memory store
//! └── service.rs   # TransactionDispatcher<T>
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{InMemoryTransactionStore, DEFAULT_MAX_TRACKED_TRANSACTIONS};
pub use domain::{
    RequestMetadata, StateChange, StatusNotice, StatusReport, TransactionKind, TransactionRecord,
    TransactionRequest, TransactionState,
};
pub use ports::{TransactionApi, TransactionDomain, TransactionStore};
pub use service::TransactionDispatcher;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
