//! # Domain Layer
//!
//! Lifecycle state machine, tracked records and request shapes.

pub mod record;
pub mod request;
pub mod state;

pub use record::{StateChange, TransactionRecord};
pub use request::{RequestMetadata, StatusNotice, StatusReport, TransactionKind, TransactionRequest};
pub use state::TransactionState;
