//! # Ports Layer

pub mod inbound;
pub mod outbound;

pub use inbound::{TransactionApi, TransactionDomain};
pub use outbound::TransactionStore;
