//! # Adapters

pub mod store;

pub use store::{InMemoryTransactionStore, DEFAULT_MAX_TRACKED_TRANSACTIONS};
