//! # Interchain Node Runtime
//!
//! Wires the enabled domain services over shared in-memory adapters and
//! replays operation journals against them. The `ic-node` binary is the
//! process entry point.
//!
//! ## Modules
//!
//! - `container/` - TOML configuration and the domain registry
//! - `journal` - JSON-lines operation replay

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod container;
pub mod journal;

pub use container::{ConfigError, DomainRegistry, NodeConfig};
pub use journal::{ErrorReport, JournalEntry, JournalOutcome, JournalReplayer, Operation};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
