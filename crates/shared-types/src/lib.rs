//! # Shared Types Crate
//!
//! Types shared by every interchain crate: the closed chain identity set,
//! monetary amounts, the error taxonomy and the message envelopes.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: routing keys and error kinds are defined
//!   once here and never re-declared per domain.
//! - **Closed Identities**: an unknown routing key never parses into a
//!   [`ChainId`]; it surfaces as `UnsupportedRoute` with the raw string.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod amount;
pub mod chain;
pub mod envelope;
pub mod errors;

pub use amount::{Amount, AmountError};
pub use chain::ChainId;
pub use envelope::{InterchainMessage, OutboundMessage};
pub use errors::{CollaboratorError, ErrorKind, InterchainError, InterchainResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
