//! # IC-02 Interchain Router
//!
//! The four-operation interchain contract, implemented once and configured
//! per domain by a closed route table.
//!
//! **Subsystem ID:** 02
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Operations
//!
//! | Operation | Lookup | Before handler |
//! |-----------|--------|----------------|
//! | `validate_inbound` | none | entity validation (+ domain sub-validators) |
//! | `route_inbound` | inbound table | peer payload schema validation |
//! | `prepare_outbound` | outbound table | per-target preparation, then sealing |
//! | `handle_callback` | callback table | audit sink (always, even for unknown peers) |
//!
//! ## Module Structure
//!
//! ```text
//! ic-02-interchain-router/
//! ├── domain/      # RouteTable, stock handlers, AuditEvent
//! ├── ports/       # InterchainContract, RoutingDomain, AuditSink, Outbox,
//! │                #   ConfidentialityTransform
//! ├── adapters/    # In-memory audit log and outbox, digest envelope sealer
//! └── service.rs   # InterchainRouter<D>
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{
    DigestEnvelopeSealer, InMemoryAuditLog, InMemoryOutbox, DEFAULT_AUDIT_RETENTION,
    DEFAULT_OUTBOX_CAPACITY, DIGEST_ENVELOPE_SCHEME,
};
pub use domain::{
    accept, acknowledge, digest_hex, passthrough, AuditAction, AuditEvent, CallbackHandler,
    InboundHandler, InboundRoute, OutboundPreparer, RouteTable,
};
pub use ports::{AuditSink, ConfidentialityTransform, InterchainContract, Outbox, RoutingDomain};
pub use service::InterchainRouter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
