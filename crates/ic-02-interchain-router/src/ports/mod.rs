//! # Ports Layer
//!
//! Inbound: the interchain contract and the domain plug-in trait.
//! Outbound: audit sink, confidentiality transform, outbox.

pub mod inbound;
pub mod outbound;

pub use inbound::{InterchainContract, RoutingDomain};
pub use outbound::{AuditSink, ConfidentialityTransform, Outbox};
