//! # Outbound Ports
//!
//! Dependencies the router calls out to: the audit/compliance sink, the
//! confidentiality transform for sensitive domains, and the outbox that
//! carries prepared messages to peers.

use shared_types::{InterchainResult, OutboundMessage};

use crate::domain::AuditEvent;

/// Audit/compliance sink - outbound port.
///
/// A failure here aborts the operation that triggered the event.
pub trait AuditSink: Send + Sync {
    /// Record one event.
    fn record(&self, event: AuditEvent) -> InterchainResult<()>;
}

/// Confidentiality transform - outbound port.
pub trait ConfidentialityTransform: Send + Sync {
    /// Name of the scheme applied.
    fn scheme(&self) -> &'static str;

    /// Protect bytes before they leave the domain.
    fn seal(&self, plaintext: &[u8]) -> InterchainResult<Vec<u8>>;

    /// Recover bytes sealed by [`seal`](Self::seal).
    fn open(&self, sealed: &[u8]) -> InterchainResult<Vec<u8>>;
}

/// Delivery of prepared messages - outbound port.
///
/// Transport, retries and acknowledgements belong to the surrounding
/// runtime.
pub trait Outbox: Send + Sync {
    /// Queue a message for delivery.
    fn send(&self, message: OutboundMessage) -> InterchainResult<()>;
}
