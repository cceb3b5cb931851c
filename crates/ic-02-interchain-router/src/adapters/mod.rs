//! # Adapters
//!
//! In-memory implementations of the router's outbound ports.

pub mod audit_log;
pub mod outbox;
pub mod sealer;

pub use audit_log::{InMemoryAuditLog, DEFAULT_AUDIT_RETENTION};
pub use outbox::{InMemoryOutbox, DEFAULT_OUTBOX_CAPACITY};
pub use sealer::{DigestEnvelopeSealer, DIGEST_ENVELOPE_SCHEME};
