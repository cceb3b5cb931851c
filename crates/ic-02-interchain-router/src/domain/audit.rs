//! # Audit Events
//!
//! Records handed to the audit/compliance sink.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use shared_types::ChainId;
use uuid::Uuid;

/// Notable router transitions that are audited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// A peer callback arrived.
    CallbackReceived,
}

/// One audit record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Unique event id.
    pub event_id: Uuid,
    /// Domain recording the event.
    pub domain: ChainId,
    /// Peer identity exactly as received (may be unknown).
    pub peer: String,
    /// What happened.
    pub action: AuditAction,
    /// SHA-256 of the payload, hex. The payload itself is not retained.
    pub payload_digest: String,
    /// Payload length in bytes.
    pub payload_len: usize,
    /// Recording time.
    pub recorded_at: DateTime<Utc>,
}

impl AuditEvent {
    /// Event for an incoming callback.
    pub fn callback(domain: ChainId, peer: &str, response: &[u8]) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            domain,
            peer: peer.to_string(),
            action: AuditAction::CallbackReceived,
            payload_digest: digest_hex(response),
            payload_len: response.len(),
            recorded_at: Utc::now(),
        }
    }
}

/// Hex SHA-256 of `bytes`.
pub fn digest_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
