//! # Interchain Envelopes
//!
//! Wrappers for payloads crossing a chain boundary.
//!
//! - [`InterchainMessage`]: raw inbound message as it arrives (the peer
//!   identity is still an unvalidated string).
//! - [`OutboundMessage`]: prepared message handed to the outbox, with both
//!   endpoints resolved against the closed [`ChainId`] set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chain::ChainId;

/// Message as received from, or addressed to, another chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterchainMessage {
    /// Source (inbound) or target (outbound) routing key, unvalidated.
    pub chain: String,
    /// Encoded payload.
    pub payload: Vec<u8>,
}

impl InterchainMessage {
    /// Create a message.
    pub fn new(chain: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            chain: chain.into(),
            payload: payload.into(),
        }
    }
}

/// A prepared outbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Correlates the message with audit records and acknowledgements.
    pub correlation_id: Uuid,
    /// Sending domain.
    pub source: ChainId,
    /// Receiving peer.
    pub target: ChainId,
    /// Prepared (possibly sealed) bytes.
    pub payload: Vec<u8>,
    /// Preparation time.
    pub created_at: DateTime<Utc>,
}

impl OutboundMessage {
    /// Wrap prepared bytes for delivery.
    pub fn new(source: ChainId, target: ChainId, payload: Vec<u8>) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            source,
            target,
            payload,
            created_at: Utc::now(),
        }
    }
}
