//! In-Memory Audit Log Adapter
//!
//! Implements `AuditSink` by retaining the most recent events in memory.

use parking_lot::RwLock;
use shared_types::{InterchainError, InterchainResult};
use std::collections::VecDeque;
use tracing::info;

use crate::domain::AuditEvent;
use crate::ports::AuditSink;

/// Default number of retained events.
pub const DEFAULT_AUDIT_RETENTION: usize = 10_000;

/// Bounded in-memory audit log.
pub struct InMemoryAuditLog {
    events: RwLock<VecDeque<AuditEvent>>,
    retain: usize,
    should_fail: bool,
}

impl InMemoryAuditLog {
    /// Log retaining at most `retain` events (oldest dropped first).
    pub fn new(retain: usize) -> Self {
        Self {
            events: RwLock::new(VecDeque::new()),
            retain: retain.max(1),
            should_fail: false,
        }
    }

    /// Log that rejects every event.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new(1)
        }
    }

    /// Snapshot of retained events, oldest first.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.read().iter().cloned().collect()
    }

    /// Number of retained events.
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

impl Default for InMemoryAuditLog {
    fn default() -> Self {
        Self::new(DEFAULT_AUDIT_RETENTION)
    }
}

impl AuditSink for InMemoryAuditLog {
    fn record(&self, event: AuditEvent) -> InterchainResult<()> {
        if self.should_fail {
            return Err(InterchainError::collaborator("audit_sink", "audit log unavailable"));
        }
        info!(
            "[ic-02] audit {:?} domain={} peer={} digest={}",
            event.action, event.domain, event.peer, event.payload_digest
        );
        let mut events = self.events.write();
        if events.len() == self.retain {
            events.pop_front();
        }
        events.push_back(event);
        Ok(())
    }
}
