//! In-Memory Outbox Adapter
//!
//! Implements `Outbox` by queueing messages for the runtime to drain.
//! The queue is bounded; once full, the oldest undrained message is dropped.

use parking_lot::Mutex;
use shared_types::{ChainId, InterchainError, InterchainResult, OutboundMessage};
use std::collections::VecDeque;
use tracing::{debug, warn};

use crate::ports::Outbox;

/// Default number of undrained messages kept.
pub const DEFAULT_OUTBOX_CAPACITY: usize = 10_000;

/// Bounded queue of prepared outbound messages.
pub struct InMemoryOutbox {
    queue: Mutex<VecDeque<OutboundMessage>>,
    capacity: usize,
    should_fail: bool,
}

impl InMemoryOutbox {
    /// Empty outbox with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_OUTBOX_CAPACITY)
    }

    /// Empty outbox holding at most `capacity` undrained messages.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            capacity: capacity.max(1),
            should_fail: false,
        }
    }

    /// Outbox that refuses every message.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::with_capacity(1)
        }
    }

    /// Remove and return everything queued, oldest first.
    pub fn drain(&self) -> Vec<OutboundMessage> {
        self.queue.lock().drain(..).collect()
    }

    /// Snapshot of messages queued for `target`.
    pub fn sent_to(&self, target: ChainId) -> Vec<OutboundMessage> {
        self.queue
            .lock()
            .iter()
            .filter(|m| m.target == target)
            .cloned()
            .collect()
    }

    /// Number of queued messages.
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}

impl Default for InMemoryOutbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Outbox for InMemoryOutbox {
    fn send(&self, message: OutboundMessage) -> InterchainResult<()> {
        if self.should_fail {
            return Err(InterchainError::collaborator("outbox", "delivery queue unavailable"));
        }
        debug!(
            "[ic-02] queued {} -> {} ({} bytes, correlation={})",
            message.source,
            message.target,
            message.payload.len(),
            message.correlation_id
        );
        let mut queue = self.queue.lock();
        if queue.len() == self.capacity {
            if let Some(dropped) = queue.pop_front() {
                warn!(
                    "[ic-02] outbox full ({}), dropped {} -> {} correlation={}",
                    self.capacity, dropped.source, dropped.target, dropped.correlation_id
                );
            }
        }
        queue.push_back(message);
        Ok(())
    }
}
