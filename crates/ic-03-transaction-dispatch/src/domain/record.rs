//! Tracked transaction record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{ChainId, InterchainError, InterchainResult};

use super::state::TransactionState;

/// One entry in a record's state history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    /// State entered.
    pub state: TransactionState,
    /// When it was entered.
    pub at: DateTime<Utc>,
}

/// A transaction tracked by a domain dispatcher.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Caller-supplied identifier, unique per domain.
    pub transaction_id: String,
    /// Owning domain.
    pub domain: ChainId,
    /// Canonical transaction type name (`NEW_ORDER`, `PAYMENT`, ...).
    pub transaction_type: String,
    /// Current lifecycle state.
    pub state: TransactionState,
    /// Peers the processing branch sent messages to.
    pub engaged_peers: Vec<ChainId>,
    /// Reason recorded when processing failed.
    pub failure: Option<String>,
    /// Every state the record has entered, oldest first.
    pub history: Vec<StateChange>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last transition time.
    pub updated_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// New record in `Initiated`.
    pub fn new(transaction_id: impl Into<String>, domain: ChainId, transaction_type: &str) -> Self {
        let now = Utc::now();
        Self {
            transaction_id: transaction_id.into(),
            domain,
            transaction_type: transaction_type.to_string(),
            state: TransactionState::Initiated,
            engaged_peers: Vec::new(),
            failure: None,
            history: vec![StateChange {
                state: TransactionState::Initiated,
                at: now,
            }],
            created_at: now,
            updated_at: now,
        }
    }

    /// Move to `next`, rejecting transitions the state machine forbids.
    pub fn transition_to(&mut self, next: TransactionState) -> InterchainResult<()> {
        if !self.state.can_transition_to(next) {
            return Err(InterchainError::InvalidState {
                from: format!("{:?}", self.state),
                to: format!("{:?}", next),
            });
        }
        let now = Utc::now();
        self.state = next;
        self.updated_at = now;
        self.history.push(StateChange { state: next, at: now });
        Ok(())
    }

    /// Mark the record failed with `reason`.
    pub fn fail(&mut self, reason: impl Into<String>) -> InterchainResult<()> {
        self.transition_to(TransactionState::Failed)?;
        self.failure = Some(reason.into());
        Ok(())
    }

    /// States visited, oldest first.
    pub fn states(&self) -> Vec<TransactionState> {
        self.history.iter().map(|change| change.state).collect()
    }
}
