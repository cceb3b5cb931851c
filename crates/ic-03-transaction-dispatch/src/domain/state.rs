//! # Transaction State Machine
//!
//! ```text
//! Initiated -> Validated -> Processing -> { Completed | Failed } -> Finalized
//! ```
//!
//! `Processing -> Failed` is also taken directly when a collaborator fails
//! during the processing branch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use shared_types::InterchainError;

/// Lifecycle state of a tracked transaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionState {
    /// Request received.
    #[default]
    Initiated,
    /// Universal and type-conditional checks passed.
    Validated,
    /// Dispatched to its processing branch.
    Processing,
    /// Confirmed successful.
    Completed,
    /// Processing or confirmation failed.
    Failed,
    /// Closed; no further transitions.
    Finalized,
}

impl TransactionState {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: TransactionState) -> bool {
        match (self, next) {
            (Self::Initiated, Self::Validated) => true,
            (Self::Validated, Self::Processing) => true,
            (Self::Processing, Self::Completed) => true,
            (Self::Processing, Self::Failed) => true,
            (Self::Completed, Self::Finalized) => true,
            (Self::Failed, Self::Finalized) => true,
            _ => false,
        }
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finalized)
    }

    /// Outcome states accepted by a status update.
    pub fn is_outcome(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl fmt::Display for TransactionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for TransactionState {
    type Err = InterchainError;

    /// Case-insensitive state name (`completed`, `FAILED`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "initiated" => Ok(Self::Initiated),
            "validated" => Ok(Self::Validated),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            "finalized" => Ok(Self::Finalized),
            _ => Err(InterchainError::invalid(format!("unknown transaction status: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        use TransactionState::*;
        let path = [Initiated, Validated, Processing, Completed, Finalized];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{:?} -> {:?}", pair[0], pair[1]);
        }
        assert!(Processing.can_transition_to(Failed));
        assert!(Failed.can_transition_to(Finalized));
    }

    #[test]
    fn test_illegal_transitions() {
        use TransactionState::*;
        assert!(!Initiated.can_transition_to(Processing));
        assert!(!Validated.can_transition_to(Completed));
        assert!(!Processing.can_transition_to(Finalized));
        assert!(!Completed.can_transition_to(Failed));
        assert!(!Finalized.can_transition_to(Completed));
    }

    #[test]
    fn test_finalized_is_absorbing() {
        use TransactionState::*;
        for next in [Initiated, Validated, Processing, Completed, Failed, Finalized] {
            assert!(!Finalized.can_transition_to(next));
        }
        assert!(Finalized.is_terminal());
    }

    #[test]
    fn test_parse_status() {
        assert_eq!("COMPLETED".parse::<TransactionState>().unwrap(), TransactionState::Completed);
        assert_eq!("failed".parse::<TransactionState>().unwrap(), TransactionState::Failed);
        assert!("done".parse::<TransactionState>().is_err());
    }
}
