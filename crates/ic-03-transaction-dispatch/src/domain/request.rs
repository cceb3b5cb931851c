//! Transaction requests, closed type enumerations and status notices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{ChainId, InterchainError, InterchainResult};
use std::collections::BTreeMap;
use std::fmt;

use super::record::TransactionRecord;
use super::state::TransactionState;

// =============================================================================
// TRANSACTION KINDS
// =============================================================================

/// Closed enumeration of a domain's transaction types.
///
/// Anything outside [`TransactionKind::ALL`] is rejected before any domain
/// logic runs.
pub trait TransactionKind: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every supported type.
    const ALL: &'static [Self];

    /// Wire name (`NEW_ORDER`, `PAYMENT`, ...).
    fn as_str(&self) -> &'static str;

    /// Resolve a wire name, exact match only.
    fn parse(raw: &str) -> InterchainResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == raw)
            .ok_or_else(|| InterchainError::invalid("unsupported transaction type"))
    }

    /// Wire names of every supported type.
    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.as_str()).collect()
    }
}

/// Declare a transaction kind enum with its wire names.
///
/// ```ignore
/// transaction_kinds! {
///     /// Commerce types.
///     pub enum CommerceTransactionType {
///         NewOrder => "NEW_ORDER",
///         CancelOrder => "CANCEL_ORDER",
///     }
/// }
/// ```
#[macro_export]
macro_rules! transaction_kinds {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::TransactionKind for $name {
            const ALL: &'static [Self] = &[$( Self::$variant ),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::TransactionKind::as_str(self))
            }
        }
    };
}

// =============================================================================
// REQUESTS
// =============================================================================

/// Free-form request annotations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestMetadata {
    /// Operator notes.
    pub notes: String,
    /// External references.
    pub references: Vec<String>,
    /// Anything else.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A local transaction submitted to a domain.
///
/// `P` carries the domain's optional sub-records and is flattened into the
/// top-level JSON object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest<P> {
    /// Caller-supplied identifier.
    #[serde(default)]
    pub transaction_id: String,
    /// Wire name of the transaction type.
    #[serde(default, alias = "type", alias = "tx_type")]
    pub transaction_type: String,
    /// Domain sub-records.
    #[serde(flatten)]
    pub payload: P,
    /// Submission time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Annotations.
    #[serde(default)]
    pub metadata: RequestMetadata,
}

impl<P> TransactionRequest<P> {
    /// Request with the given id, type and payload.
    pub fn new(
        transaction_id: impl Into<String>,
        transaction_type: impl Into<String>,
        payload: P,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            transaction_type: transaction_type.into(),
            payload,
            timestamp: Some(Utc::now()),
            metadata: RequestMetadata::default(),
        }
    }
}

// =============================================================================
// STATUS
// =============================================================================

/// Sent to every engaged peer when a transaction's status changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusNotice {
    /// Transaction identifier.
    pub transaction_id: String,
    /// Originating domain.
    pub domain: ChainId,
    /// Transaction type wire name.
    pub transaction_type: String,
    /// New state.
    pub status: TransactionState,
    /// Time of the change.
    pub updated_at: DateTime<Utc>,
}

impl StatusNotice {
    /// Notice describing `record`'s current state.
    pub fn for_record(record: &TransactionRecord) -> Self {
        Self {
            transaction_id: record.transaction_id.clone(),
            domain: record.domain,
            transaction_type: record.transaction_type.clone(),
            status: record.state,
            updated_at: record.updated_at,
        }
    }
}

/// Outcome of a status update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Record after the update.
    pub record: TransactionRecord,
    /// Peers that accepted the notice.
    pub notified: Vec<ChainId>,
    /// Peers whose notification failed.
    pub unreachable: Vec<ChainId>,
}
