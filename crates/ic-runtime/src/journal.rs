//! # Operation Journal
//!
//! JSON-lines replay of interchain operations against a [`DomainRegistry`].
//!
//! One entry per line, addressed to a hosted domain:
//!
//! ```text
//! {"domain":"insurance","op":"route_inbound","source":"healthcare","payload":{"claim_id":"C1","policy_id":"P1","amount":"10"}}
//! {"domain":"ecommerce","op":"initiate","request":{"transaction_id":"T1","transaction_type":"CANCEL_ORDER","order_id":"O1"}}
//! {"domain":"ecommerce","op":"update_status","transaction_id":"T1","status":"Completed"}
//! ```
//!
//! Payload fields holding a JSON string are passed through as raw bytes so
//! that undecodable input can be replayed too. Blank lines and lines
//! starting with `#` are skipped.

use ic_03_transaction_dispatch::TransactionState;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::{ErrorKind, InterchainError, InterchainResult};
use tracing::{debug, warn};

use crate::container::DomainRegistry;

/// One journal line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Routing key of the domain that executes the operation.
    pub domain: String,
    /// Operation and its arguments.
    #[serde(flatten)]
    pub operation: Operation,
}

/// Operations a journal can replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// `validateInbound`.
    ValidateInbound {
        /// Entity to validate.
        payload: Value,
    },
    /// `routeInbound`.
    RouteInbound {
        /// Sending chain.
        source: String,
        /// Message body.
        payload: Value,
    },
    /// `prepareOutbound`.
    PrepareOutbound {
        /// Receiving chain.
        target: String,
        /// Data to prepare.
        data: Value,
    },
    /// `handleCallback`.
    HandleCallback {
        /// Responding chain.
        source: String,
        /// Response body.
        response: Value,
    },
    /// Start a transaction.
    Initiate {
        /// Transaction request.
        request: Value,
    },
    /// Record a transaction outcome.
    UpdateStatus {
        /// Transaction identifier.
        transaction_id: String,
        /// `Completed` or `Failed`.
        status: TransactionState,
    },
    /// Close a transaction.
    Finalize {
        /// Transaction identifier.
        transaction_id: String,
    },
    /// Query a transaction.
    Status {
        /// Transaction identifier.
        transaction_id: String,
    },
}

impl Operation {
    /// Wire name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ValidateInbound { .. } => "validate_inbound",
            Operation::RouteInbound { .. } => "route_inbound",
            Operation::PrepareOutbound { .. } => "prepare_outbound",
            Operation::HandleCallback { .. } => "handle_callback",
            Operation::Initiate { .. } => "initiate",
            Operation::UpdateStatus { .. } => "update_status",
            Operation::Finalize { .. } => "finalize",
            Operation::Status { .. } => "status",
        }
    }
}

/// Error half of a [`JournalOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Remediation class.
    pub kind: ErrorKind,
    /// Rendered error.
    pub message: String,
}

impl From<&InterchainError> for ErrorReport {
    fn from(err: &InterchainError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Result of replaying one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalOutcome {
    /// 1-based journal line.
    pub line: usize,
    /// Domain the entry addressed.
    pub domain: String,
    /// Operation name.
    pub op: String,
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Operation result on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Failure on error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

/// Replays journal entries against a registry.
pub struct JournalReplayer<'a> {
    registry: &'a DomainRegistry,
}

impl<'a> JournalReplayer<'a> {
    /// Replayer over `registry`.
    pub fn new(registry: &'a DomainRegistry) -> Self {
        Self { registry }
    }

    /// Replay one raw line. Returns `None` for blank and comment lines.
    pub fn replay_line(&self, line: usize, raw: &str) -> Option<JournalOutcome> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        let outcome = match serde_json::from_str::<JournalEntry>(trimmed) {
            Ok(entry) => self.execute(line, &entry),
            Err(e) => {
                let err = InterchainError::invalid(format!("invalid journal entry: {e}"));
                warn!("[journal] line {}: {}", line, err);
                JournalOutcome {
                    line,
                    domain: String::new(),
                    op: String::new(),
                    ok: false,
                    result: None,
                    error: Some(ErrorReport::from(&err)),
                }
            }
        };
        Some(outcome)
    }

    /// Execute a parsed entry.
    pub fn execute(&self, line: usize, entry: &JournalEntry) -> JournalOutcome {
        let op = entry.operation.name();
        let result = self.dispatch(entry);
        match &result {
            Ok(_) => debug!("[journal] line {}: {} {} ok", line, entry.domain, op),
            Err(err) => warn!("[journal] line {}: {} {} failed: {}", line, entry.domain, op, err),
        }
        JournalOutcome {
            line,
            domain: entry.domain.clone(),
            op: op.to_string(),
            ok: result.is_ok(),
            error: result.as_ref().err().map(ErrorReport::from),
            result: result.ok(),
        }
    }

    fn dispatch(&self, entry: &JournalEntry) -> InterchainResult<Value> {
        let service = self.registry.resolve(&entry.domain)?;
        let contract = service.contract();
        let transactions = service.transactions();
        match &entry.operation {
            Operation::ValidateInbound { payload } => {
                contract.validate_inbound(&bytes(payload)?)?;
                Ok(Value::Null)
            }
            Operation::RouteInbound { source, payload } => {
                contract.route_inbound(source, &bytes(payload)?)?;
                Ok(Value::Null)
            }
            Operation::PrepareOutbound { target, data } => {
                let prepared = contract.prepare_outbound(target, &bytes(data)?)?;
                Ok(serde_json::from_slice(&prepared).unwrap_or_else(|_| {
                    Value::String(String::from_utf8_lossy(&prepared).into_owned())
                }))
            }
            Operation::HandleCallback { source, response } => {
                contract.handle_callback(source, &bytes(response)?)?;
                Ok(Value::Null)
            }
            Operation::Initiate { request } => {
                to_value(&transactions.initiate_json(&bytes(request)?)?)
            }
            Operation::UpdateStatus {
                transaction_id,
                status,
            } => to_value(&transactions.update_status(transaction_id, *status)?),
            Operation::Finalize { transaction_id } => {
                to_value(&transactions.finalize(transaction_id)?)
            }
            Operation::Status { transaction_id } => to_value(&transactions.status(transaction_id)?),
        }
    }
}

fn bytes(value: &Value) -> InterchainResult<Vec<u8>> {
    match value {
        Value::String(raw) => Ok(raw.clone().into_bytes()),
        other => serde_json::to_vec(other)
            .map_err(|e| InterchainError::invalid(format!("failed to encode payload: {e}"))),
    }
}

fn to_value<T: Serialize>(value: &T) -> InterchainResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| InterchainError::invalid(format!("failed to encode result: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ic_04_domain_contracts::RecordingCollaborators;
    use std::sync::Arc;

    fn registry() -> DomainRegistry {
        DomainRegistry::in_memory(Arc::new(RecordingCollaborators::new())).unwrap()
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let registry = registry();
        let replayer = JournalReplayer::new(&registry);
        assert!(replayer.replay_line(1, "   ").is_none());
        assert!(replayer.replay_line(2, "# warm-up").is_none());
    }

    #[test]
    fn test_malformed_line_reported() {
        let registry = registry();
        let outcome = JournalReplayer::new(&registry)
            .replay_line(3, r#"{"domain":"finance","op":"teleport"}"#)
            .unwrap();
        assert!(!outcome.ok);
        assert_eq!(outcome.line, 3);
        assert_eq!(outcome.error.unwrap().kind, ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_unknown_domain_is_unsupported_route() {
        let registry = registry();
        let outcome = JournalReplayer::new(&registry)
            .replay_line(1, r#"{"domain":"pharmacy","op":"status","transaction_id":"X"}"#)
            .unwrap();
        assert_eq!(outcome.error.unwrap().kind, ErrorKind::UnsupportedRoute);
    }

    #[test]
    fn test_transaction_lifecycle() {
        let registry = registry();
        let replayer = JournalReplayer::new(&registry);
        let lines = [
            r#"{"domain":"ecommerce","op":"initiate","request":{"transaction_id":"T1","transaction_type":"REFUND_ORDER","order_id":"O1","customer_id":"C1","total_amount":"40"}}"#,
            r#"{"domain":"ecommerce","op":"update_status","transaction_id":"T1","status":"Completed"}"#,
            r#"{"domain":"ecommerce","op":"finalize","transaction_id":"T1"}"#,
            r#"{"domain":"ecommerce","op":"status","transaction_id":"T1"}"#,
        ];
        let outcomes: Vec<_> = lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| replayer.replay_line(i + 1, line))
            .collect();
        assert!(outcomes.iter().all(|o| o.ok), "{outcomes:?}");
        assert_eq!(outcomes[0].result.as_ref().unwrap()["state"], "Processing");
        assert_eq!(outcomes[1].result.as_ref().unwrap()["notified"][0], "finance");
        assert_eq!(outcomes[3].result.as_ref().unwrap()["state"], "Finalized");
    }

    #[test]
    fn test_raw_string_payload_passed_through() {
        let registry = registry();
        let outcome = JournalReplayer::new(&registry)
            .replay_line(1, r#"{"domain":"retail","op":"validate_inbound","payload":"not json"}"#)
            .unwrap();
        let error = outcome.error.unwrap();
        assert_eq!(error.kind, ErrorKind::InvalidRequest);
        assert!(error.message.contains("invalid sale format"));
    }

    #[test]
    fn test_prepare_outbound_result_is_json() {
        let registry = registry();
        let outcome = JournalReplayer::new(&registry)
            .replay_line(
                1,
                r#"{"domain":"realestate","op":"prepare_outbound","target":"government","data":{"property_id":"PR-1"}}"#,
            )
            .unwrap();
        assert_eq!(outcome.result.unwrap()["purpose"], "title_registration");
    }
}
