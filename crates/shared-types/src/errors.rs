//! # Error Types
//!
//! The error taxonomy every public interchain operation returns.
//!
//! Callers branch on [`ErrorKind`]: invalid input, an unsupported route or
//! type, a downstream collaborator failure, or a lifecycle error on a tracked
//! transaction.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result alias used across the interchain crates.
pub type InterchainResult<T> = Result<T, InterchainError>;

/// Opaque failure surfaced by a domain capability collaborator.
///
/// The core never inspects the message; it is propagated unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{capability}: {message}")]
pub struct CollaboratorError {
    /// Capability that failed (e.g. `order_processor.process_order`).
    pub capability: String,
    /// Message reported by the collaborator.
    pub message: String,
}

impl CollaboratorError {
    /// Create a collaborator error.
    pub fn new(capability: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            capability: capability.into(),
            message: message.into(),
        }
    }
}

/// Errors returned by routers, validators and dispatchers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterchainError {
    /// Malformed payload, missing required field, or out-of-range value.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Peer chain not in the domain's closed peer table.
    #[error("unsupported route: {0}")]
    UnsupportedRoute(String),

    /// Failure reported by a capability collaborator.
    #[error("collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),

    /// Transaction is not tracked.
    #[error("transaction not found: {0}")]
    NotFound(String),

    /// Illegal lifecycle transition.
    #[error("invalid state transition: {from} -> {to}")]
    InvalidState {
        /// Current state
        from: String,
        /// Attempted state
        to: String,
    },
}

impl InterchainError {
    /// Shorthand for [`InterchainError::InvalidRequest`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidRequest(reason.into())
    }

    /// Shorthand for a collaborator failure.
    pub fn collaborator(capability: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Collaborator(CollaboratorError::new(capability, message))
    }

    /// Remediation class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Self::UnsupportedRoute(_) => ErrorKind::UnsupportedRoute,
            Self::Collaborator(_) => ErrorKind::Collaborator,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidState { .. } => ErrorKind::InvalidState,
        }
    }

    /// Reason carried by an `InvalidRequest`, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::InvalidRequest(reason) => Some(reason),
            _ => None,
        }
    }

    /// The error without its class prefix, as recorded on a failed
    /// transaction.
    pub fn detail(&self) -> String {
        match self {
            Self::InvalidRequest(reason) => reason.clone(),
            Self::UnsupportedRoute(identity) | Self::NotFound(identity) => identity.clone(),
            Self::Collaborator(inner) => inner.to_string(),
            Self::InvalidState { from, to } => format!("{from} -> {to}"),
        }
    }
}

/// Stable classification of [`InterchainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Input was invalid.
    InvalidRequest,
    /// Route or type not supported.
    UnsupportedRoute,
    /// Downstream processing failed.
    Collaborator,
    /// Unknown transaction.
    NotFound,
    /// Illegal transition.
    InvalidState,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InvalidRequest => "invalid_request",
            Self::UnsupportedRoute => "unsupported_route",
            Self::Collaborator => "collaborator",
            Self::NotFound => "not_found",
            Self::InvalidState => "invalid_state",
        };
        f.write_str(s)
    }
}
