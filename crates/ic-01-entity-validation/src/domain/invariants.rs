//! # Domain Invariants
//!
//! Structural rules shared by every entity kind. Each helper returns the
//! caller-supplied reason as an `InvalidRequest` so that the first failing
//! rule is reported verbatim.

use shared_types::{Amount, InterchainError, InterchainResult};

/// Invariant: identifier is non-empty.
pub fn require_id(value: &str, reason: &str) -> InterchainResult<()> {
    if value.is_empty() {
        return Err(InterchainError::invalid(reason));
    }
    Ok(())
}

/// Invariant: a required amount is present and non-negative.
///
/// Zero is accepted.
pub fn require_amount(amount: Option<&Amount>, reason: &str) -> InterchainResult<()> {
    match amount {
        Some(value) if !value.is_negative() => Ok(()),
        _ => Err(InterchainError::invalid(reason)),
    }
}

/// Invariant: an optional amount, when present, is non-negative.
pub fn optional_amount(amount: Option<&Amount>, reason: &str) -> InterchainResult<()> {
    match amount {
        Some(value) if value.is_negative() => Err(InterchainError::invalid(reason)),
        _ => Ok(()),
    }
}

/// Invariant: a required collection is non-empty.
pub fn require_non_empty<T>(items: &[T], reason: &str) -> InterchainResult<()> {
    if items.is_empty() {
        return Err(InterchainError::invalid(reason));
    }
    Ok(())
}
