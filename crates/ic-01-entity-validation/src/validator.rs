//! # Entity Validator
//!
//! Decode raw bytes into the entity implied by a kind (or by the embedded
//! `type` discriminator for polymorphic payloads), then run the structural
//! rules. Every failure is an `InvalidRequest`; nothing here has side
//! effects.

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared_types::{InterchainError, InterchainResult};
use tracing::debug;

use crate::domain::{DomainEntity, EntityKind, Validate};

/// Payload shape expected on a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schema {
    /// Exactly one entity kind.
    Entity(EntityKind),
    /// One of several kinds, selected by the `type` discriminator.
    Tagged(&'static [EntityKind]),
}

impl Schema {
    /// Decode and validate `bytes` against this schema.
    pub fn validate(&self, bytes: &[u8]) -> InterchainResult<DomainEntity> {
        match self {
            Schema::Entity(kind) => validate(*kind, bytes),
            Schema::Tagged(allowed) => validate_tagged(bytes, allowed),
        }
    }
}

/// Parse bytes as a top-level JSON object. Arrays and scalars never decode
/// into a record, even though serde would accept an array positionally.
fn json_object(bytes: &[u8]) -> Result<Value, String> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
    if !value.is_object() {
        return Err("top-level value is not an object".into());
    }
    Ok(value)
}

/// Decode a single record, mapping failures to `invalid <label> format`.
pub fn decode<T: DeserializeOwned>(kind: EntityKind, bytes: &[u8]) -> InterchainResult<T> {
    json_object(bytes)
        .and_then(|value| serde_json::from_value(value).map_err(|e| e.to_string()))
        .map_err(|e| {
            debug!("[ic-01] {} decode failed: {}", kind, e);
            InterchainError::invalid(format!("invalid {} format", kind.label()))
        })
}

/// Decode bytes into the [`DomainEntity`] variant for `kind`, without
/// running structural rules.
pub fn decode_entity(kind: EntityKind, bytes: &[u8]) -> InterchainResult<DomainEntity> {
    Ok(match kind {
        EntityKind::Product => DomainEntity::Product(decode(kind, bytes)?),
        EntityKind::Order => DomainEntity::Order(decode(kind, bytes)?),
        EntityKind::FinancialTransaction => {
            DomainEntity::FinancialTransaction(decode(kind, bytes)?)
        }
        EntityKind::Regulation => DomainEntity::Regulation(decode(kind, bytes)?),
        EntityKind::Permit => DomainEntity::Permit(decode(kind, bytes)?),
        EntityKind::Document => DomainEntity::Document(decode(kind, bytes)?),
        EntityKind::Compliance => DomainEntity::Compliance(decode(kind, bytes)?),
        EntityKind::MedicalRecord => DomainEntity::MedicalRecord(decode(kind, bytes)?),
        EntityKind::Policy => DomainEntity::Policy(decode(kind, bytes)?),
        EntityKind::Claim => DomainEntity::Claim(decode(kind, bytes)?),
        EntityKind::Property => DomainEntity::Property(decode(kind, bytes)?),
        EntityKind::Sale => DomainEntity::Sale(decode(kind, bytes)?),
    })
}

/// Decode and validate a payload of a known kind.
pub fn validate(kind: EntityKind, bytes: &[u8]) -> InterchainResult<DomainEntity> {
    let entity = decode_entity(kind, bytes)?;
    if let Err(err) = entity.validate() {
        debug!("[ic-01] {} rejected: {}", kind, err);
        return Err(err);
    }
    Ok(entity)
}

/// Read the `type` discriminator without decoding the rest of the payload.
pub fn peek_discriminator(bytes: &[u8]) -> InterchainResult<String> {
    let value = json_object(bytes).map_err(|_| InterchainError::invalid("invalid data format"))?;
    match value.get("type") {
        None | Some(Value::Null) => Err(InterchainError::invalid("data type is required")),
        Some(Value::String(kind)) if kind.is_empty() => {
            Err(InterchainError::invalid("data type is required"))
        }
        Some(Value::String(kind)) => Ok(kind.clone()),
        Some(_) => Err(InterchainError::invalid("invalid data format")),
    }
}

/// Two-step decode of a polymorphic payload: peek the discriminator, then
/// fully decode and validate the matching kind. Discriminators outside
/// `allowed` are rejected, never defaulted.
pub fn validate_tagged(bytes: &[u8], allowed: &[EntityKind]) -> InterchainResult<DomainEntity> {
    let tag = peek_discriminator(bytes)?;
    let kind = allowed
        .iter()
        .copied()
        .find(|kind| kind.tag() == tag)
        .ok_or_else(|| {
            debug!("[ic-01] unsupported data type: {}", tag);
            InterchainError::invalid("unsupported data type")
        })?;
    validate(kind, bytes)
}
