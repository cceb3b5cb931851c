//! # Real Estate Entities

use serde::{Deserialize, Serialize};
use shared_types::{Amount, InterchainResult};

use super::invariants::{require_amount, require_id};
use super::Validate;

/// A registered property.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    /// Property identifier.
    pub property_id: String,
    /// Postal address.
    pub address: String,
    /// Current owner's chain address.
    pub owner_address: String,
    /// Listed price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Amount>,
    /// Floor area in square metres.
    pub size: f64,
    /// Category (residential, commercial, ...).
    pub property_type: String,
    /// Registry status.
    pub status: String,
    /// Hash of the title deed.
    pub document_hash: String,
    /// Last modification, Unix seconds.
    pub last_modified: i64,
}

impl Validate for Property {
    fn validate(&self) -> InterchainResult<()> {
        require_id(&self.property_id, "property ID is required")?;
        require_id(&self.address, "address is required")?;
        require_id(&self.owner_address, "owner address is required")?;
        require_amount(self.price.as_ref(), "invalid price")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_rules() {
        let mut property = Property {
            property_id: "PR-1".into(),
            address: "1 Main St".into(),
            owner_address: "owner1".into(),
            price: Some(Amount::from(250_000)),
            size: 120.5,
            ..Default::default()
        };
        assert!(property.validate().is_ok());
        property.owner_address.clear();
        assert_eq!(property.validate().unwrap_err().reason(), Some("owner address is required"));
        property.owner_address = "owner1".into();
        property.price = None;
        assert_eq!(property.validate().unwrap_err().reason(), Some("invalid price"));
    }
}
