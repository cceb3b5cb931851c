//! # Chain Identities
//!
//! The closed set of routing keys exchanged between domain chains.
//!
//! Keys are lowercase ASCII and are used identically for inbound source
//! lookup and outbound target lookup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::InterchainError;

/// Known domain chains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainId {
    /// E-commerce orders and catalog.
    #[serde(rename = "ecommerce")]
    Commerce,
    /// Payments and transfers.
    Finance,
    /// Regulations, permits and public documents.
    Government,
    /// Medical records.
    Healthcare,
    /// Policies and claims.
    Insurance,
    /// Property registry.
    #[serde(rename = "realestate")]
    RealEstate,
    /// Point-of-sale.
    Retail,
    /// Logistics and inventory (peer only).
    #[serde(rename = "supplychain")]
    SupplyChain,
    /// Prescription fulfillment (peer only).
    Pharmacy,
    /// Lab results (peer only).
    Laboratory,
}

impl ChainId {
    /// Every known chain, in routing-key order.
    pub const ALL: [ChainId; 10] = [
        ChainId::Commerce,
        ChainId::Finance,
        ChainId::Government,
        ChainId::Healthcare,
        ChainId::Insurance,
        ChainId::RealEstate,
        ChainId::Retail,
        ChainId::SupplyChain,
        ChainId::Pharmacy,
        ChainId::Laboratory,
    ];

    /// The seven chains that host a domain contract.
    pub const DOMAINS: [ChainId; 7] = [
        ChainId::Commerce,
        ChainId::Finance,
        ChainId::Government,
        ChainId::Healthcare,
        ChainId::Insurance,
        ChainId::RealEstate,
        ChainId::Retail,
    ];

    /// Wire routing key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainId::Commerce => "ecommerce",
            ChainId::Finance => "finance",
            ChainId::Government => "government",
            ChainId::Healthcare => "healthcare",
            ChainId::Insurance => "insurance",
            ChainId::RealEstate => "realestate",
            ChainId::Retail => "retail",
            ChainId::SupplyChain => "supplychain",
            ChainId::Pharmacy => "pharmacy",
            ChainId::Laboratory => "laboratory",
        }
    }

    /// Human-readable chain name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ChainId::Commerce => "E-Commerce Chain",
            ChainId::Finance => "Finance Chain",
            ChainId::Government => "Government Chain",
            ChainId::Healthcare => "Healthcare Chain",
            ChainId::Insurance => "Insurance Chain",
            ChainId::RealEstate => "Real Estate Chain",
            ChainId::Retail => "Retail Chain",
            ChainId::SupplyChain => "Supply Chain",
            ChainId::Pharmacy => "Pharmacy Chain",
            ChainId::Laboratory => "Laboratory Chain",
        }
    }

    /// Whether a domain contract is hosted for this chain.
    pub fn hosts_domain(&self) -> bool {
        Self::DOMAINS.contains(self)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainId {
    type Err = InterchainError;

    /// Exact, case-sensitive match on the routing key. Anything else is an
    /// unsupported route carrying the raw identity.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|chain| chain.as_str() == s)
            .ok_or_else(|| InterchainError::UnsupportedRoute(s.to_string()))
    }
}
