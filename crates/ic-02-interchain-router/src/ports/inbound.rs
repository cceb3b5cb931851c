//! # Inbound Ports
//!
//! The four-operation interchain contract every domain exposes, and the
//! trait a domain implements to plug its tables into the generic router.

use ic_01_entity_validation::DomainEntity;
use shared_types::{ChainId, InterchainResult};

use crate::domain::RouteTable;

/// Interchain contract - inbound port.
///
/// Peer identities arrive as raw strings; anything outside the domain's
/// closed table is `UnsupportedRoute` carrying the identity verbatim.
pub trait InterchainContract: Send + Sync {
    /// Domain served.
    fn chain(&self) -> ChainId;

    /// Peers known in any direction.
    fn peers(&self) -> Vec<ChainId>;

    /// Validate a payload of the domain's own entity kind(s).
    fn validate_inbound(&self, payload: &[u8]) -> InterchainResult<()>;

    /// Route a message arriving from `source`.
    fn route_inbound(&self, source: &str, message: &[u8]) -> InterchainResult<()>;

    /// Prepare bytes for `target`.
    fn prepare_outbound(&self, target: &str, data: &[u8]) -> InterchainResult<Vec<u8>>;

    /// Audit, then dispatch a callback from `source`.
    fn handle_callback(&self, source: &str, response: &[u8]) -> InterchainResult<()>;
}

/// Per-domain configuration of the generic router.
pub trait RoutingDomain: Send + Sync + Sized + 'static {
    /// Identity of this domain.
    const CHAIN: ChainId;

    /// Validate a payload of this domain's own kind(s), including any
    /// collaborator-side sub-validation.
    fn validate_inbound(&self, payload: &[u8]) -> InterchainResult<DomainEntity>;

    /// Closed peer tables.
    fn route_table() -> RouteTable<Self>;
}
