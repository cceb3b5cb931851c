//! # Route Tables
//!
//! Per-domain, closed mapping from peer identity to handler. A domain
//! declares its table once; the router never accepts a peer that is not in
//! it.

use ic_01_entity_validation::{DomainEntity, Schema};
use shared_types::{ChainId, InterchainError, InterchainResult};
use std::collections::BTreeMap;
use tracing::debug;

/// Handles a validated inbound entity.
pub type InboundHandler<D> = fn(&D, DomainEntity) -> InterchainResult<()>;

/// Transforms outbound data for a specific target.
pub type OutboundPreparer<D> = fn(&D, ChainId, &[u8]) -> InterchainResult<Vec<u8>>;

/// Handles a callback response after it has been audited.
pub type CallbackHandler<D> = fn(&D, &[u8]) -> InterchainResult<()>;

/// Inbound route: expected payload shape plus handler.
pub struct InboundRoute<D> {
    /// Payload schema from this peer.
    pub schema: Schema,
    /// Handler run after the payload validates.
    pub handler: InboundHandler<D>,
}

/// Closed peer tables for one domain.
pub struct RouteTable<D> {
    inbound: BTreeMap<ChainId, InboundRoute<D>>,
    outbound: BTreeMap<ChainId, OutboundPreparer<D>>,
    callbacks: BTreeMap<ChainId, CallbackHandler<D>>,
}

impl<D> Default for RouteTable<D> {
    fn default() -> Self {
        Self {
            inbound: BTreeMap::new(),
            outbound: BTreeMap::new(),
            callbacks: BTreeMap::new(),
        }
    }
}

impl<D> RouteTable<D> {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an inbound route.
    #[must_use]
    pub fn inbound(mut self, peer: ChainId, schema: Schema, handler: InboundHandler<D>) -> Self {
        self.inbound.insert(peer, InboundRoute { schema, handler });
        self
    }

    /// Register an outbound route.
    #[must_use]
    pub fn outbound(mut self, peer: ChainId, preparer: OutboundPreparer<D>) -> Self {
        self.outbound.insert(peer, preparer);
        self
    }

    /// Register a callback route.
    #[must_use]
    pub fn callback(mut self, peer: ChainId, handler: CallbackHandler<D>) -> Self {
        self.callbacks.insert(peer, handler);
        self
    }

    /// Resolve an inbound source.
    pub fn resolve_inbound(&self, raw: &str) -> InterchainResult<(ChainId, &InboundRoute<D>)> {
        resolve(&self.inbound, raw)
    }

    /// Resolve an outbound target.
    pub fn resolve_outbound(&self, raw: &str) -> InterchainResult<(ChainId, OutboundPreparer<D>)> {
        resolve(&self.outbound, raw).map(|(peer, preparer)| (peer, *preparer))
    }

    /// Resolve a callback source.
    pub fn resolve_callback(&self, raw: &str) -> InterchainResult<(ChainId, CallbackHandler<D>)> {
        resolve(&self.callbacks, raw).map(|(peer, handler)| (peer, *handler))
    }

    /// Every peer appearing in any direction, sorted.
    pub fn peers(&self) -> Vec<ChainId> {
        let mut peers: Vec<ChainId> = self
            .inbound
            .keys()
            .chain(self.outbound.keys())
            .chain(self.callbacks.keys())
            .copied()
            .collect();
        peers.sort();
        peers.dedup();
        peers
    }
}

fn resolve<'a, V>(
    table: &'a BTreeMap<ChainId, V>,
    raw: &str,
) -> InterchainResult<(ChainId, &'a V)> {
    let unsupported = || InterchainError::UnsupportedRoute(raw.to_string());
    let peer: ChainId = raw.parse().map_err(|_| unsupported())?;
    table.get(&peer).map(|v| (peer, v)).ok_or_else(unsupported)
}

// =============================================================================
// Stock handlers
// =============================================================================

/// Outbound preparer that forwards bytes unchanged.
pub fn passthrough<D>(_domain: &D, _target: ChainId, data: &[u8]) -> InterchainResult<Vec<u8>> {
    Ok(data.to_vec())
}

/// Inbound handler that accepts a validated entity without further effect.
pub fn accept<D>(_domain: &D, entity: DomainEntity) -> InterchainResult<()> {
    debug!("[ic-02] accepted {} {}", entity.kind(), entity.id());
    Ok(())
}

/// Callback handler that acknowledges an audited response.
pub fn acknowledge<D>(_domain: &D, response: &[u8]) -> InterchainResult<()> {
    debug!("[ic-02] callback acknowledged ({} bytes)", response.len());
    Ok(())
}
