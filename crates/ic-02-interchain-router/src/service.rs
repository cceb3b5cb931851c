//! # Interchain Router Service
//!
//! One generic router, configured per domain by a [`RoutingDomain`] table.
//!
//! Ordering guarantees:
//! - inbound payloads are validated against the peer's schema before the
//!   handler (and therefore any collaborator) runs
//! - callbacks are audited before route lookup and before the handler
//! - sealed domains seal after per-target preparation, so nothing leaves
//!   unsealed

use ic_01_entity_validation::DomainEntity;
use shared_types::{ChainId, InterchainResult, OutboundMessage};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{AuditEvent, RouteTable};
use crate::ports::{AuditSink, ConfidentialityTransform, InterchainContract, Outbox, RoutingDomain};

/// Generic router for domain `D`.
pub struct InterchainRouter<D: RoutingDomain> {
    domain: D,
    routes: RouteTable<D>,
    audit: Arc<dyn AuditSink>,
    outbox: Arc<dyn Outbox>,
    sealer: Option<Arc<dyn ConfidentialityTransform>>,
}

impl<D: RoutingDomain> InterchainRouter<D> {
    /// Build a router from the domain's own route table.
    pub fn new(domain: D, audit: Arc<dyn AuditSink>, outbox: Arc<dyn Outbox>) -> Self {
        Self {
            domain,
            routes: D::route_table(),
            audit,
            outbox,
            sealer: None,
        }
    }

    /// Seal every outbound payload with `sealer`.
    #[must_use]
    pub fn with_confidentiality(mut self, sealer: Arc<dyn ConfidentialityTransform>) -> Self {
        self.sealer = Some(sealer);
        self
    }

    /// The domain contract (collaborators).
    pub fn domain(&self) -> &D {
        &self.domain
    }

    /// Confidentiality transform, if this domain seals outbound data.
    pub fn confidentiality(&self) -> Option<&Arc<dyn ConfidentialityTransform>> {
        self.sealer.as_ref()
    }

    /// Validate a payload of the domain's own kind and return it decoded.
    pub fn validate_entity(&self, payload: &[u8]) -> InterchainResult<DomainEntity> {
        self.domain.validate_inbound(payload).map_err(|err| {
            warn!("[ic-02] {} rejected inbound payload: {}", D::CHAIN, err);
            err
        })
    }

    /// Route a message arriving from `source`.
    pub fn route_inbound(&self, source: &str, message: &[u8]) -> InterchainResult<()> {
        let (peer, route) = self.routes.resolve_inbound(source).map_err(|err| {
            warn!("[ic-02] {} <- {}: {}", D::CHAIN, source, err);
            err
        })?;
        let entity = route.schema.validate(message).map_err(|err| {
            warn!("[ic-02] {} <- {}: {}", D::CHAIN, peer, err);
            err
        })?;
        info!(
            "[ic-02] {} <- {}: routing {} {}",
            D::CHAIN,
            peer,
            entity.kind(),
            entity.id()
        );
        (route.handler)(&self.domain, entity)
    }

    /// Prepare bytes for `target`.
    pub fn prepare_outbound(&self, target: &str, data: &[u8]) -> InterchainResult<Vec<u8>> {
        let (peer, prepare) = self.routes.resolve_outbound(target).map_err(|err| {
            warn!("[ic-02] {} -> {}: {}", D::CHAIN, target, err);
            err
        })?;
        let prepared = prepare(&self.domain, peer, data)?;
        match &self.sealer {
            Some(sealer) => sealer.seal(&prepared),
            None => Ok(prepared),
        }
    }

    /// Audit a callback from `source`, then dispatch it.
    pub fn handle_callback(&self, source: &str, response: &[u8]) -> InterchainResult<()> {
        self.audit
            .record(AuditEvent::callback(D::CHAIN, source, response))
            .map_err(|err| {
                warn!("[ic-02] {} callback from {} not audited: {}", D::CHAIN, source, err);
                err
            })?;
        let (peer, handler) = self.routes.resolve_callback(source)?;
        info!("[ic-02] {} <- {}: callback", D::CHAIN, peer);
        handler(&self.domain, response)
    }

    /// Prepare `data` for `target` and queue it on the outbox.
    pub fn send(&self, target: ChainId, data: &[u8]) -> InterchainResult<OutboundMessage> {
        let payload = self.prepare_outbound(target.as_str(), data)?;
        let message = OutboundMessage::new(D::CHAIN, target, payload);
        self.outbox.send(message.clone())?;
        info!(
            "[ic-02] {} -> {}: sent (correlation={})",
            D::CHAIN,
            target,
            message.correlation_id
        );
        Ok(message)
    }
}

impl<D: RoutingDomain> InterchainContract for InterchainRouter<D> {
    fn chain(&self) -> ChainId {
        D::CHAIN
    }

    fn peers(&self) -> Vec<ChainId> {
        self.routes.peers()
    }

    fn validate_inbound(&self, payload: &[u8]) -> InterchainResult<()> {
        self.validate_entity(payload).map(|_| ())
    }

    fn route_inbound(&self, source: &str, message: &[u8]) -> InterchainResult<()> {
        InterchainRouter::route_inbound(self, source, message)
    }

    fn prepare_outbound(&self, target: &str, data: &[u8]) -> InterchainResult<Vec<u8>> {
        InterchainRouter::prepare_outbound(self, target, data)
    }

    fn handle_callback(&self, source: &str, response: &[u8]) -> InterchainResult<()> {
        InterchainRouter::handle_callback(self, source, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{DigestEnvelopeSealer, InMemoryAuditLog, InMemoryOutbox};
    use crate::domain::{acknowledge, passthrough};
    use ic_01_entity_validation::{validate, Claim, EntityKind, Schema};
    use parking_lot::Mutex;
    use shared_types::{Amount, InterchainError};

    // =========================================================================
    // TEST DOMAIN
    // =========================================================================

    /// Records handler calls together with the audit count seen at the time.
    struct Tracker {
        audit: Arc<InMemoryAuditLog>,
        calls: Mutex<Vec<(String, usize)>>,
    }

    impl Tracker {
        fn note(&self, what: &str) {
            self.calls.lock().push((what.to_string(), self.audit.len()));
        }
    }

    impl RoutingDomain for Tracker {
        const CHAIN: ChainId = ChainId::Insurance;

        fn validate_inbound(&self, payload: &[u8]) -> InterchainResult<DomainEntity> {
            validate(EntityKind::Claim, payload)
        }

        fn route_table() -> RouteTable<Self> {
            RouteTable::new()
                .inbound(
                    ChainId::Healthcare,
                    Schema::Entity(EntityKind::Claim),
                    Self::process_claim,
                )
                .outbound(ChainId::Healthcare, passthrough)
                .outbound(ChainId::Finance, Self::label)
                .callback(ChainId::Healthcare, Self::on_callback)
                .callback(ChainId::Finance, acknowledge)
        }
    }

    impl Tracker {
        fn process_claim(&self, entity: DomainEntity) -> InterchainResult<()> {
            let claim = Claim::try_from(entity)?;
            self.note(&format!("process_claim:{}", claim.claim_id));
            Ok(())
        }

        fn label(&self, target: ChainId, data: &[u8]) -> InterchainResult<Vec<u8>> {
            let mut out = format!("{}:", target).into_bytes();
            out.extend_from_slice(data);
            Ok(out)
        }

        fn on_callback(&self, _response: &[u8]) -> InterchainResult<()> {
            self.note("callback");
            Ok(())
        }
    }

    fn router_with(
        audit: Arc<InMemoryAuditLog>) -> (InterchainRouter<Tracker>, Arc<InMemoryOutbox>,
    ) {
        let outbox = Arc::new(InMemoryOutbox::new());
        let tracker = Tracker {
            audit: audit.clone(),
            calls: Mutex::new(Vec::new()),
        };
        (InterchainRouter::new(tracker, audit, outbox.clone()), outbox)
    }

    fn router() -> (InterchainRouter<Tracker>, Arc<InMemoryOutbox>) {
        router_with(Arc::new(InMemoryAuditLog::default()))
    }

    fn claim(amount: i64) -> Vec<u8> {
        serde_json::to_vec(&Claim {
            claim_id: "CL-1".into(),
            policy_id: "POL-1".into(),
            amount: Some(Amount::from_i64(amount)),
            ..Default::default()
        })
        .unwrap()
    }

    // =========================================================================
    // INBOUND
    // =========================================================================

    #[test]
    fn test_route_inbound_runs_handler() {
        let (router, _) = router();
        router.route_inbound("healthcare", &claim(10)).unwrap();
        assert_eq!(router.domain().calls.lock()[0].0, "process_claim:CL-1");
    }

    #[test]
    fn test_invalid_payload_never_reaches_handler() {
        let (router, _) = router();
        let err = router.route_inbound("healthcare", &claim(-10)).unwrap_err();
        assert_eq!(err.reason(), Some("invalid claim amount"));
        assert!(router.domain().calls.lock().is_empty());
    }

    #[test]
    fn test_unknown_source_unsupported() {
        let (router, _) = router();
        for source in ["unknown-chain", "retail", ""] {
            let err = router.route_inbound(source, &claim(10)).unwrap_err();
            assert_eq!(err, InterchainError::UnsupportedRoute(source.to_string()));
        }
        assert!(router.domain().calls.lock().is_empty());
    }

    #[test]
    fn test_validate_inbound_contract() {
        let (router, _) = router();
        let contract: &dyn InterchainContract = &router;
        assert!(contract.validate_inbound(&claim(0)).is_ok());
        assert!(contract.validate_inbound(&claim(-1)).is_err());
        assert_eq!(contract.chain(), ChainId::Insurance);
        assert_eq!(contract.peers(), vec![ChainId::Finance, ChainId::Healthcare]);
    }

    // =========================================================================
    // OUTBOUND
    // =========================================================================

    #[test]
    fn test_prepare_outbound_per_target() {
        let (router, _) = router();
        assert_eq!(router.prepare_outbound("healthcare", b"x").unwrap(), b"x");
        assert_eq!(router.prepare_outbound("finance", b"x").unwrap(), b"finance:x");
        let err = router.prepare_outbound("unsupported-chain", b"x").unwrap_err();
        assert_eq!(err, InterchainError::UnsupportedRoute("unsupported-chain".into()));
    }

    #[test]
    fn test_sealed_domain_seals_after_preparation() {
        let (router, _) = router();
        let router = router.with_confidentiality(Arc::new(DigestEnvelopeSealer));
        let sealed = router.prepare_outbound("finance", b"secret").unwrap();
        assert!(!String::from_utf8_lossy(&sealed).contains("secret"));
        let opened = router.confidentiality().unwrap().open(&sealed).unwrap();
        assert_eq!(opened, b"finance:secret");
    }

    #[test]
    fn test_send_queues_on_outbox() {
        let (router, outbox) = router();
        let message = router.send(ChainId::Finance, b"pay").unwrap();
        assert_eq!(message.source, ChainId::Insurance);
        assert_eq!(outbox.sent_to(ChainId::Finance)[0].payload, b"finance:pay");
        assert!(router.send(ChainId::Retail, b"pay").is_err());
        assert_eq!(outbox.len(), 1);
    }

    // =========================================================================
    // CALLBACKS
    // =========================================================================

    #[test]
    fn test_callback_audits_before_handler() {
        let (router, _) = router();
        router.handle_callback("healthcare", b"{\"ok\":true}").unwrap();
        let calls = router.domain().calls.lock().clone();
        assert_eq!(calls, vec![("callback".to_string(), 1)]);
    }

    #[test]
    fn test_callback_from_unknown_peer_is_audited_then_rejected() {
        let (router, _) = router();
        let err = router.handle_callback("unknown-chain", b"{}").unwrap_err();
        assert_eq!(err, InterchainError::UnsupportedRoute("unknown-chain".into()));
        assert_eq!(router.domain().audit.events()[0].peer, "unknown-chain");
    }

    #[test]
    fn test_audit_failure_aborts_callback() {
        let (router, _) = router_with(Arc::new(InMemoryAuditLog::failing()));
        let err = router.handle_callback("healthcare", b"{}").unwrap_err();
        assert!(matches!(err, InterchainError::Collaborator(_)));
        assert!(router.domain().calls.lock().is_empty());
    }
}
