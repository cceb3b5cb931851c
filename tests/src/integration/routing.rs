//! # Cross-Domain Routing
//!
//! Route tables, callback auditing and sealing as seen through the
//! registry.

#[cfg(test)]
mod tests {
    use ic_02_interchain_router::{digest_hex, ConfidentialityTransform, DigestEnvelopeSealer};
    use ic_03_transaction_dispatch::TransactionState;
    use proptest::prelude::*;
    use serde_json::json as j;
    use shared_types::{ChainId, ErrorKind, InterchainError};

    use crate::integration::{json, Node};

    // =========================================================================
    // ROUTE TABLES
    // =========================================================================

    #[test]
    fn test_peers_are_hosted_or_external_chains() {
        let node = Node::new();
        for chain in node.registry.chains() {
            let contract = node.registry.contract(chain).unwrap();
            assert_eq!(contract.chain(), chain);
            let peers = contract.peers();
            assert_eq!(peers.len(), 3, "{chain}");
            assert!(!peers.contains(&chain));
        }
    }

    #[test]
    fn test_every_peer_accepts_outbound() {
        let node = Node::new();
        for chain in node.registry.chains() {
            let contract = node.registry.contract(chain).unwrap();
            for peer in contract.peers() {
                contract
                    .prepare_outbound(peer.as_str(), br#"{"id":"1"}"#)
                    .unwrap_or_else(|err| panic!("{chain} -> {peer}: {err}"));
            }
        }
    }

    #[test]
    fn test_hosted_chain_not_a_peer_is_unsupported() {
        let node = Node::new();
        let finance = node.registry.contract(ChainId::Finance).unwrap();
        let err = finance.route_inbound("ecommerce", b"{}").unwrap_err();
        assert_eq!(err, InterchainError::UnsupportedRoute("ecommerce".into()));
    }

    proptest! {
        #[test]
        fn prop_unknown_chain_unsupported_everywhere(key in "[a-z]{1,12}") {
            prop_assume!(key.parse::<ChainId>().is_err());
            let node = Node::new();
            for chain in node.registry.chains() {
                let contract = node.registry.contract(chain).unwrap();
                let expected = InterchainError::UnsupportedRoute(key.clone());
                prop_assert_eq!(contract.route_inbound(&key, b"{}").unwrap_err(), expected.clone());
                prop_assert_eq!(contract.prepare_outbound(&key, b"{}").unwrap_err(), expected);
            }
            prop_assert_eq!(node.rec.count(), 0);
        }
    }

    // =========================================================================
    // CALLBACKS
    // =========================================================================

    #[test]
    fn test_callbacks_audited_even_when_rejected() {
        let node = Node::new();
        let retail = node.registry.contract(ChainId::Retail).unwrap();
        retail.handle_callback("finance", b"{\"ack\":true}").unwrap();
        let err = retail.handle_callback("atlantis", b"{\"ack\":false}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedRoute);

        let events = node.registry.audit().events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].domain, ChainId::Retail);
        assert_eq!(events[0].peer, "finance");
        assert_eq!(events[1].peer, "atlantis");
        assert_eq!(events[1].payload_digest, digest_hex(b"{\"ack\":false}"));
        assert_eq!(events[1].payload_len, 13);
    }

    #[test]
    fn test_audit_log_shared_across_domains() {
        let node = Node::new();
        for chain in node.registry.chains() {
            let contract = node.registry.contract(chain).unwrap();
            let peer = contract.peers()[0];
            contract.handle_callback(peer.as_str(), b"ok").unwrap();
        }
        assert_eq!(node.registry.audit().len(), node.registry.chains().len());
    }

    // =========================================================================
    // SEALING
    // =========================================================================

    #[test]
    fn test_healthcare_notices_are_sealed() {
        let node = Node::new();
        let healthcare = node.registry.transactions(ChainId::Healthcare).unwrap();
        let request = json(j!({
            "transaction_id": "H1",
            "transaction_type": "PRESCRIPTION",
            "patient_id": "PAT-1",
            "provider_id": "DR-1",
            "data": "amoxicillin"
        }));
        healthcare.initiate_json(&request).unwrap();
        healthcare.update_status("H1", TransactionState::Completed).unwrap();

        let sent = node.registry.outbox().sent_to(ChainId::Pharmacy);
        assert_eq!(sent.len(), 2);
        for message in &sent {
            assert_eq!(message.source, ChainId::Healthcare);
            assert!(!String::from_utf8_lossy(&message.payload).contains("PAT-1"));
        }
        let notice = DigestEnvelopeSealer.open(&sent[1].payload).unwrap();
        let notice: serde_json::Value = serde_json::from_slice(&notice).unwrap();
        assert_eq!(notice["transaction_id"], "H1");
        assert_eq!(notice["status"], "Completed");
    }

    #[test]
    fn test_only_healthcare_seals() {
        let node = Node::new();
        let data = br#"{"id":"1"}"#;
        let finance = node.registry.contract(ChainId::Finance).unwrap();
        assert_eq!(finance.prepare_outbound("retail", data).unwrap(), data.to_vec());
        let healthcare = node.registry.contract(ChainId::Healthcare).unwrap();
        let sealed = healthcare.prepare_outbound("laboratory", data).unwrap();
        assert_ne!(sealed, data.to_vec());
        assert_eq!(DigestEnvelopeSealer.open(&sealed).unwrap(), data.to_vec());
    }

    // =========================================================================
    // POLYMORPHIC INBOUND
    // =========================================================================

    #[test]
    fn test_government_compliance_from_healthcare() {
        let node = Node::new();
        let government = node.registry.contract(ChainId::Government).unwrap();
        let submission = json(j!({
            "type": "compliance",
            "entity_id": "HOSP-1",
            "compliance_type": "privacy"
        }));
        government.route_inbound("healthcare", &submission).unwrap();
        assert_eq!(node.rec.calls_to("government.process_compliance"), 1);

        let untagged = json(j!({"entity_id": "HOSP-1", "compliance_type": "privacy"}));
        let err = government.route_inbound("healthcare", &untagged).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        assert_eq!(node.rec.calls_to("government.process_compliance"), 1);
    }

    #[test]
    fn test_refund_lands_in_finance_outbox_unchanged() {
        let node = Node::new();
        let request = json(j!({
            "transaction_id": "T1",
            "transaction_type": "REFUND_ORDER",
            "order_id": "O-1",
            "customer_id": "C-1",
            "total_amount": "40"
        }));
        node.registry
            .transactions(ChainId::Commerce)
            .unwrap()
            .initiate_json(&request)
            .unwrap();
        let sent = node.registry.outbox().sent_to(ChainId::Finance);
        let refund: serde_json::Value = serde_json::from_slice(&sent[0].payload).unwrap();
        assert_eq!(sent[0].source, ChainId::Commerce);
        assert_eq!(refund["transaction_id"], "T1");
    }
}
