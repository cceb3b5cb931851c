//! # Reference Scenarios
//!
//! The five behaviours every deployment must reproduce, run end to end
//! through the registry.

#[cfg(test)]
mod tests {
    use serde_json::json as j;
    use shared_types::{ChainId, ErrorKind, InterchainError};

    use crate::integration::{json, Node};

    // =========================================================================
    // SCENARIO A: COMMERCE
    // =========================================================================

    #[test]
    fn test_scenario_a_new_order_without_items() {
        let node = Node::new();
        let commerce = node.registry.transactions(ChainId::Commerce).unwrap();
        let request = json(j!({
            "transaction_id": "T1",
            "transaction_type": "NEW_ORDER",
            "items": [],
            "total_amount": 100
        }));
        let err = commerce.initiate_json(&request).unwrap_err();
        assert_eq!(err, InterchainError::invalid("order must contain items"));
        assert_eq!(node.rec.count(), 0);
        assert!(node.registry.store().is_empty());
        assert!(node.registry.outbox().is_empty());
    }

    // =========================================================================
    // SCENARIO B: FINANCE
    // =========================================================================

    #[test]
    fn test_scenario_b_empty_from_address() {
        let node = Node::new();
        let finance = node.registry.contract(ChainId::Finance).unwrap();
        let payload = json(j!({
            "transaction_id": "F1",
            "from_address": "",
            "to_address": "B",
            "amount": 50
        }));
        let err = finance.validate_inbound(&payload).unwrap_err();
        assert_eq!(err, InterchainError::invalid("from and to addresses are required"));
        assert_eq!(node.rec.calls_to("finance.validate_compliance"), 0);
    }

    // =========================================================================
    // SCENARIO C: INSURANCE
    // =========================================================================

    #[test]
    fn test_scenario_c_negative_claim_from_healthcare() {
        let node = Node::new();
        let insurance = node.registry.contract(ChainId::Insurance).unwrap();
        let claim = json(j!({"claim_id": "CL-1", "policy_id": "POL-1", "amount": "-10"}));
        let err = insurance.route_inbound("healthcare", &claim).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        assert_eq!(err.reason(), Some("invalid claim amount"));
        assert_eq!(node.rec.calls_to("insurance.process_claim"), 0);
    }

    #[test]
    fn test_scenario_c_zero_claim_is_processed() {
        let node = Node::new();
        let insurance = node.registry.contract(ChainId::Insurance).unwrap();
        let claim = json(j!({"claim_id": "CL-2", "policy_id": "POL-1", "amount": 0}));
        insurance.route_inbound("healthcare", &claim).unwrap();
        assert_eq!(
            node.rec.capabilities(),
            vec!["insurance.validate_claim", "insurance.process_claim"]
        );
    }

    // =========================================================================
    // SCENARIO D: GOVERNMENT
    // =========================================================================

    #[test]
    fn test_scenario_d_unsupported_outbound_target() {
        let node = Node::new();
        let government = node.registry.contract(ChainId::Government).unwrap();
        let err = government
            .prepare_outbound("unsupported-chain", b"{\"regulation_id\":\"R1\"}")
            .unwrap_err();
        assert_eq!(err, InterchainError::UnsupportedRoute("unsupported-chain".into()));
        assert!(node.registry.outbox().is_empty());
    }

    // =========================================================================
    // SCENARIO E: RETAIL
    // =========================================================================

    #[test]
    fn test_scenario_e_foreign_transaction_type() {
        let node = Node::new();
        let retail = node.registry.transactions(ChainId::Retail).unwrap();
        let request = json(j!({"transaction_id": "R1", "transaction_type": "FILE_CLAIM"}));
        let err = retail.initiate_json(&request).unwrap_err();
        assert_eq!(err, InterchainError::invalid("unsupported transaction type"));
        assert!(retail.status("R1").is_err());
    }

    // =========================================================================
    // ERROR TAXONOMY
    // =========================================================================

    #[test]
    fn test_three_remediation_classes_are_distinct() {
        let node = Node::failing(&["commerce.process_order"]);
        let commerce = node.registry.service(ChainId::Commerce).unwrap();

        let invalid = commerce.contract().validate_inbound(b"not json").unwrap_err();
        let unsupported = commerce.contract().route_inbound("mars", b"{}").unwrap_err();
        let order = json(j!({
            "transaction_id": "T9",
            "transaction_type": "NEW_ORDER",
            "order_id": "O-9",
            "customer_id": "C-1",
            "items": [{"product_id": "P-1", "quantity": 1}],
            "total_amount": "10"
        }));
        let downstream = commerce.transactions().initiate_json(&order).unwrap_err();

        assert_eq!(invalid.kind(), ErrorKind::InvalidRequest);
        assert_eq!(unsupported.kind(), ErrorKind::UnsupportedRoute);
        assert_eq!(downstream.kind(), ErrorKind::Collaborator);
    }
}
