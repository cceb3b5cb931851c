//! # Transaction Lifecycle
//!
//! Initiate, outcome, notification and finalization across domains sharing
//! one transaction store.

#[cfg(test)]
mod tests {
    use ic_03_transaction_dispatch::TransactionState;
    use ic_04_domain_contracts::RecordingCollaborators;
    use ic_runtime::NodeConfig;
    use serde_json::json as j;
    use shared_types::{ChainId, ErrorKind, InterchainError};

    use crate::integration::{json, Node};

    fn refund(id: &str) -> Vec<u8> {
        json(j!({
            "transaction_id": id,
            "transaction_type": "REFUND_ORDER",
            "order_id": "O-1",
            "customer_id": "C-1",
            "total_amount": "40"
        }))
    }

    fn new_order(id: &str) -> Vec<u8> {
        json(j!({
            "transaction_id": id,
            "transaction_type": "NEW_ORDER",
            "order_id": "O-2",
            "customer_id": "C-1",
            "items": [{"product_id": "P-1", "quantity": 2, "unit_price": "5"}],
            "total_amount": "10"
        }))
    }

    // =========================================================================
    // HAPPY PATH
    // =========================================================================

    #[test]
    fn test_refund_notifies_finance_then_finalizes() {
        let node = Node::new();
        let commerce = node.registry.transactions(ChainId::Commerce).unwrap();

        let record = commerce.initiate_json(&refund("T1")).unwrap();
        assert_eq!(record.state, TransactionState::Processing);
        assert_eq!(record.engaged_peers, vec![ChainId::Finance]);
        assert_eq!(node.registry.outbox().sent_to(ChainId::Finance).len(), 1);

        let report = commerce.update_status("T1", TransactionState::Completed).unwrap();
        assert_eq!(report.notified, vec![ChainId::Finance]);
        assert!(report.unreachable.is_empty());
        assert_eq!(node.registry.outbox().sent_to(ChainId::Finance).len(), 2);

        let record = commerce.finalize("T1").unwrap();
        assert_eq!(
            record.states(),
            vec![
                TransactionState::Initiated,
                TransactionState::Validated,
                TransactionState::Processing,
                TransactionState::Completed,
                TransactionState::Finalized,
            ]
        );

        let err = commerce.finalize("T1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        let err = commerce.update_status("T1", TransactionState::Failed).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_notice_carries_domain_and_status() {
        let node = Node::new();
        let commerce = node.registry.transactions(ChainId::Commerce).unwrap();
        commerce.initiate_json(&refund("T2")).unwrap();
        commerce.update_status("T2", TransactionState::Failed).unwrap();

        let sent = node.registry.outbox().sent_to(ChainId::Finance);
        let notice: serde_json::Value = serde_json::from_slice(&sent[1].payload).unwrap();
        assert_eq!(notice["transaction_id"], "T2");
        assert_eq!(notice["domain"], "ecommerce");
        assert_eq!(notice["transaction_type"], "REFUND_ORDER");
        assert_eq!(notice["status"], "Failed");
    }

    #[test]
    fn test_only_outcomes_accepted_as_status() {
        let node = Node::new();
        let commerce = node.registry.transactions(ChainId::Commerce).unwrap();
        commerce.initiate_json(&new_order("T3")).unwrap();

        let err = commerce
            .update_status("T3", TransactionState::Validated)
            .unwrap_err();
        assert_eq!(
            err,
            InterchainError::InvalidState {
                from: "Processing".into(),
                to: "Validated".into(),
            }
        );
        let err = commerce.finalize("T3").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(commerce.status("T3").unwrap().state, TransactionState::Processing);
    }

    // =========================================================================
    // FAILURES
    // =========================================================================

    #[test]
    fn test_collaborator_failure_leaves_failed_record() {
        let node = Node::failing(&["commerce.process_order"]);
        let commerce = node.registry.transactions(ChainId::Commerce).unwrap();

        let err = commerce.initiate_json(&new_order("T4")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Collaborator);

        let record = commerce.status("T4").unwrap();
        assert_eq!(record.state, TransactionState::Failed);
        assert!(record.failure.is_some());
        assert_eq!(commerce.finalize("T4").unwrap().state, TransactionState::Finalized);
    }

    #[test]
    fn test_duplicate_id_rejected_within_domain() {
        let node = Node::new();
        let commerce = node.registry.transactions(ChainId::Commerce).unwrap();
        commerce.initiate_json(&new_order("T5")).unwrap();
        let err = commerce.initiate_json(&new_order("T5")).unwrap_err();
        assert_eq!(err, InterchainError::invalid("transaction ID already exists"));
        assert_eq!(node.rec.calls_to("commerce.process_order"), 1);
    }

    #[test]
    fn test_same_id_allowed_in_two_domains() {
        let node = Node::new();
        node.registry
            .transactions(ChainId::Commerce)
            .unwrap()
            .initiate_json(&new_order("SHARED"))
            .unwrap();
        let request = json(j!({
            "transaction_id": "SHARED",
            "transaction_type": "SALE",
            "sale_data": {
                "sale_id": "S-1",
                "customer_id": "C-1",
                "items": [{"product_id": "P-1", "quantity": 1}]
            }
        }));
        node.registry
            .transactions(ChainId::Retail)
            .unwrap()
            .initiate_json(&request)
            .unwrap();
        assert_eq!(node.registry.store().len(), 2);
        assert_eq!(node.registry.store().records_for(ChainId::Retail).len(), 1);
    }

    #[test]
    fn test_store_capacity_exhausted() {
        let mut config = NodeConfig::default();
        config.store.max_tracked_transactions = 1;
        let node = Node::with(RecordingCollaborators::new(), config);
        let commerce = node.registry.transactions(ChainId::Commerce).unwrap();

        commerce.initiate_json(&new_order("T6")).unwrap();
        let err = commerce.initiate_json(&new_order("T7")).unwrap_err();
        assert_eq!(
            err,
            InterchainError::collaborator("transaction_store", "capacity exhausted")
        );

        commerce.update_status("T6", TransactionState::Completed).unwrap();
        commerce.finalize("T6").unwrap();
        commerce.initiate_json(&new_order("T7")).unwrap();
        assert!(commerce.status("T6").is_err());
        assert_eq!(node.registry.store().len(), 1);
    }

    #[test]
    fn test_missing_sub_record_makes_no_calls() {
        let node = Node::new();
        let cases = [
            (ChainId::Government, "NEW_REGULATION", "regulation data is required"),
            (ChainId::Government, "REVOKE_PERMIT", "permit data is required"),
            (ChainId::Insurance, "FILE_CLAIM", "claim data is required"),
            (ChainId::Insurance, "NEW_POLICY", "policy data is required"),
            (ChainId::Retail, "SALE", "sale data is required"),
            (ChainId::Retail, "UPDATE_INVENTORY", "inventory data is required"),
            (ChainId::Retail, "UPDATE_LOYALTY", "loyalty data is required"),
        ];
        for (chain, kind, reason) in cases {
            let request = json(j!({"transaction_id": "X1", "transaction_type": kind}));
            let err = node
                .registry
                .transactions(chain)
                .unwrap()
                .initiate_json(&request)
                .unwrap_err();
            assert_eq!(err.reason(), Some(reason), "{chain} {kind}");
        }
        assert_eq!(node.rec.count(), 0);
        assert!(node.registry.store().is_empty());
    }

    #[test]
    fn test_incomplete_entities_rejected_before_any_effect() {
        let node = Node::new();
        let cases = [
            (
                ChainId::Commerce,
                j!({
                    "transaction_id": "X2",
                    "transaction_type": "REFUND_ORDER",
                    "order_id": "O-1",
                    "total_amount": "40"
                }),
                "customer ID is required",
            ),
            (
                ChainId::Insurance,
                j!({
                    "transaction_id": "X3",
                    "transaction_type": "FILE_CLAIM",
                    "claim_data": {"claim_id": "CL-1", "amount": "90"}
                }),
                "policy ID is required",
            ),
            (
                ChainId::Insurance,
                j!({
                    "transaction_id": "X4",
                    "transaction_type": "UPDATE_CLAIM",
                    "claim_data": {"claim_id": "CL-1", "status": "approved"}
                }),
                "policy ID is required",
            ),
        ];
        for (chain, request, reason) in cases {
            let err = node
                .registry
                .transactions(chain)
                .unwrap()
                .initiate_json(&json(request))
                .unwrap_err();
            assert_eq!(err.reason(), Some(reason), "{chain}");
        }
        assert_eq!(node.rec.count(), 0);
        assert!(node.registry.outbox().is_empty());
        assert!(node.registry.store().is_empty());
    }

    #[test]
    fn test_non_object_payloads_rejected_by_every_domain() {
        let node = Node::new();
        for chain in node.registry.chains() {
            let contract = node.registry.contract(chain).unwrap();
            for payload in [&b"[\"X1\", \"A\", \"B\"]"[..], b"\"X1\"", b"42", b"null"] {
                let err = contract.validate_inbound(payload).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::InvalidRequest, "{chain}");
            }
        }
        assert_eq!(node.rec.count(), 0);
    }

    #[test]
    fn test_unknown_transaction_not_found() {
        let node = Node::new();
        for chain in node.registry.chains() {
            let api = node.registry.transactions(chain).unwrap();
            assert_eq!(api.status("nope").unwrap_err(), InterchainError::NotFound("nope".into()));
        }
    }
}
