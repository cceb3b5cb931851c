//! # Journal Replay
//!
//! Multi-domain journals replayed the way `ic-node replay` does it.

#[cfg(test)]
mod tests {
    use ic_runtime::{JournalOutcome, JournalReplayer};
    use shared_types::ErrorKind;

    use crate::integration::Node;

    const JOURNAL: &str = r#"
# orders
{"domain":"ecommerce","op":"initiate","request":{"transaction_id":"T1","transaction_type":"NEW_ORDER","items":[],"total_amount":100}}
{"domain":"ecommerce","op":"initiate","request":{"transaction_id":"T2","transaction_type":"REFUND_ORDER","order_id":"O-2","customer_id":"C-2","total_amount":"15"}}
{"domain":"ecommerce","op":"update_status","transaction_id":"T2","status":"Completed"}
{"domain":"ecommerce","op":"finalize","transaction_id":"T2"}

# peers
{"domain":"finance","op":"validate_inbound","payload":{"transaction_id":"F1","from_address":"","to_address":"B","amount":50}}
{"domain":"insurance","op":"route_inbound","source":"healthcare","payload":{"claim_id":"CL-1","policy_id":"POL-1","amount":"-10"}}
{"domain":"government","op":"prepare_outbound","target":"unsupported-chain","data":{"regulation_id":"R1"}}
{"domain":"retail","op":"initiate","request":{"transaction_id":"R1","transaction_type":"FILE_CLAIM"}}
{"domain":"realestate","op":"handle_callback","source":"finance","response":"settled"}
{"domain":"pharmacy","op":"status","transaction_id":"T2"}
"#;

    fn replay(node: &Node, journal: &str) -> Vec<JournalOutcome> {
        let replayer = JournalReplayer::new(&node.registry);
        journal
            .lines()
            .enumerate()
            .filter_map(|(i, line)| replayer.replay_line(i + 1, line))
            .collect()
    }

    fn error_kind(outcome: &JournalOutcome) -> Option<ErrorKind> {
        outcome.error.as_ref().map(|error| error.kind)
    }

    #[test]
    fn test_mixed_journal() {
        let node = Node::new();
        let outcomes = replay(&node, JOURNAL);
        assert_eq!(outcomes.len(), 10);

        let summary: Vec<(&str, &str, bool)> = outcomes
            .iter()
            .map(|o| (o.domain.as_str(), o.op.as_str(), o.ok))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("ecommerce", "initiate", false),
                ("ecommerce", "initiate", true),
                ("ecommerce", "update_status", true),
                ("ecommerce", "finalize", true),
                ("finance", "validate_inbound", false),
                ("insurance", "route_inbound", false),
                ("government", "prepare_outbound", false),
                ("retail", "initiate", false),
                ("realestate", "handle_callback", true),
                ("pharmacy", "status", false),
            ]
        );

        assert_eq!(error_kind(&outcomes[0]), Some(ErrorKind::InvalidRequest));
        assert_eq!(error_kind(&outcomes[6]), Some(ErrorKind::UnsupportedRoute));
        assert_eq!(error_kind(&outcomes[9]), Some(ErrorKind::UnsupportedRoute));
        assert_eq!(outcomes[3].result.as_ref().unwrap()["state"], "Finalized");
        assert_eq!(node.rec.calls_to("insurance.process_claim"), 0);
        assert_eq!(node.registry.audit().len(), 1);
    }

    #[test]
    fn test_line_numbers_follow_source() {
        let node = Node::new();
        let outcomes = replay(&node, JOURNAL);
        assert_eq!(outcomes[0].line, 3);
        assert_eq!(outcomes[4].line, 9);
    }

    #[test]
    fn test_outcomes_serialize_without_empty_halves() {
        let node = Node::new();
        let outcomes = replay(
            &node,
            r#"{"domain":"ecommerce","op":"status","transaction_id":"missing"}"#,
        );
        let line = serde_json::to_value(&outcomes[0]).unwrap();
        assert!(line.get("result").is_none());
        assert_eq!(line["error"]["kind"], "not_found");
        assert_eq!(line["ok"], false);
    }
}
