//! # Interchain Routing Benchmarks
//!
//! | Group | Measures |
//! |-------|----------|
//! | ic-01-validation | Structural validation of tagged and untagged entities |
//! | ic-02-routing | Inbound routing and outbound preparation (plain and sealed) |
//! | ic-03-dispatch | Full initiate path including store and outbox |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ic_01_entity_validation::{validate, validate_tagged, EntityKind};
use ic_04_domain_contracts::RecordingCollaborators;
use ic_runtime::{DomainRegistry, NodeConfig};
use serde_json::json;
use shared_types::ChainId;
use std::sync::Arc;

fn registry() -> DomainRegistry {
    let mut config = NodeConfig::default();
    config.store.max_tracked_transactions = 1_000_000;
    match DomainRegistry::from_config(&config, Arc::new(RecordingCollaborators::new())) {
        Ok(registry) => registry,
        Err(err) => panic!("bench config rejected: {err}"),
    }
}

fn bytes(value: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&value).unwrap_or_default()
}

// ============================================================================
// IC-01: Entity Validation
// ============================================================================

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ic-01-validation");

    let claim = bytes(json!({"claim_id": "CL-1", "policy_id": "POL-1", "amount": "250"}));
    group.bench_function("claim", |b| {
        b.iter(|| black_box(validate(EntityKind::Claim, &claim).is_ok()))
    });

    let compliance = bytes(json!({
        "type": "compliance",
        "entity_id": "HOSP-1",
        "compliance_type": "privacy"
    }));
    let kinds = [EntityKind::Regulation, EntityKind::Compliance];
    group.bench_function("tagged_compliance", |b| {
        b.iter(|| black_box(validate_tagged(&compliance, &kinds).is_ok()))
    });

    for size in [1usize, 10, 100] {
        let items: Vec<_> = (0..size)
            .map(|i| json!({"product_id": format!("P-{i}"), "quantity": 1, "unit_price": "9.99"}))
            .collect();
        let order = bytes(json!({
            "order_id": "O-1",
            "customer_id": "C-1",
            "items": items,
            "total_amount": "100"
        }));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("order_items", size), &order, |b, order| {
            b.iter(|| black_box(validate(EntityKind::Order, order).is_ok()))
        });
    }

    group.finish();
}

// ============================================================================
// IC-02: Interchain Routing
// ============================================================================

fn bench_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("ic-02-routing");
    let registry = registry();

    let claim = bytes(json!({"claim_id": "CL-1", "policy_id": "POL-1", "amount": "250"}));
    if let Ok(insurance) = registry.contract(ChainId::Insurance) {
        group.bench_function("route_inbound_claim", |b| {
            b.iter(|| black_box(insurance.route_inbound("healthcare", &claim).is_ok()))
        });
        group.bench_function("route_inbound_unknown_peer", |b| {
            b.iter(|| black_box(insurance.route_inbound("atlantis", &claim).is_err()))
        });
    }

    let record = bytes(json!({"patient_id": "PAT-1", "notes": "x".repeat(1024)}));
    if let Ok(finance) = registry.contract(ChainId::Finance) {
        group.bench_function("prepare_outbound_plain", |b| {
            b.iter(|| black_box(finance.prepare_outbound("retail", &record).is_ok()))
        });
    }
    if let Ok(healthcare) = registry.contract(ChainId::Healthcare) {
        group.bench_function("prepare_outbound_sealed", |b| {
            b.iter(|| black_box(healthcare.prepare_outbound("pharmacy", &record).is_ok()))
        });
    }

    group.finish();
}

// ============================================================================
// IC-03: Transaction Dispatch
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("ic-03-dispatch");
    let registry = registry();

    if let Ok(commerce) = registry.transactions(ChainId::Commerce) {
        let mut next = 0u64;
        group.bench_function("initiate_refund", |b| {
            b.iter(|| {
                next += 1;
                let request = bytes(json!({
                    "transaction_id": format!("T{next}"),
                    "transaction_type": "REFUND_ORDER",
                    "order_id": "O-1",
                    "customer_id": "C-1",
                    "total_amount": "40"
                }));
                black_box(commerce.initiate_json(&request).is_ok())
            })
        });

        let rejected = bytes(json!({
            "transaction_id": "T0",
            "transaction_type": "NEW_ORDER",
            "items": [],
            "total_amount": 100
        }));
        group.bench_function("initiate_rejected", |b| {
            b.iter(|| black_box(commerce.initiate_json(&rejected).is_err()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validation, bench_routing, bench_dispatch);
criterion_main!(benches);
