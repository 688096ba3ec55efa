//! Benchmarks for topology traversal.
//!
//! Tests traversal performance for:
//! - Unbounded reach over a long feeder chain
//! - Boundary search over a ladder of bays hanging off one bus
//! - Topology construction and zone search from the sample document

extern crate gridwalk;

use criterion::{criterion_group, criterion_main, Criterion};
use gridwalk::{
    analysis::ProtectionZone,
    graph::{
        algorithms::{bounded_reach, edges_along_visit_order, reachable},
        AdjacencyGraph, NodeId,
    },
    scl::{SclDocument, SubstationTopology, ZoneConfig},
};
use std::{hint::black_box, path::PathBuf};

/// A single feeder of `len` nodes joined by disconnectors.
fn feeder(len: usize) -> (AdjacencyGraph<usize, String>, NodeId) {
    let mut graph = AdjacencyGraph::undirected();
    let first = graph.add_node(0);
    let mut previous = first;
    for index in 1..len {
        let node = graph.add_node(index);
        graph
            .set_edge(previous, node, format!("DS{index}"))
            .unwrap();
        previous = node;
    }
    (graph, first)
}

/// A bus with `bays` bays, each `bus --DS-- a --CB-- b --CT-- c`.
fn bus_with_bays(bays: usize) -> (AdjacencyGraph<(), String>, NodeId) {
    let mut graph = AdjacencyGraph::undirected();
    let bus = graph.add_node(());
    for bay in 0..bays {
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.set_edge(bus, a, format!("DS{bay}")).unwrap();
        graph.set_edge(a, b, format!("CB{bay}")).unwrap();
        graph.set_edge(b, c, format!("CT{bay}")).unwrap();
    }
    (graph, bus)
}

/// Benchmark reaching every node of a 100k node chain.
fn bench_reach_chain(c: &mut Criterion) {
    let (graph, start) = feeder(100_000);

    c.bench_function("reach_chain_100k", |b| {
        b.iter(|| {
            let result = reachable(black_box(&graph), &[start]).unwrap();
            black_box(result)
        });
    });
}

/// Benchmark a boundary search that stops at the first breaker of each bay.
fn bench_bounded_bus(c: &mut Criterion) {
    let (graph, bus) = bus_with_bays(5_000);

    c.bench_function("bounded_bus_5k_bays", |b| {
        b.iter(|| {
            let result = bounded_reach(black_box(&graph), &[bus], |label| label.starts_with("CB")).unwrap();
            black_box(edges_along_visit_order(&result, &graph).len())
        });
    });
}

/// Benchmark building the topology of the sample document and searching one zone.
fn bench_sample_zone(c: &mut Criterion) {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/samples/substation.scd");
    let doc = SclDocument::from_file(&path).unwrap();

    c.bench_function("sample_topology_and_zone", |b| {
        b.iter(|| {
            let topology = SubstationTopology::from_document(black_box(&doc)).unwrap();
            let zone =
                ProtectionZone::around(&topology, "XAT/220/Bus_A/L1", &ZoneConfig::default()).unwrap();
            black_box(zone)
        });
    });
}

criterion_group!(benches, bench_reach_chain, bench_bounded_bus, bench_sample_zone);
criterion_main!(benches);
