use criterion::{criterion_group, criterion_main, Criterion};

use trellis_core::config::PathScoringConfig;
use trellis_core::models::GraphSnapshot;
use trellis_graph::{PathScorer, SeedNode};

/// Lattice of ~1K edges: 200 nodes, each linked to its next 5 neighbors.
fn build_lattice() -> GraphSnapshot {
    let n = 200;
    let mut edges = Vec::new();
    for i in 0..n {
        for j in 1..=5 {
            if i + j < n {
                edges.push((format!("n{i:03}"), format!("n{:03}", i + j), 0.7));
            }
        }
    }
    let triples: Vec<(&str, &str, f64)> = edges
        .iter()
        .map(|(s, t, w)| (s.as_str(), t.as_str(), *w))
        .collect();
    test_fixtures::snapshot_from_edges(1, &triples)
}

fn bench_score_depth_3(c: &mut Criterion) {
    let snapshot = build_lattice();
    let scorer = PathScorer::new(PathScoringConfig {
        decay_rate: 0.85,
        prune_threshold: 0.1,
        max_path_depth: 3,
        top_k_paths: 10,
        max_paths_explored: 50_000,
    });
    let seeds = vec![
        SeedNode::new("n000", 0.9),
        SeedNode::new("n050", 0.8),
        SeedNode::new("n100", 0.7),
    ];

    c.bench_function("path_score_depth_3_1k_edges", |b| {
        b.iter(|| scorer.score(&snapshot, &seeds));
    });
}

criterion_group!(benches, bench_score_depth_3);
criterion_main!(benches);
