//! Property tests: any snapshot that persists successfully loads back
//! structurally identical.

use proptest::prelude::*;

use chrono::{TimeZone, Utc};
use trellis_core::models::{ChunkNode, GraphSnapshot, SimilarityEdge};
use trellis_core::traits::ISnapshotStore;
use trellis_storage::SqliteSnapshotStore;

const DIM: usize = 4;

fn arb_graph() -> impl Strategy<Value = (Vec<ChunkNode>, Vec<SimilarityEdge>)> {
    prop::collection::vec(prop::collection::vec(-1.0f32..1.0, DIM), 1..12).prop_flat_map(
        |vectors| {
            let count = vectors.len();
            let nodes: Vec<ChunkNode> = vectors
                .into_iter()
                .enumerate()
                .map(|(i, embedding)| {
                    ChunkNode::new(
                        format!("n{i}"),
                        format!("chunk text {i}"),
                        serde_json::json!({ "ordinal": i }),
                        embedding,
                    )
                })
                .collect();

            prop::collection::vec((0..count, 0..count, 0.01f64..=1.0), 0..20).prop_map(
                move |triples| {
                    let mut edges: Vec<SimilarityEdge> = triples
                        .into_iter()
                        .filter(|(s, t, _)| s < t)
                        .map(|(s, t, w)| SimilarityEdge::new(format!("n{s}"), format!("n{t}"), w))
                        .collect();
                    // One weight per unordered pair; duplicates would
                    // violate the edge table's primary key.
                    edges.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));
                    edges.dedup_by(|a, b| a.source == b.source && a.target == b.target);
                    (nodes.clone(), edges)
                },
            )
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn persisted_snapshots_load_back_identical((nodes, edges) in arb_graph()) {
        let built_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let snapshot = GraphSnapshot::assemble(1, built_at, nodes, &edges);

        let store = SqliteSnapshotStore::open_in_memory().unwrap();
        store.persist(&snapshot).unwrap();
        let loaded = store.load_version(1).unwrap();

        prop_assert_eq!(loaded.version, snapshot.version);
        prop_assert_eq!(loaded.node_count(), snapshot.node_count());
        prop_assert_eq!(loaded.edge_count(), snapshot.edge_count());
        prop_assert_eq!(loaded.checksum(), snapshot.checksum());
        for id in snapshot.sorted_node_ids() {
            prop_assert_eq!(
                &loaded.node(id).unwrap().embedding,
                &snapshot.node(id).unwrap().embedding
            );
        }
    }

    #[test]
    fn persist_then_latest_version_reports_it(version in 1u64..1000) {
        let built_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let node = ChunkNode::new("solo", "text", serde_json::json!({}), vec![1.0; DIM]);
        let snapshot = GraphSnapshot::assemble(version, built_at, vec![node], &[]);

        let store = SqliteSnapshotStore::open_in_memory().unwrap();
        store.persist(&snapshot).unwrap();
        prop_assert_eq!(store.latest_version().unwrap(), Some(version));
    }
}
