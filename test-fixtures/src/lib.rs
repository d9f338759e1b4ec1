//! Shared constructors for integration tests across the workspace.

use chrono::{TimeZone, Utc};

use trellis_core::models::{ChunkNode, GraphSnapshot, SimilarityEdge};

/// A chunk with a fixed placeholder embedding. Traversal and cache tests
/// don't care about the vector contents.
pub fn chunk(id: &str, text: &str) -> ChunkNode {
    ChunkNode::new(id, text, serde_json::json!({}), vec![1.0, 0.0, 0.0, 0.0])
}

/// A chunk with a one-hot embedding on the given axis, handy for making
/// similarity outcomes predictable.
pub fn axis_chunk(id: &str, dim: usize, axis: usize) -> ChunkNode {
    let mut embedding = vec![0.0f32; dim];
    embedding[axis] = 1.0;
    ChunkNode::new(id, format!("text for {id}"), serde_json::json!({}), embedding)
}

/// A chunk with an explicit embedding.
pub fn embedded_chunk(id: &str, text: &str, embedding: Vec<f32>) -> ChunkNode {
    ChunkNode::new(id, text, serde_json::json!({"source": "fixture"}), embedding)
}

/// A chunk with a freshly generated unique id, for tests that only care
/// that ids don't collide.
pub fn unique_chunk(text: &str) -> ChunkNode {
    ChunkNode::new(
        uuid::Uuid::new_v4().to_string(),
        text,
        serde_json::json!({}),
        vec![1.0, 0.0, 0.0, 0.0],
    )
}

/// Assemble a snapshot from weighted (source, target, weight) triples,
/// creating a placeholder chunk for every id mentioned. The build
/// timestamp is fixed so fixture snapshots compare stably.
pub fn snapshot_from_edges(version: u64, edges: &[(&str, &str, f64)]) -> GraphSnapshot {
    let mut ids: Vec<&str> = edges.iter().flat_map(|(s, t, _)| [*s, *t]).collect();
    ids.sort_unstable();
    ids.dedup();

    let nodes: Vec<ChunkNode> = ids
        .iter()
        .map(|id| chunk(id, &format!("text {id}")))
        .collect();
    let edges: Vec<SimilarityEdge> = edges
        .iter()
        .map(|(s, t, w)| SimilarityEdge::new(*s, *t, *w))
        .collect();

    let built_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    GraphSnapshot::assemble(version, built_at, nodes, &edges)
}

/// Snapshot containing the given nodes and no edges.
pub fn snapshot_from_nodes(version: u64, nodes: Vec<ChunkNode>) -> GraphSnapshot {
    let built_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    GraphSnapshot::assemble(version, built_at, nodes, &[])
}
