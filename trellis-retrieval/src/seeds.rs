//! Seed selection: rank every node in the snapshot by query similarity.

use rayon::prelude::*;

use trellis_core::errors::{BuildError, TrellisResult};
use trellis_core::models::GraphSnapshot;
use trellis_graph::SeedNode;
use trellis_similarity::cosine::clamp_weight;
use trellis_similarity::cosine_similarity;

/// Pick the `top_k` nodes most similar to the query embedding.
///
/// Relevance is cosine similarity clamped to [0, 1]. Ties break on node id
/// so seed selection is deterministic.
pub fn select_seeds(
    snapshot: &GraphSnapshot,
    query_embedding: &[f32],
    top_k: usize,
) -> TrellisResult<Vec<SeedNode>> {
    // Node embeddings were dimension-validated at build time, so one node
    // speaks for the whole snapshot.
    if let Some(node) = snapshot.nodes().next() {
        if node.embedding.len() != query_embedding.len() {
            return Err(BuildError::DimensionMismatch {
                expected: node.embedding.len(),
                actual: query_embedding.len(),
            }
            .into());
        }
    }

    let mut scored: Vec<SeedNode> = snapshot
        .nodes()
        .collect::<Vec<_>>()
        .par_iter()
        .map(|node| {
            let relevance = clamp_weight(cosine_similarity(query_embedding, &node.embedding));
            SeedNode::new(node.id.clone(), relevance)
        })
        .collect();

    scored.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    scored.truncate(top_k);
    Ok(scored)
}
