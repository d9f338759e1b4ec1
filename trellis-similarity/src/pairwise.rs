//! Blocked pairwise candidate-edge computation.
//!
//! The upper triangle of the similarity matrix is processed in row blocks,
//! each block in parallel. Norms are precomputed once, so each pair costs
//! a single dot product. No dense N x N matrix is ever materialized: a
//! block only accumulates the pairs that clear the threshold.

use rayon::prelude::*;
use tracing::debug;

use trellis_core::errors::{BuildError, TrellisResult};
use trellis_core::models::SimilarityEdge;

use crate::cosine::clamp_weight;

/// Compute candidate edges: every unordered pair whose cosine similarity
/// exceeds `threshold`, with the weight clamped to [0, 1].
///
/// Fails with `DimensionMismatch` if any vector disagrees with
/// `embedding_dim`. Pure function of its inputs.
pub fn candidate_edges(
    vectors: &[(String, Vec<f32>)],
    embedding_dim: usize,
    threshold: f64,
    block_size: usize,
) -> TrellisResult<Vec<SimilarityEdge>> {
    validate_dimensions(vectors, embedding_dim)?;

    let n = vectors.len();
    if n < 2 {
        return Ok(Vec::new());
    }

    // Clamp once so the stride and the block end can't disagree on a
    // degenerate block size.
    let block_size = block_size.max(1);

    // Precompute inverse norms; zero-norm vectors produce no edges.
    let inv_norms: Vec<f64> = vectors
        .iter()
        .map(|(_, v)| {
            let norm_sq: f64 = v.iter().map(|x| (*x as f64) * (*x as f64)).sum();
            if norm_sq == 0.0 {
                0.0
            } else {
                1.0 / norm_sq.sqrt()
            }
        })
        .collect();

    let block_starts: Vec<usize> = (0..n).step_by(block_size).collect();

    let edges: Vec<SimilarityEdge> = block_starts
        .par_iter()
        .flat_map_iter(|&start| {
            let end = (start + block_size).min(n);
            let mut block_edges = Vec::new();
            for i in start..end {
                if inv_norms[i] == 0.0 {
                    continue;
                }
                let (ref id_i, ref vec_i) = vectors[i];
                for (j, (id_j, vec_j)) in vectors.iter().enumerate().skip(i + 1) {
                    if inv_norms[j] == 0.0 {
                        continue;
                    }
                    let dot: f64 = vec_i
                        .iter()
                        .zip(vec_j.iter())
                        .map(|(x, y)| (*x as f64) * (*y as f64))
                        .sum();
                    let sim = dot * inv_norms[i] * inv_norms[j];
                    if sim > threshold {
                        block_edges.push(SimilarityEdge::new(
                            id_i.clone(),
                            id_j.clone(),
                            clamp_weight(sim),
                        ));
                    }
                }
            }
            block_edges
        })
        .collect();

    debug!(
        nodes = n,
        edges = edges.len(),
        threshold,
        "pairwise similarity complete"
    );
    Ok(edges)
}

/// Naive O(n^2) reference implementation. Correctness oracle for the
/// blocked path; not used in production.
pub fn naive_candidate_edges(
    vectors: &[(String, Vec<f32>)],
    embedding_dim: usize,
    threshold: f64,
) -> TrellisResult<Vec<SimilarityEdge>> {
    validate_dimensions(vectors, embedding_dim)?;

    let mut edges = Vec::new();
    for i in 0..vectors.len() {
        for j in (i + 1)..vectors.len() {
            let sim = crate::cosine::cosine_similarity(&vectors[i].1, &vectors[j].1);
            if sim > threshold {
                edges.push(SimilarityEdge::new(
                    vectors[i].0.clone(),
                    vectors[j].0.clone(),
                    clamp_weight(sim),
                ));
            }
        }
    }
    Ok(edges)
}

fn validate_dimensions(vectors: &[(String, Vec<f32>)], embedding_dim: usize) -> TrellisResult<()> {
    for (_, v) in vectors {
        if v.len() != embedding_dim {
            return Err(BuildError::DimensionMismatch {
                expected: embedding_dim,
                actual: v.len(),
            }
            .into());
        }
    }
    Ok(())
}
