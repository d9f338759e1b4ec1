use serde::{Deserialize, Serialize};

use super::{defaults, invalid};
use crate::errors::TrellisResult;

/// Graph construction configuration.
///
/// `similarity_threshold` filters candidate edge creation; `prune_threshold`
/// filters the materialized graph in a second pass. They are independent
/// tuning knobs and may differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphBuildConfig {
    /// Expected dimensionality of every chunk embedding.
    pub embedding_dim: usize,
    /// Minimum cosine similarity for a candidate edge to exist.
    pub similarity_threshold: f64,
    /// Minimum edge weight kept by the post-build prune pass.
    pub prune_threshold: f64,
    /// Row-block size for the blocked pairwise similarity computation.
    pub block_size: usize,
}

impl Default for GraphBuildConfig {
    fn default() -> Self {
        Self {
            embedding_dim: defaults::DEFAULT_EMBEDDING_DIM,
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            prune_threshold: defaults::DEFAULT_PRUNE_THRESHOLD,
            block_size: defaults::DEFAULT_SIMILARITY_BLOCK_SIZE,
        }
    }
}

impl GraphBuildConfig {
    pub fn validate(&self) -> TrellisResult<()> {
        if self.embedding_dim == 0 {
            return Err(invalid("graph.embedding_dim", "must be non-zero").into());
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(invalid("graph.similarity_threshold", "must be in [0, 1]").into());
        }
        if self.prune_threshold < 0.0 {
            return Err(invalid("graph.prune_threshold", "must be >= 0").into());
        }
        if self.block_size == 0 {
            return Err(invalid("graph.block_size", "must be non-zero").into());
        }
        Ok(())
    }
}
