use serde::{Deserialize, Serialize};

use super::{defaults, invalid};
use crate::errors::TrellisResult;

/// Retrieval orchestrator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of seed nodes selected by query similarity.
    pub top_k_seeds: usize,
    /// Maximum number of (requester, query) entries the cache holds.
    pub cache_capacity: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k_seeds: defaults::DEFAULT_TOP_K_SEEDS,
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl RetrievalConfig {
    pub fn validate(&self) -> TrellisResult<()> {
        if self.top_k_seeds == 0 {
            return Err(invalid("retrieval.top_k_seeds", "must be non-zero").into());
        }
        Ok(())
    }
}
