use serde::{Deserialize, Serialize};

use super::path::ScoredPath;

/// Everything a retrieval request returns: the generated answer plus the
/// path set that produced it, for downstream visualization and debugging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalOutcome {
    pub answer: String,
    pub paths: Vec<ScoredPath>,
    /// Snapshot version the request was served against.
    pub graph_version: u64,
    /// Whether the answer came from the retrieval cache.
    pub cache_hit: bool,
}
