//! Final ordering of completed paths.

use trellis_core::models::ScoredPath;

/// Sort candidates into the deterministic ranking order (descending score,
/// shorter path first, then lexicographic node sequence) and keep the top
/// k.
pub(crate) fn rank(mut paths: Vec<ScoredPath>, top_k: usize) -> Vec<ScoredPath> {
    paths.sort_by(ScoredPath::ranking_cmp);
    paths.truncate(top_k);
    paths
}
