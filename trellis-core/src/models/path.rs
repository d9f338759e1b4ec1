use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// An ordered sequence of distinct node ids with a cumulative score.
///
/// Paths are ephemeral: produced per retrieval request and persisted no
/// further than the retrieval cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredPath {
    pub nodes: Vec<String>,
    pub score: f64,
}

impl ScoredPath {
    pub fn new(nodes: Vec<String>, score: f64) -> Self {
        Self { nodes, score }
    }

    /// Seed fallback: a length-1 path carrying the seed's relevance.
    pub fn seed_only(seed: impl Into<String>, relevance: f64) -> Self {
        Self {
            nodes: vec![seed.into()],
            score: relevance,
        }
    }

    /// Number of hops (edges) in the path.
    pub fn depth(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Ranking order: descending score, then shorter path, then
    /// lexicographically smaller node-id sequence. Total and deterministic,
    /// so repeated runs over identical inputs rank ties identically.
    pub fn ranking_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.nodes.len().cmp(&other.nodes.len()))
            .then_with(|| self.nodes.cmp(&other.nodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_score_ranks_first() {
        let a = ScoredPath::new(vec!["a".into()], 0.9);
        let b = ScoredPath::new(vec!["b".into()], 0.5);
        assert_eq!(a.ranking_cmp(&b), Ordering::Less);
    }

    #[test]
    fn equal_score_prefers_shorter_path() {
        let short = ScoredPath::new(vec!["a".into(), "b".into()], 0.5);
        let long = ScoredPath::new(vec!["a".into(), "b".into(), "c".into()], 0.5);
        assert_eq!(short.ranking_cmp(&long), Ordering::Less);
    }

    #[test]
    fn equal_score_and_length_breaks_lexicographically() {
        let ab = ScoredPath::new(vec!["a".into(), "b".into()], 0.5);
        let ac = ScoredPath::new(vec!["a".into(), "c".into()], 0.5);
        assert_eq!(ab.ranking_cmp(&ac), Ordering::Less);
    }

    #[test]
    fn depth_counts_hops() {
        assert_eq!(ScoredPath::seed_only("a", 1.0).depth(), 0);
        assert_eq!(ScoredPath::new(vec!["a".into(), "b".into()], 0.5).depth(), 1);
    }
}
