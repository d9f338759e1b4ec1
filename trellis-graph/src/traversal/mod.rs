//! Decay-weighted path scoring over an immutable snapshot.
//!
//! Expansion is frontier-based: depth 0 is processed fully, then depth 1,
//! and so on, which makes the depth bound and the exploration budget easy
//! to enforce. Each seed expands independently against the shared
//! snapshot, so seeds run in parallel.

pub mod frontier;
pub mod ranking;

use std::sync::atomic::AtomicUsize;

use rayon::prelude::*;
use tracing::debug;

use trellis_core::config::PathScoringConfig;
use trellis_core::models::{GraphSnapshot, ScoredPath};

/// A chunk selected as a starting point for path exploration, with its
/// initial relevance score (similarity to the query).
#[derive(Debug, Clone)]
pub struct SeedNode {
    pub id: String,
    pub relevance: f64,
}

impl SeedNode {
    pub fn new(id: impl Into<String>, relevance: f64) -> Self {
        Self {
            id: id.into(),
            relevance,
        }
    }
}

/// The path scorer. Stateless; all tunables arrive via
/// `PathScoringConfig`.
pub struct PathScorer {
    config: PathScoringConfig,
}

impl PathScorer {
    pub fn new(config: PathScoringConfig) -> Self {
        Self { config }
    }

    /// Produce the ranked top-k paths reachable from the given seeds.
    ///
    /// At depth d a path scores `seed_relevance * decay_rate^d * product of
    /// edge weights`; branches dropping below the prune threshold are cut
    /// immediately. Since decay <= 1 and weights <= 1, the score is
    /// non-increasing with depth, so pruning is monotone and expansion
    /// terminates within `max_path_depth`.
    ///
    /// If no seed has a single qualifying edge, the seeds themselves come
    /// back as length-1 paths carrying their relevance: retrieval never
    /// returns empty while seeds exist.
    pub fn score(&self, snapshot: &GraphSnapshot, seeds: &[SeedNode]) -> Vec<ScoredPath> {
        if seeds.is_empty() {
            return Vec::new();
        }

        // Shared exploration budget across all seed expansions. When it
        // runs out, each expansion stops and returns its best-so-far.
        let explored = AtomicUsize::new(0);

        let mut paths: Vec<ScoredPath> = seeds
            .par_iter()
            .flat_map_iter(|seed| frontier::expand_seed(snapshot, seed, &self.config, &explored))
            .collect();

        debug!(
            seeds = seeds.len(),
            candidates = paths.len(),
            explored = explored.load(std::sync::atomic::Ordering::Relaxed),
            "path expansion complete"
        );

        if paths.is_empty() {
            // No qualifying edge anywhere: fall back to the seeds as
            // length-1 paths.
            paths = seeds
                .iter()
                .filter(|s| snapshot.contains(&s.id))
                .map(|s| ScoredPath::seed_only(s.id.clone(), s.relevance))
                .collect();
        }

        ranking::rank(paths, self.config.top_k_paths)
    }
}
