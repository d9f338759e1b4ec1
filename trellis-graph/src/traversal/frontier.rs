//! Per-seed bounded-depth frontier expansion.

use std::sync::atomic::{AtomicUsize, Ordering};

use trellis_core::config::PathScoringConfig;
use trellis_core::models::{GraphSnapshot, ScoredPath};

use super::SeedNode;

/// A path under construction: the nodes walked so far and the cumulative
/// score at the current depth.
struct PartialPath {
    nodes: Vec<String>,
    score: f64,
}

/// Expand one seed breadth-first up to `max_path_depth` hops.
///
/// Every extension that survives the prune threshold is recorded as a
/// completed path (a longer path does not subsume its prefixes). The
/// shared `explored` counter debits one unit per extension; once the
/// budget is spent the expansion stops and returns what it has.
pub(crate) fn expand_seed(
    snapshot: &GraphSnapshot,
    seed: &SeedNode,
    config: &PathScoringConfig,
    explored: &AtomicUsize,
) -> Vec<ScoredPath> {
    if !snapshot.contains(&seed.id) {
        return Vec::new();
    }

    let mut completed = Vec::new();
    let mut frontier = vec![PartialPath {
        nodes: vec![seed.id.clone()],
        score: seed.relevance,
    }];

    for _depth in 0..config.max_path_depth {
        let mut next = Vec::new();
        'paths: for path in &frontier {
            let Some(tail) = path.nodes.last() else {
                continue;
            };
            for edge in snapshot.neighbors(tail) {
                // No node repeats within a single path.
                if path.nodes.iter().any(|n| n == &edge.target) {
                    continue;
                }
                let score = path.score * config.decay_rate * edge.weight;
                if score < config.prune_threshold {
                    continue;
                }
                if explored.fetch_add(1, Ordering::Relaxed) >= config.max_paths_explored {
                    // Budget exhausted: best-so-far, not an error.
                    break 'paths;
                }
                let mut nodes = path.nodes.clone();
                nodes.push(edge.target.clone());
                completed.push(ScoredPath::new(nodes.clone(), score));
                next.push(PartialPath { nodes, score });
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    completed
}
