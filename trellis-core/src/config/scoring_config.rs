use serde::{Deserialize, Serialize};

use super::{defaults, invalid};
use crate::constants;
use crate::errors::TrellisResult;

/// Path scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathScoringConfig {
    /// Per-hop multiplicative penalty applied as a path grows. In (0, 1].
    pub decay_rate: f64,
    /// Minimum cumulative score for a path to be kept or extended.
    pub prune_threshold: f64,
    /// Maximum number of hops from a seed (path length <= depth + 1).
    pub max_path_depth: usize,
    /// Number of ranked paths returned.
    pub top_k_paths: usize,
    /// Total-paths-explored budget across all seeds; exceeding it ends the
    /// search early with the best paths found so far.
    pub max_paths_explored: usize,
}

impl Default for PathScoringConfig {
    fn default() -> Self {
        Self {
            decay_rate: defaults::DEFAULT_DECAY_RATE,
            prune_threshold: defaults::DEFAULT_PRUNE_THRESHOLD,
            max_path_depth: defaults::DEFAULT_MAX_PATH_DEPTH,
            top_k_paths: defaults::DEFAULT_TOP_K_PATHS,
            max_paths_explored: defaults::DEFAULT_MAX_PATHS_EXPLORED,
        }
    }
}

impl PathScoringConfig {
    pub fn validate(&self) -> TrellisResult<()> {
        if !(self.decay_rate > 0.0 && self.decay_rate <= 1.0) {
            return Err(invalid("scoring.decay_rate", "must be in (0, 1]").into());
        }
        if self.prune_threshold < 0.0 {
            return Err(invalid("scoring.prune_threshold", "must be >= 0").into());
        }
        if self.max_path_depth > constants::MAX_SUPPORTED_PATH_DEPTH {
            return Err(invalid(
                "scoring.max_path_depth",
                format!("must be <= {}", constants::MAX_SUPPORTED_PATH_DEPTH),
            )
            .into());
        }
        if self.top_k_paths == 0 {
            return Err(invalid("scoring.top_k_paths", "must be non-zero").into());
        }
        if self.max_paths_explored == 0
            || self.max_paths_explored > constants::MAX_SUPPORTED_EXPLORATION
        {
            return Err(invalid(
                "scoring.max_paths_explored",
                format!("must be in 1..={}", constants::MAX_SUPPORTED_EXPLORATION),
            )
            .into());
        }
        Ok(())
    }
}
