//! Configuration for all Trellis subsystems.
//!
//! One `TrellisConfig` value is loaded (TOML) or built in code and passed
//! explicitly to the builder, scorer, and orchestrator. Nothing reads
//! ambient global state beyond the currently-published snapshot.

pub mod generation_config;
pub mod graph_config;
pub mod retrieval_config;
pub mod scoring_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, TrellisResult};

pub use generation_config::GenerationConfig;
pub use graph_config::GraphBuildConfig;
pub use retrieval_config::RetrievalConfig;
pub use scoring_config::PathScoringConfig;

/// Default values shared by the per-subsystem config structs.
pub mod defaults {
    pub const DEFAULT_EMBEDDING_DIM: usize = 384;
    pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.5;
    pub const DEFAULT_PRUNE_THRESHOLD: f64 = 0.2;
    pub const DEFAULT_SIMILARITY_BLOCK_SIZE: usize = 512;

    pub const DEFAULT_DECAY_RATE: f64 = 0.85;
    pub const DEFAULT_MAX_PATH_DEPTH: usize = 3;
    pub const DEFAULT_TOP_K_PATHS: usize = 5;
    pub const DEFAULT_MAX_PATHS_EXPLORED: usize = 10_000;

    pub const DEFAULT_TOP_K_SEEDS: usize = 5;
    pub const DEFAULT_CACHE_CAPACITY: u64 = 1024;

    pub const DEFAULT_MAX_NEW_TOKENS: usize = 512;
    pub const DEFAULT_TEMPERATURE: f64 = 0.1;
    pub const DEFAULT_GENERATION_TOP_K: usize = 40;
    pub const DEFAULT_GENERATION_TOP_P: f64 = 0.95;
}

/// Aggregate configuration for the whole engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrellisConfig {
    pub graph: GraphBuildConfig,
    pub scoring: PathScoringConfig,
    pub retrieval: RetrievalConfig,
    pub generation: GenerationConfig,
}

impl TrellisConfig {
    /// Load configuration from a TOML file, falling back to defaults for
    /// any missing section or field.
    pub fn from_toml_file(path: &Path) -> TrellisResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Self = toml::from_str(&raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every tunable against its allowed range.
    pub fn validate(&self) -> TrellisResult<()> {
        self.graph.validate()?;
        self.scoring.validate()?;
        self.retrieval.validate()?;
        self.generation.validate()?;
        Ok(())
    }
}

pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.into(),
    }
}
