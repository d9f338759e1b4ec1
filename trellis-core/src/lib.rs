//! # trellis-core
//!
//! Foundation crate for the Trellis retrieval engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TrellisConfig;
pub use errors::{TrellisError, TrellisResult};
pub use models::{ChunkNode, GraphSnapshot, ScoredPath, SimilarityEdge};
