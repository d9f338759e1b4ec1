//! Error taxonomy for the Trellis engine.
//!
//! Each subsystem has its own enum; `TrellisError` folds them together so
//! callers can propagate with `?` across crate boundaries. The retrieval
//! orchestrator is the only place these are translated into caller-visible
//! outcomes.

pub mod build_error;
pub mod config_error;
pub mod graph_error;
pub mod provider_error;
pub mod retrieval_error;
pub mod storage_error;

pub use build_error::BuildError;
pub use config_error::ConfigError;
pub use graph_error::GraphError;
pub use provider_error::ProviderError;
pub use retrieval_error::RetrievalError;
pub use storage_error::StorageError;

/// Top-level error type. Every fallible operation in the workspace returns
/// `TrellisResult<T>`.
#[derive(Debug, thiserror::Error)]
pub enum TrellisError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Workspace-wide result alias.
pub type TrellisResult<T> = Result<T, TrellisError>;
