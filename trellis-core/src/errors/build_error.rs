/// Graph build errors. A failed build never disturbs the published snapshot.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("build failed: {reason}")]
    BuildFailed { reason: String },

    #[error("a build is already in progress")]
    BuildInProgress,
}
