/// External collaborator failures. Both are retryable: the request or build
/// that hit them is aborted without touching the snapshot or the cache.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("embedding provider unavailable: {reason} (retry recommended)")]
    EmbeddingUnavailable { reason: String },

    #[error("generation service unavailable: {reason} (retry recommended)")]
    GenerationUnavailable { reason: String },
}
