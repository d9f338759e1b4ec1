use serde::{Deserialize, Serialize};

/// A unit of source text with its embedding vector.
///
/// Created when a chunk is first embedded; immutable afterwards. A chunk
/// disappears only when a full rebuild excludes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChunkNode {
    /// Stable unique identifier.
    pub id: String,
    /// Raw chunk text.
    pub text: String,
    /// Arbitrary metadata supplied by the ingestion layer.
    pub metadata: serde_json::Value,
    /// Embedding vector, validated against the configured dimension.
    pub embedding: Vec<f32>,
}

impl ChunkNode {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        metadata: serde_json::Value,
        embedding: Vec<f32>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            metadata,
            embedding,
        }
    }
}
