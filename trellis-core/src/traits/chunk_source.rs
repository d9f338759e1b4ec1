use crate::errors::TrellisResult;
use crate::models::ChunkNode;

/// Source of embedded chunks, typically backed by the persistent document
/// store. The engine only ever reads from it.
pub trait IChunkSource: Send + Sync {
    /// Load the complete chunk set as one consistent copy taken at call
    /// time. The builder operates on this copy, never on a live view that
    /// concurrent insertions could interleave with.
    fn load_all(&self) -> TrellisResult<Vec<ChunkNode>>;
}
