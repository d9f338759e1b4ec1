pub mod chunk;
pub mod edge;
pub mod outcome;
pub mod path;
pub mod snapshot;

pub use chunk::ChunkNode;
pub use edge::SimilarityEdge;
pub use outcome::RetrievalOutcome;
pub use path::ScoredPath;
pub use snapshot::GraphSnapshot;
