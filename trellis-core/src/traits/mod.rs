pub mod chunk_source;
pub mod embedding;
pub mod generation;
pub mod snapshot_store;

pub use chunk_source::IChunkSource;
pub use embedding::IEmbeddingProvider;
pub use generation::IAnswerGenerator;
pub use snapshot_store::ISnapshotStore;
