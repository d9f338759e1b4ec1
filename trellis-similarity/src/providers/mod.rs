//! Embedding providers bundled with the engine.
//!
//! Production deployments plug in an external provider through
//! `IEmbeddingProvider`; the hashed bag-of-words provider here is the
//! deterministic fallback used by tests and air-gapped setups.

pub mod hashed;

pub use hashed::HashedBowProvider;
