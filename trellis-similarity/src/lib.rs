//! # trellis-similarity
//!
//! The similarity computer: given (id, vector) pairs of equal
//! dimensionality, emit candidate edges whose cosine similarity exceeds a
//! threshold. The production path partitions rows into blocks and computes
//! them in parallel so peak memory stays bounded; a naive nested loop is
//! kept as the correctness reference for tests.

pub mod cosine;
pub mod pairwise;
pub mod providers;

pub use cosine::cosine_similarity;
pub use pairwise::{candidate_edges, naive_candidate_edges};
pub use providers::HashedBowProvider;
