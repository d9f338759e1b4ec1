//! # trellis-graph
//!
//! The in-memory graph layer: a store that serves the currently-published
//! snapshot to readers without blocking, and the path scorer that performs
//! decay-weighted bounded-depth expansion over a captured snapshot.

pub mod store;
pub mod traversal;

pub use store::GraphStore;
pub use traversal::{PathScorer, SeedNode};
