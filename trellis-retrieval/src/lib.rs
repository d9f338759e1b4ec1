//! # trellis-retrieval
//!
//! The retrieval orchestrator: embed the query, pick seed chunks, score
//! paths over the current snapshot, condense path texts into a generation
//! context, and cache the final answer per (requester, query) against the
//! snapshot version it was computed from.

pub mod cache;
pub mod context;
pub mod engine;
pub mod seeds;

pub use cache::{CacheLookup, RetrievalCache};
pub use engine::RetrievalEngine;
