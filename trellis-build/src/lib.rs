//! # trellis-build
//!
//! Graph construction: load every embedded chunk, compute candidate
//! similarity edges, prune, persist the new snapshot, then publish it.
//! Persist-before-publish means a crash mid-build never costs the graph
//! that readers already have.

pub mod builder;
pub mod worker;

pub use builder::{BuildReport, GraphBuilder};
pub use worker::BuildWorker;
