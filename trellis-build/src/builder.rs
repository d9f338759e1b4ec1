//! Full-rebuild graph builder.
//!
//! Every build recomputes the graph from the complete chunk set; there is
//! no incremental edge maintenance. Builds are serialized through an
//! atomic flag, and the new snapshot is persisted durably before it is
//! published to readers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{info, warn};

use trellis_core::config::GraphBuildConfig;
use trellis_core::constants::SNAPSHOTS_KEPT_AFTER_PRUNE;
use trellis_core::errors::{BuildError, TrellisResult};
use trellis_core::models::GraphSnapshot;
use trellis_core::traits::{IChunkSource, ISnapshotStore};
use trellis_graph::GraphStore;
use trellis_similarity::candidate_edges;

/// Outcome of a successful build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub version: u64,
    pub node_count: usize,
    pub edge_count: usize,
    pub elapsed: Duration,
}

/// Orchestrates one full rebuild: load chunks, compute edges, prune,
/// persist, publish.
pub struct GraphBuilder {
    chunk_source: Arc<dyn IChunkSource>,
    persistence: Arc<dyn ISnapshotStore>,
    graph_store: Arc<GraphStore>,
    config: GraphBuildConfig,
    building: AtomicBool,
}

impl GraphBuilder {
    pub fn new(
        chunk_source: Arc<dyn IChunkSource>,
        persistence: Arc<dyn ISnapshotStore>,
        graph_store: Arc<GraphStore>,
        config: GraphBuildConfig,
    ) -> Self {
        Self {
            chunk_source,
            persistence,
            graph_store,
            config,
            building: AtomicBool::new(false),
        }
    }

    /// Run one build. At most one build runs at a time; a second caller
    /// gets `BuildInProgress` instead of queueing.
    pub fn build(&self) -> TrellisResult<BuildReport> {
        if self
            .building
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(BuildError::BuildInProgress.into());
        }
        let result = self.build_inner();
        self.building.store(false, Ordering::SeqCst);
        result
    }

    fn build_inner(&self) -> TrellisResult<BuildReport> {
        let started = Instant::now();
        let chunks = self.chunk_source.load_all()?;
        info!(chunks = chunks.len(), "build started");

        let vectors: Vec<(String, Vec<f32>)> = chunks
            .iter()
            .map(|c| (c.id.clone(), c.embedding.clone()))
            .collect();

        let mut edges = candidate_edges(
            &vectors,
            self.config.embedding_dim,
            self.config.similarity_threshold,
            self.config.block_size,
        )?;

        // Second-pass prune with the independent prune threshold.
        let before = edges.len();
        edges.retain(|e| e.weight >= self.config.prune_threshold);
        if edges.len() < before {
            info!(pruned = before - edges.len(), "pruned weak edges");
        }

        let version = self.graph_store.current_snapshot().version + 1;
        let snapshot = GraphSnapshot::assemble(version, Utc::now(), chunks, &edges);
        let report = BuildReport {
            version,
            node_count: snapshot.node_count(),
            edge_count: snapshot.edge_count(),
            elapsed: started.elapsed(),
        };

        // Durability before visibility: if the persist fails, readers keep
        // the previous snapshot and nothing was published.
        self.persistence.persist(&snapshot).map_err(|e| {
            BuildError::BuildFailed {
                reason: format!("snapshot persist failed: {e}"),
            }
        })?;
        self.graph_store.publish(Arc::new(snapshot))?;

        if let Err(e) = self.persistence.prune_older(SNAPSHOTS_KEPT_AFTER_PRUNE) {
            warn!(error = %e, "snapshot retention prune failed");
        }

        info!(
            version = report.version,
            nodes = report.node_count,
            edges = report.edge_count,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "build complete"
        );
        Ok(report)
    }
}
