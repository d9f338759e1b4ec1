//! GraphStore — owns the current-snapshot pointer, the only mutable shared
//! state in the engine.
//!
//! Readers grab an `Arc` handle in O(1) and keep using it for the whole
//! request even if a build publishes a newer version mid-flight. Publishing
//! swaps the pointer exactly once per successful build.

use std::sync::{Arc, RwLock};

use tracing::info;

use trellis_core::errors::{GraphError, TrellisResult};
use trellis_core::models::{ChunkNode, GraphSnapshot};
use trellis_core::traits::ISnapshotStore;

/// Holds the latest published snapshot and serves it to readers without
/// blocking on concurrent builds.
pub struct GraphStore {
    current: RwLock<Arc<GraphSnapshot>>,
}

impl GraphStore {
    /// A store starting from the empty version-0 snapshot.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(GraphSnapshot::empty(
                trellis_core::constants::EMPTY_SNAPSHOT_VERSION,
            ))),
        }
    }

    /// Open a store recovering the most recent persisted snapshot; falls
    /// back to the empty snapshot when nothing is persisted yet.
    pub fn open(persistence: &dyn ISnapshotStore) -> TrellisResult<Self> {
        let store = Self::new();
        if let Some(snapshot) = persistence.load_latest()? {
            info!(
                version = snapshot.version,
                nodes = snapshot.node_count(),
                edges = snapshot.edge_count(),
                "recovered persisted snapshot"
            );
            store.publish(Arc::new(snapshot))?;
        }
        Ok(store)
    }

    /// The latest published snapshot. O(1), never blocks on a build.
    pub fn current_snapshot(&self) -> Arc<GraphSnapshot> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Atomically publish a new snapshot. Only the graph builder calls
    /// this; versions must strictly increase, except that the initial
    /// recovery into an empty store accepts any version.
    pub fn publish(&self, snapshot: Arc<GraphSnapshot>) -> TrellisResult<()> {
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let current_version = guard.version;
        let replacing_empty =
            current_version == trellis_core::constants::EMPTY_SNAPSHOT_VERSION && guard.is_empty();
        if snapshot.version <= current_version && !replacing_empty {
            return Err(GraphError::StaleVersion {
                offered: snapshot.version,
                current: current_version,
            }
            .into());
        }
        info!(
            from = current_version,
            to = snapshot.version,
            nodes = snapshot.node_count(),
            edges = snapshot.edge_count(),
            "published snapshot"
        );
        *guard = snapshot;
        Ok(())
    }

    /// Resolve a node's text/metadata within a given snapshot. Fails with
    /// `NodeNotFound` when the id is absent from that snapshot.
    pub fn node_by_id<'a>(
        &self,
        snapshot: &'a GraphSnapshot,
        id: &str,
    ) -> TrellisResult<&'a ChunkNode> {
        Ok(snapshot.node(id)?)
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use trellis_core::models::ChunkNode;

    fn snapshot(version: u64) -> Arc<GraphSnapshot> {
        let nodes = vec![ChunkNode::new(
            "a",
            "text",
            serde_json::json!({}),
            vec![1.0],
        )];
        Arc::new(GraphSnapshot::assemble(version, Utc::now(), nodes, &[]))
    }

    #[test]
    fn starts_empty_at_version_zero() {
        let store = GraphStore::new();
        let current = store.current_snapshot();
        assert_eq!(current.version, 0);
        assert!(current.is_empty());
    }

    #[test]
    fn publish_replaces_current() {
        let store = GraphStore::new();
        store.publish(snapshot(1)).unwrap();
        assert_eq!(store.current_snapshot().version, 1);
        store.publish(snapshot(2)).unwrap();
        assert_eq!(store.current_snapshot().version, 2);
    }

    #[test]
    fn non_increasing_version_is_rejected() {
        let store = GraphStore::new();
        store.publish(snapshot(2)).unwrap();
        let err = store.publish(snapshot(2)).unwrap_err();
        assert!(err.to_string().contains("refusing to publish"));
        assert_eq!(store.current_snapshot().version, 2);
    }

    #[test]
    fn reader_keeps_old_snapshot_across_publish() {
        let store = GraphStore::new();
        store.publish(snapshot(1)).unwrap();
        let held = store.current_snapshot();
        store.publish(snapshot(2)).unwrap();
        // The in-flight reader still sees version 1; new readers see 2.
        assert_eq!(held.version, 1);
        assert_eq!(store.current_snapshot().version, 2);
    }

    #[test]
    fn node_by_id_resolves_within_snapshot() {
        let store = GraphStore::new();
        store.publish(snapshot(1)).unwrap();
        let current = store.current_snapshot();
        assert_eq!(store.node_by_id(&current, "a").unwrap().id, "a");
        assert!(store.node_by_id(&current, "zzz").is_err());
    }
}
