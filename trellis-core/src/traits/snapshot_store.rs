use crate::errors::TrellisResult;
use crate::models::GraphSnapshot;

/// Durable snapshot persistence.
///
/// The builder persists a snapshot through this trait *before* publishing
/// it; on restart the graph store loads the most recent persisted snapshot
/// rather than starting empty.
pub trait ISnapshotStore: Send + Sync {
    /// Write a snapshot durably. All-or-nothing: a failure must leave no
    /// partial snapshot behind.
    fn persist(&self, snapshot: &GraphSnapshot) -> TrellisResult<()>;

    /// Load the snapshot with the highest persisted version, if any.
    fn load_latest(&self) -> TrellisResult<Option<GraphSnapshot>>;

    /// Load a specific persisted version.
    fn load_version(&self, version: u64) -> TrellisResult<GraphSnapshot>;

    /// Highest persisted version, if any snapshot exists.
    fn latest_version(&self) -> TrellisResult<Option<u64>>;

    /// Drop all but the `keep_last` most recent persisted snapshots,
    /// returning how many versions were removed.
    fn prune_older(&self, keep_last: usize) -> TrellisResult<usize>;
}
