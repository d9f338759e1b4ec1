//! `ISnapshotStore` implementation over the single write connection.

use std::path::Path;

use tracing::info;

use trellis_core::errors::TrellisResult;
use trellis_core::models::GraphSnapshot;
use trellis_core::traits::ISnapshotStore;

use crate::connection::WriteConnection;
use crate::{migrations, snapshot_ops};

/// SQLite-backed snapshot store. Migrations run at open, so a freshly
/// created database is immediately usable.
pub struct SqliteSnapshotStore {
    conn: WriteConnection,
}

impl SqliteSnapshotStore {
    /// Open (or create) a file-backed store.
    pub fn open(path: &Path) -> TrellisResult<Self> {
        let conn = WriteConnection::open(path)?;
        conn.with_conn(migrations::run_migrations)?;
        info!(path = %path.display(), "snapshot store opened");
        Ok(Self { conn })
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> TrellisResult<Self> {
        let conn = WriteConnection::open_in_memory()?;
        conn.with_conn(migrations::run_migrations)?;
        Ok(Self { conn })
    }

}

impl ISnapshotStore for SqliteSnapshotStore {
    fn persist(&self, snapshot: &GraphSnapshot) -> TrellisResult<()> {
        self.conn
            .with_conn(|c| snapshot_ops::insert_snapshot(c, snapshot))
    }

    fn load_latest(&self) -> TrellisResult<Option<GraphSnapshot>> {
        self.conn.with_conn(|c| {
            match snapshot_ops::latest_version(c)? {
                Some(version) => Ok(Some(snapshot_ops::load_snapshot(c, version)?)),
                None => Ok(None),
            }
        })
    }

    fn load_version(&self, version: u64) -> TrellisResult<GraphSnapshot> {
        self.conn
            .with_conn(|c| snapshot_ops::load_snapshot(c, version))
    }

    fn latest_version(&self) -> TrellisResult<Option<u64>> {
        self.conn.with_conn(snapshot_ops::latest_version)
    }

    fn prune_older(&self, keep_last: usize) -> TrellisResult<usize> {
        self.conn
            .with_conn(|c| snapshot_ops::prune_snapshots(c, keep_last))
    }
}
