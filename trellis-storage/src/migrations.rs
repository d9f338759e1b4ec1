//! Schema migrations gated on `PRAGMA user_version`.

use rusqlite::Connection;
use tracing::info;

use trellis_core::errors::{StorageError, TrellisResult};

use crate::to_storage_err;

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Run all outstanding migrations.
pub fn run_migrations(conn: &Connection) -> TrellisResult<()> {
    let current: u32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    if current < 1 {
        v001_snapshot_tables(conn).map_err(|e| {
            StorageError::MigrationFailed {
                version: 1,
                reason: e.to_string(),
            }
        })?;
        set_user_version(conn, 1)?;
        info!(schema_version = 1, "applied snapshot table migration");
    }

    Ok(())
}

/// v001: snapshot header, node, and edge tables.
fn v001_snapshot_tables(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS snapshots (
            version     INTEGER PRIMARY KEY,
            built_at    TEXT NOT NULL,
            node_count  INTEGER NOT NULL,
            edge_count  INTEGER NOT NULL,
            checksum    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS snapshot_nodes (
            version     INTEGER NOT NULL,
            node_id     TEXT NOT NULL,
            text        TEXT NOT NULL,
            metadata    TEXT NOT NULL,
            embedding   BLOB NOT NULL,
            dims        INTEGER NOT NULL,
            PRIMARY KEY (version, node_id),
            FOREIGN KEY (version) REFERENCES snapshots(version) ON DELETE CASCADE
        );

        CREATE TABLE IF NOT EXISTS snapshot_edges (
            version     INTEGER NOT NULL,
            source_id   TEXT NOT NULL,
            target_id   TEXT NOT NULL,
            weight      REAL NOT NULL,
            PRIMARY KEY (version, source_id, target_id),
            FOREIGN KEY (version) REFERENCES snapshots(version) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_snapshot_nodes_version ON snapshot_nodes(version);
        CREATE INDEX IF NOT EXISTS idx_snapshot_edges_version ON snapshot_edges(version);
        ",
    )
}

fn set_user_version(conn: &Connection, version: u32) -> TrellisResult<()> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| to_storage_err(e.to_string()))
}
