//! Snapshot read/write queries.
//!
//! Writes are wrapped in a SAVEPOINT so a snapshot lands all-or-nothing;
//! loads verify row counts and the blake3 checksum against the header
//! before the snapshot is handed to anyone.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, warn};

use trellis_core::models::{ChunkNode, GraphSnapshot, SimilarityEdge};
use trellis_core::errors::{StorageError, TrellisResult};

use crate::to_storage_err;

/// Persist a snapshot. All-or-nothing: on any failure the savepoint rolls
/// back and no partial rows remain.
pub fn insert_snapshot(conn: &Connection, snapshot: &GraphSnapshot) -> TrellisResult<()> {
    conn.execute_batch("SAVEPOINT persist_snapshot")
        .map_err(|e| to_storage_err(format!("persist savepoint: {e}")))?;

    match insert_snapshot_inner(conn, snapshot) {
        Ok(()) => {
            conn.execute_batch("RELEASE persist_snapshot")
                .map_err(|e| to_storage_err(format!("persist release: {e}")))?;
            Ok(())
        }
        Err(e) => {
            let _ = conn.execute_batch("ROLLBACK TO persist_snapshot");
            let _ = conn.execute_batch("RELEASE persist_snapshot");
            Err(e)
        }
    }
}

fn insert_snapshot_inner(conn: &Connection, snapshot: &GraphSnapshot) -> TrellisResult<()> {
    conn.execute(
        "INSERT INTO snapshots (version, built_at, node_count, edge_count, checksum)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            snapshot.version as i64,
            snapshot.built_at.to_rfc3339(),
            snapshot.node_count() as i64,
            snapshot.edge_count() as i64,
            snapshot.checksum(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let mut node_stmt = conn
        .prepare(
            "INSERT INTO snapshot_nodes (version, node_id, text, metadata, embedding, dims)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut edge_stmt = conn
        .prepare(
            "INSERT INTO snapshot_edges (version, source_id, target_id, weight)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    for id in snapshot.sorted_node_ids() {
        let node = snapshot.node(id)?;
        node_stmt
            .execute(params![
                snapshot.version as i64,
                node.id,
                node.text,
                node.metadata.to_string(),
                f32_vec_to_bytes(&node.embedding),
                node.embedding.len() as i64,
            ])
            .map_err(|e| to_storage_err(e.to_string()))?;

        // Adjacency holds both directions of every unordered pair; persist
        // each pair once, in its canonical source < target orientation.
        for edge in snapshot.neighbors(id) {
            if edge.source < edge.target {
                edge_stmt
                    .execute(params![
                        snapshot.version as i64,
                        edge.source,
                        edge.target,
                        edge.weight,
                    ])
                    .map_err(|e| to_storage_err(e.to_string()))?;
            }
        }
    }

    debug!(
        version = snapshot.version,
        nodes = snapshot.node_count(),
        edges = snapshot.edge_count(),
        "persisted snapshot"
    );
    Ok(())
}

/// Highest persisted version, if any.
pub fn latest_version(conn: &Connection) -> TrellisResult<Option<u64>> {
    let version: Option<i64> = conn
        .query_row("SELECT MAX(version) FROM snapshots", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(version.map(|v| v as u64))
}

/// Load a persisted snapshot by version, verifying counts and checksum.
pub fn load_snapshot(conn: &Connection, version: u64) -> TrellisResult<GraphSnapshot> {
    let header: Option<(String, i64, i64, String)> = conn
        .query_row(
            "SELECT built_at, node_count, edge_count, checksum
             FROM snapshots WHERE version = ?1",
            params![version as i64],
            |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                ))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some((built_at_raw, node_count, edge_count, checksum)) = header else {
        return Err(StorageError::SnapshotNotFound { version }.into());
    };

    let built_at: DateTime<Utc> = built_at_raw
        .parse()
        .map_err(|e| StorageError::SnapshotCorrupted {
            details: format!("unparseable built_at '{built_at_raw}': {e}"),
        })?;

    let nodes = load_nodes(conn, version)?;
    let edges = load_edges(conn, version)?;

    if nodes.len() as i64 != node_count || edges.len() as i64 != edge_count {
        return Err(StorageError::SnapshotCorrupted {
            details: format!(
                "version {version}: header says {node_count} nodes / {edge_count} edges, \
                 found {} / {}",
                nodes.len(),
                edges.len()
            ),
        }
        .into());
    }

    let snapshot = GraphSnapshot::assemble(version, built_at, nodes, &edges);
    let actual = snapshot.checksum();
    if actual != checksum {
        warn!(version, "snapshot checksum mismatch on load");
        return Err(StorageError::SnapshotCorrupted {
            details: format!("version {version}: checksum mismatch"),
        }
        .into());
    }

    Ok(snapshot)
}

/// Delete all but the `keep_last` most recent snapshots. Returns how many
/// snapshot versions were removed.
pub fn prune_snapshots(conn: &Connection, keep_last: usize) -> TrellisResult<usize> {
    let removed = conn
        .execute(
            "DELETE FROM snapshots WHERE version NOT IN (
                SELECT version FROM snapshots ORDER BY version DESC LIMIT ?1
            )",
            params![keep_last as i64],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if removed > 0 {
        debug!(removed, keep_last, "pruned old snapshots");
    }
    Ok(removed)
}

fn load_nodes(conn: &Connection, version: u64) -> TrellisResult<Vec<ChunkNode>> {
    let mut stmt = conn
        .prepare(
            "SELECT node_id, text, metadata, embedding, dims
             FROM snapshot_nodes WHERE version = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![version as i64], |row| {
            let id: String = row.get(0)?;
            let text: String = row.get(1)?;
            let metadata: String = row.get(2)?;
            let blob: Vec<u8> = row.get(3)?;
            let dims: i64 = row.get(4)?;
            Ok((id, text, metadata, blob, dims))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut nodes = Vec::new();
    for row in rows {
        let (id, text, metadata_raw, blob, dims) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        let metadata =
            serde_json::from_str(&metadata_raw).map_err(|e| StorageError::SnapshotCorrupted {
                details: format!("node '{id}': bad metadata JSON: {e}"),
            })?;
        let embedding = bytes_to_f32_vec(&blob);
        if embedding.len() as i64 != dims {
            return Err(StorageError::SnapshotCorrupted {
                details: format!(
                    "node '{id}': embedding blob holds {} floats, dims column says {dims}",
                    embedding.len()
                ),
            }
            .into());
        }
        nodes.push(ChunkNode::new(id, text, metadata, embedding));
    }
    Ok(nodes)
}

fn load_edges(conn: &Connection, version: u64) -> TrellisResult<Vec<SimilarityEdge>> {
    let mut stmt = conn
        .prepare(
            "SELECT source_id, target_id, weight
             FROM snapshot_edges WHERE version = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![version as i64], |row| {
            Ok(SimilarityEdge {
                source: row.get(0)?,
                target: row.get(1)?,
                weight: row.get(2)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut edges = Vec::new();
    for row in rows {
        edges.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(edges)
}

/// Convert f32 slice to bytes (little-endian).
fn f32_vec_to_bytes(v: &[f32]) -> Vec<u8> {
    v.iter().flat_map(|f| f.to_le_bytes()).collect()
}

/// Convert bytes back to f32 vec.
fn bytes_to_f32_vec(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}
