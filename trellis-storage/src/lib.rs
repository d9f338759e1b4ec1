//! # trellis-storage
//!
//! Durable snapshot persistence on SQLite. Snapshots are written as
//! explicit versioned tables (header + node table + edge table) so the
//! format stays portable and independently verifiable; no opaque
//! serialized blobs.

pub mod connection;
pub mod migrations;
pub mod snapshot_ops;
pub mod store;

pub use connection::WriteConnection;
pub use store::SqliteSnapshotStore;

use trellis_core::errors::{StorageError, TrellisError};

/// Wrap a low-level SQLite message into the storage error type.
pub(crate) fn to_storage_err(message: impl Into<String>) -> TrellisError {
    StorageError::Sqlite {
        message: message.into(),
    }
    .into()
}
