/// Storage-layer errors for SQLite snapshot persistence.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("persisted snapshot is corrupted: {details}")]
    SnapshotCorrupted { details: String },

    #[error("snapshot version {version} is not persisted")]
    SnapshotNotFound { version: u64 },
}
