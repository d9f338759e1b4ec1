//! Single write connection behind a mutex, with the PRAGMA profile
//! applied at open.
//!
//! Snapshot persistence is write-mostly (one bulk write per build, one
//! bulk read at startup), so a single serialized connection is enough; no
//! read pool.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use trellis_core::errors::TrellisResult;

use crate::to_storage_err;

/// Owns the SQLite connection. All access goes through `with_conn`.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a file-backed connection with pragmas applied.
    pub fn open(path: &Path) -> TrellisResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory connection (for testing).
    pub fn open_in_memory() -> TrellisResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run a closure against the connection.
    pub fn with_conn<F, T>(&self, f: F) -> TrellisResult<T>
    where
        F: FnOnce(&Connection) -> TrellisResult<T>,
    {
        let guard = match self.conn.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&guard)
    }
}

/// Apply performance and safety pragmas to a connection.
fn apply_pragmas(conn: &Connection) -> TrellisResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
