/// Trellis system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard cap on path expansion depth, regardless of configuration.
pub const MAX_SUPPORTED_PATH_DEPTH: usize = 16;

/// Hard cap on the total number of paths a single request may explore.
pub const MAX_SUPPORTED_EXPLORATION: usize = 1_000_000;

/// Version assigned to the empty snapshot a fresh store starts from.
pub const EMPTY_SNAPSHOT_VERSION: u64 = 0;

/// Number of persisted snapshots kept around after a compaction pass.
pub const SNAPSHOTS_KEPT_AFTER_PRUNE: usize = 3;
