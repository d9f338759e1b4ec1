//! Version-aware answer cache.
//!
//! Entries are keyed by (requester, normalized query) and stamped with the
//! snapshot version they were computed from. A lookup against a newer
//! snapshot evicts the stale entry instead of serving it, so a cached
//! answer never outlives the graph it came from.

use moka::sync::Cache;
use tracing::debug;

use trellis_core::models::ScoredPath;

/// A completed retrieval result held for replay.
#[derive(Debug, Clone)]
pub struct CachedAnswer {
    pub answer: String,
    pub paths: Vec<ScoredPath>,
    pub graph_version: u64,
}

/// What a cache probe found.
#[derive(Debug)]
pub enum CacheLookup {
    /// Entry present and computed from the current snapshot.
    Hit(CachedAnswer),
    /// Entry present but computed from an older snapshot; it was evicted.
    MissStale,
    /// No entry.
    Miss,
}

/// Bounded per-(requester, query) answer cache.
pub struct RetrievalCache {
    entries: Cache<(String, String), CachedAnswer>,
}

impl RetrievalCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            entries: Cache::new(capacity),
        }
    }

    /// Probe the cache for a (requester, normalized query) pair against the
    /// version of the snapshot serving the request.
    pub fn lookup(&self, requester: &str, query: &str, current_version: u64) -> CacheLookup {
        let key = (requester.to_string(), query_digest(query));
        match self.entries.get(&key) {
            Some(entry) if entry.graph_version == current_version => CacheLookup::Hit(entry),
            Some(entry) => {
                debug!(
                    requester,
                    cached_version = entry.graph_version,
                    current_version,
                    "evicting stale cache entry"
                );
                self.entries.invalidate(&key);
                CacheLookup::MissStale
            }
            None => CacheLookup::Miss,
        }
    }

    /// Store a completed retrieval.
    pub fn store(&self, requester: &str, query: &str, entry: CachedAnswer) {
        self.entries
            .insert((requester.to_string(), query_digest(query)), entry);
    }

    /// Number of live entries. Runs pending maintenance first so the count
    /// is accurate.
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fixed-size key component: blake3 of the normalized query, so arbitrarily
/// long queries don't bloat the key space.
fn query_digest(query: &str) -> String {
    blake3::hash(query.as_bytes()).to_hex().to_string()
}

/// Canonical form of a query for cache keying: lowercased, with runs of
/// whitespace collapsed to single spaces.
pub fn normalize_query(raw: &str) -> String {
    raw.split_whitespace()
        .map(|term| term.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
