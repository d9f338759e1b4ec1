//! The retrieval orchestrator.
//!
//! A request captures the current snapshot exactly once and uses it for
//! every stage: cache probe, seed selection, path scoring, and context
//! assembly. A build publishing mid-request cannot mix versions into one
//! answer.

use std::sync::Arc;

use tracing::{debug, info};

use trellis_core::config::TrellisConfig;
use trellis_core::errors::{RetrievalError, TrellisResult};
use trellis_core::models::RetrievalOutcome;
use trellis_core::traits::{IAnswerGenerator, IEmbeddingProvider};
use trellis_graph::{GraphStore, PathScorer};

use crate::cache::{normalize_query, CacheLookup, CachedAnswer, RetrievalCache};
use crate::{context, seeds};

/// Serves retrieval requests against the currently-published snapshot.
pub struct RetrievalEngine {
    graph_store: Arc<GraphStore>,
    embedder: Arc<dyn IEmbeddingProvider>,
    generator: Arc<dyn IAnswerGenerator>,
    scorer: PathScorer,
    cache: RetrievalCache,
    config: TrellisConfig,
}

impl RetrievalEngine {
    pub fn new(
        graph_store: Arc<GraphStore>,
        embedder: Arc<dyn IEmbeddingProvider>,
        generator: Arc<dyn IAnswerGenerator>,
        config: TrellisConfig,
    ) -> Self {
        let scorer = PathScorer::new(config.scoring.clone());
        let cache = RetrievalCache::new(config.retrieval.cache_capacity);
        Self {
            graph_store,
            embedder,
            generator,
            scorer,
            cache,
            config,
        }
    }

    /// Answer a query for a requester.
    ///
    /// Fails with `EmptyGraph` before any provider is consulted when no
    /// snapshot has been built yet.
    pub fn retrieve(&self, requester: &str, raw_query: &str) -> TrellisResult<RetrievalOutcome> {
        let snapshot = self.graph_store.current_snapshot();
        if snapshot.is_empty() {
            return Err(RetrievalError::EmptyGraph.into());
        }

        let query = normalize_query(raw_query);
        match self.cache.lookup(requester, &query, snapshot.version) {
            CacheLookup::Hit(entry) => {
                info!(requester, version = snapshot.version, "cache hit");
                return Ok(RetrievalOutcome {
                    answer: entry.answer,
                    paths: entry.paths,
                    graph_version: entry.graph_version,
                    cache_hit: true,
                });
            }
            CacheLookup::MissStale => {
                debug!(requester, version = snapshot.version, "cache stale, recomputing");
            }
            CacheLookup::Miss => {}
        }

        let query_embedding = self.embedder.embed(&query)?;
        let seeds = seeds::select_seeds(&snapshot, &query_embedding, self.config.retrieval.top_k_seeds)?;
        if seeds.is_empty() {
            return Err(RetrievalError::NoSeeds.into());
        }

        let paths = self.scorer.score(&snapshot, &seeds);
        let context = context::condense(&paths, &snapshot)?;
        let answer = self.generator.generate(&context, &self.config.generation)?;

        self.cache.store(
            requester,
            &query,
            CachedAnswer {
                answer: answer.clone(),
                paths: paths.clone(),
                graph_version: snapshot.version,
            },
        );

        info!(
            requester,
            version = snapshot.version,
            paths = paths.len(),
            "retrieval complete"
        );
        Ok(RetrievalOutcome {
            answer,
            paths,
            graph_version: snapshot.version,
            cache_hit: false,
        })
    }
}
