//! Deterministic hashed bag-of-words embedding provider.
//!
//! Buckets terms into a fixed-dimension vector by FNV-1a hash, weights by
//! log-scaled term frequency, and L2-normalizes. No network, no model
//! files; the same text always maps to the same vector.

use std::collections::HashMap;

use trellis_core::errors::TrellisResult;
use trellis_core::traits::IEmbeddingProvider;

/// Fallback embedding provider.
///
/// Far weaker semantically than a neural model, but always available and
/// fully deterministic, which the build-idempotence tests rely on.
pub struct HashedBowProvider {
    dimensions: usize,
}

impl HashedBowProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// FNV-1a bucket index for a term.
    fn bucket(term: &str, dims: usize) -> usize {
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in term.as_bytes() {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
        (hash as usize) % dims
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for term in text
            .split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|t| !t.is_empty())
        {
            *counts.entry(term.to_lowercase()).or_default() += 1;
        }

        let mut vector = vec![0.0f32; self.dimensions];
        if counts.is_empty() {
            return vector;
        }

        // Accumulate in sorted term order: bucket collisions must sum in a
        // fixed order or float rounding breaks reproducibility.
        let mut terms: Vec<(&String, &u32)> = counts.iter().collect();
        terms.sort_unstable();
        for (term, count) in terms {
            let weight = 1.0 + (*count as f32).ln();
            vector[Self::bucket(term, self.dimensions)] += weight;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

impl IEmbeddingProvider for HashedBowProvider {
    fn embed(&self, text: &str) -> TrellisResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> TrellisResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-bow"
    }

    fn is_available(&self) -> bool {
        true
    }
}
