//! Cosine similarity over f32 vectors, accumulated in f64.

/// Cosine similarity between two vectors. Returns 0.0 when either vector
/// has zero norm. Callers are responsible for dimension checks.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Clamp a cosine value into the edge-weight range [0, 1].
///
/// Cosine can be negative for arbitrary vectors; anti-similar chunks carry
/// no retrieval signal here, so negative values collapse to 0 and the
/// weight invariant holds regardless of input.
pub fn clamp_weight(similarity: f64) -> f64 {
    similarity.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_have_similarity_one() {
        let v = vec![0.5f32, 0.5, 0.7];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn orthogonal_vectors_have_similarity_zero() {
        let a = vec![1.0f32, 0.0];
        let b = vec![0.0f32, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-9);
    }

    #[test]
    fn zero_norm_returns_zero() {
        let a = vec![0.0f32, 0.0];
        let b = vec![1.0f32, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn opposite_vectors_clamp_to_zero_weight() {
        let a = vec![1.0f32, 0.0];
        let b = vec![-1.0f32, 0.0];
        let sim = cosine_similarity(&a, &b);
        assert!(sim < 0.0);
        assert_eq!(clamp_weight(sim), 0.0);
    }

    #[test]
    fn symmetry() {
        let a = vec![0.3f32, 0.9, 0.1];
        let b = vec![0.8f32, 0.2, 0.4];
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }
}
