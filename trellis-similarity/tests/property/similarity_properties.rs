//! Property tests: weight range, symmetry, blocked/naive equivalence.

use proptest::prelude::*;

use trellis_similarity::{candidate_edges, cosine_similarity, naive_candidate_edges};

const DIM: usize = 8;

fn vector_strategy() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0f32..1.0, DIM)
}

fn corpus_strategy() -> impl Strategy<Value = Vec<(String, Vec<f32>)>> {
    prop::collection::vec(vector_strategy(), 2..12).prop_map(|vectors| {
        vectors
            .into_iter()
            .enumerate()
            .map(|(i, v)| (format!("node-{i:02}"), v))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_edge_weights_are_in_unit_interval(
        corpus in corpus_strategy(),
        threshold in 0.0f64..0.9,
    ) {
        let edges = candidate_edges(&corpus, DIM, threshold, 4).unwrap();
        for edge in &edges {
            prop_assert!(edge.weight >= 0.0 && edge.weight <= 1.0);
            prop_assert!(edge.weight > threshold);
        }
    }

    #[test]
    fn prop_cosine_is_symmetric(a in vector_strategy(), b in vector_strategy()) {
        prop_assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn prop_blocked_equals_naive(
        corpus in corpus_strategy(),
        threshold in 0.0f64..0.9,
        block_size in 1usize..6,
    ) {
        let mut blocked = candidate_edges(&corpus, DIM, threshold, block_size).unwrap();
        let mut naive = naive_candidate_edges(&corpus, DIM, threshold).unwrap();
        let key = |e: &trellis_core::models::SimilarityEdge| (e.source.clone(), e.target.clone());
        blocked.sort_by_key(key);
        naive.sort_by_key(key);
        prop_assert_eq!(blocked.len(), naive.len());
        for (b, n) in blocked.iter().zip(naive.iter()) {
            prop_assert_eq!(&b.source, &n.source);
            prop_assert_eq!(&b.target, &n.target);
            prop_assert!((b.weight - n.weight).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_no_self_edges(corpus in corpus_strategy()) {
        let edges = candidate_edges(&corpus, DIM, 0.0, 4).unwrap();
        for edge in &edges {
            prop_assert_ne!(&edge.source, &edge.target);
        }
    }
}
