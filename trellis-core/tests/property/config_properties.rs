//! Property tests for configuration validation ranges and TOML loading.

use proptest::prelude::*;

use trellis_core::config::{GraphBuildConfig, PathScoringConfig, TrellisConfig};

proptest! {
    #[test]
    fn prop_in_range_tunables_validate(
        decay in 0.001f64..=1.0,
        prune in 0.0f64..2.0,
        similarity in 0.0f64..=1.0,
        depth in 1usize..=16,
        top_k in 1usize..100,
    ) {
        let config = TrellisConfig {
            graph: GraphBuildConfig {
                similarity_threshold: similarity,
                prune_threshold: prune,
                ..Default::default()
            },
            scoring: PathScoringConfig {
                decay_rate: decay,
                prune_threshold: prune,
                max_path_depth: depth,
                top_k_paths: top_k,
                ..Default::default()
            },
            ..Default::default()
        };
        prop_assert!(config.validate().is_ok());
    }

    #[test]
    fn prop_decay_above_one_is_rejected(decay in 1.0001f64..100.0) {
        let config = TrellisConfig {
            scoring: PathScoringConfig {
                decay_rate: decay,
                ..Default::default()
            },
            ..Default::default()
        };
        prop_assert!(config.validate().is_err());
    }

    #[test]
    fn prop_negative_thresholds_are_rejected(prune in -100.0f64..-0.0001) {
        let config = TrellisConfig {
            scoring: PathScoringConfig {
                prune_threshold: prune,
                ..Default::default()
            },
            ..Default::default()
        };
        prop_assert!(config.validate().is_err());
    }

    #[test]
    fn prop_similarity_threshold_outside_unit_interval_is_rejected(
        threshold in 1.0001f64..10.0,
    ) {
        let config = TrellisConfig {
            graph: GraphBuildConfig {
                similarity_threshold: threshold,
                ..Default::default()
            },
            ..Default::default()
        };
        prop_assert!(config.validate().is_err());
    }

    #[test]
    fn prop_toml_round_trip_preserves_tunables(
        decay in 0.01f64..=1.0,
        depth in 1usize..=16,
        top_k_seeds in 1usize..50,
    ) {
        let mut config = TrellisConfig::default();
        config.scoring.decay_rate = decay;
        config.scoring.max_path_depth = depth;
        config.retrieval.top_k_seeds = top_k_seeds;

        let raw = toml::to_string(&config).unwrap();
        let parsed: TrellisConfig = toml::from_str(&raw).unwrap();
        prop_assert!((parsed.scoring.decay_rate - decay).abs() < 1e-9);
        prop_assert_eq!(parsed.scoring.max_path_depth, depth);
        prop_assert_eq!(parsed.retrieval.top_k_seeds, top_k_seeds);
        prop_assert!(parsed.validate().is_ok());
    }
}
