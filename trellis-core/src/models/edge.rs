use serde::{Deserialize, Serialize};

/// A weighted similarity edge between two chunk nodes.
///
/// Weight is cosine similarity clamped to [0, 1]. Edges are derived data:
/// they exist only inside the snapshot that was built from them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

impl SimilarityEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}
