use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::GraphError;

use super::chunk::ChunkNode;
use super::edge::SimilarityEdge;

/// An immutable, versioned graph state published for reads.
///
/// Built once by the graph builder, then shared behind `Arc` by any number
/// of concurrent readers. An older snapshot stays alive for in-flight
/// requests until the last reader drops its handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Monotonically increasing build version.
    pub version: u64,
    /// When this snapshot was assembled.
    pub built_at: DateTime<Utc>,
    nodes: HashMap<String, ChunkNode>,
    /// Outgoing edges per node, sorted by target id. Both directions of an
    /// unordered similarity pair are materialized.
    adjacency: HashMap<String, Vec<SimilarityEdge>>,
    /// Number of unordered similarity pairs in the graph.
    edge_count: usize,
}

impl GraphSnapshot {
    /// The snapshot a fresh store starts from when nothing is persisted.
    pub fn empty(version: u64) -> Self {
        Self {
            version,
            built_at: Utc::now(),
            nodes: HashMap::new(),
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Assemble a snapshot from a node set and unordered candidate edges.
    ///
    /// Each unordered pair is materialized in both directions; adjacency
    /// lists are sorted by target id so identical inputs always produce a
    /// structurally identical snapshot.
    pub fn assemble(
        version: u64,
        built_at: DateTime<Utc>,
        nodes: Vec<ChunkNode>,
        edges: &[SimilarityEdge],
    ) -> Self {
        let nodes: HashMap<String, ChunkNode> =
            nodes.into_iter().map(|n| (n.id.clone(), n)).collect();

        let mut adjacency: HashMap<String, Vec<SimilarityEdge>> = HashMap::new();
        let mut edge_count = 0;
        for edge in edges {
            if !nodes.contains_key(&edge.source) || !nodes.contains_key(&edge.target) {
                continue;
            }
            edge_count += 1;
            adjacency
                .entry(edge.source.clone())
                .or_default()
                .push(edge.clone());
            adjacency
                .entry(edge.target.clone())
                .or_default()
                .push(SimilarityEdge::new(
                    edge.target.clone(),
                    edge.source.clone(),
                    edge.weight,
                ));
        }
        for list in adjacency.values_mut() {
            list.sort_by(|a, b| a.target.cmp(&b.target));
        }

        Self {
            version,
            built_at,
            nodes,
            adjacency,
            edge_count,
        }
    }

    /// Resolve a node within this snapshot.
    pub fn node(&self, id: &str) -> Result<&ChunkNode, GraphError> {
        self.nodes.get(id).ok_or_else(|| GraphError::NodeNotFound {
            id: id.to_string(),
            version: self.version,
        })
    }

    /// Outgoing edges of a node, sorted by target id. Empty for unknown or
    /// isolated nodes.
    pub fn neighbors(&self, id: &str) -> &[SimilarityEdge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All nodes, unordered.
    pub fn nodes(&self) -> impl Iterator<Item = &ChunkNode> {
        self.nodes.values()
    }

    /// Node ids in lexicographic order (deterministic iteration).
    pub fn sorted_node_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of unordered similarity pairs.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// blake3 checksum over version, counts, and every node in id order:
    /// its id, text, exact embedding bits, and its directed edges
    /// (endpoints + exact weight bits). Used to verify persisted snapshots
    /// on load; tampering with chunk content fails verification, not just
    /// tampering with structure.
    pub fn checksum(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.version.to_le_bytes());
        hasher.update(&(self.nodes.len() as u64).to_le_bytes());
        hasher.update(&(self.edge_count as u64).to_le_bytes());

        let mut entries: Vec<(&String, &ChunkNode)> = self.nodes.iter().collect();
        entries.sort_unstable_by_key(|(id, _)| *id);
        for (id, node) in entries {
            hasher.update(id.as_bytes());
            hasher.update(&[0]);
            hasher.update(node.text.as_bytes());
            hasher.update(&[0]);
            for x in &node.embedding {
                hasher.update(&x.to_le_bytes());
            }
            hasher.update(&[0]);
            for edge in self.neighbors(id) {
                hasher.update(edge.target.as_bytes());
                hasher.update(&[0]);
                hasher.update(&edge.weight.to_bits().to_le_bytes());
            }
        }
        hasher.finalize().to_hex().to_string()
    }
}
