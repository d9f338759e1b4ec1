//! Context condensation: turn ranked paths into the text block handed to
//! the answer generator.

use std::collections::HashSet;

use trellis_core::errors::TrellisResult;
use trellis_core::models::{GraphSnapshot, ScoredPath};

/// Concatenate the chunk texts along the ranked paths, best path first.
///
/// A node appearing in several paths contributes its text once, at the
/// position of its first (highest-ranked) appearance.
pub fn condense(paths: &[ScoredPath], snapshot: &GraphSnapshot) -> TrellisResult<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut sections: Vec<&str> = Vec::new();

    for path in paths {
        for id in &path.nodes {
            if seen.insert(id.as_str()) {
                sections.push(snapshot.node(id)?.text.as_str());
            }
        }
    }

    Ok(sections.join("\n\n"))
}
