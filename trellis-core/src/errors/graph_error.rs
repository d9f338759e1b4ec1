/// Graph store and snapshot addressing errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("node '{id}' not found in snapshot version {version}")]
    NodeNotFound { id: String, version: u64 },

    #[error("refusing to publish version {offered}: current version is {current}")]
    StaleVersion { offered: u64, current: u64 },
}
