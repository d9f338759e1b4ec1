/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("graph snapshot has no nodes; build the graph before querying")]
    EmptyGraph,

    #[error("no seed nodes qualified for query")]
    NoSeeds,
}
