// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The file record collection violates an input invariant.
    /// The pipeline aborts rather than building a partially-correct graph.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A workflow query targeted a node id that is not in the graph.
    /// Recoverable: the caller can re-prompt with a valid id.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
