//! Crate-wide error type: one flat set of failure kinds shared across
//! every component, surfaced through a single `thiserror`-derived enum
//! rather than a per-algorithm error type.

use thiserror::Error;

/// Every way a public operation on this crate can fail.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node id {0:?} already exists")]
    DuplicateId(String),

    #[error("unknown node id {0:?}")]
    UnknownNode(String),

    #[error("target not found")]
    NotFound,

    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("parse error at line {line}: {fragment}")]
    ParseError { line: usize, fragment: String },

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerdeError(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

impl From<serde_json::Error> for GraphError {
    fn from(e: serde_json::Error) -> Self {
        GraphError::SerdeError(e.to_string())
    }
}

impl From<bincode::Error> for GraphError {
    fn from(e: bincode::Error) -> Self {
        GraphError::SerdeError(e.to_string())
    }
}
