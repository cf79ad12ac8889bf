//! Error types for the legal query orchestration core.
//!
//! Every stage and backend converts its local error into this crate's
//! `Error` eventually; no stage propagates a Rust `Err` out of its `run` —
//! see `pipeline::stages` — this type exists for the pieces (stores,
//! backends, config loaders) that sit underneath the stage boundary and
//! still need a typed `Result`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("input invalid: {0}")]
    InputInvalid(String),

    #[error("cancelled")]
    Cancelled,
}

/// Failures from the hybrid search stack (Embedder/Reranker/VectorIndex/LexicalIndex).
#[derive(Error, Debug, Clone)]
pub enum RetrievalError {
    #[error("embedder unavailable: {0}")]
    EmbedderUnavailable(String),

    #[error("vector index error: {0}")]
    VectorIndex(String),

    #[error("lexical index error: {0}")]
    LexicalIndex(String),

    #[error("reranker unavailable: {0}")]
    RerankerUnavailable(String),

    #[error("malformed index entry: {0}")]
    MalformedIndexEntry(String),

    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),
}

/// Failures from the Generator (LLM) backend.
#[derive(Error, Debug, Clone)]
pub enum GenerationError {
    #[error("network error: {0}")]
    Network(String),

    #[error("api error: {0}")]
    Api(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("generator unavailable")]
    Unavailable,
}

/// Failures from the structured store (statutes/cases/mappings).
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// `Timeout` is always folded into `ExternalUnavailable`-shaped handling at
/// the stage boundary (spec §7): callers match on the inner kind, not on a
/// distinct `Timeout` variant of `Error` itself.
impl Error {
    pub fn is_external_unavailable(&self) -> bool {
        matches!(
            self,
            Error::Retrieval(RetrievalError::EmbedderUnavailable(_))
                | Error::Retrieval(RetrievalError::VectorIndex(_))
                | Error::Retrieval(RetrievalError::LexicalIndex(_))
                | Error::Retrieval(RetrievalError::RerankerUnavailable(_))
                | Error::Retrieval(RetrievalError::Timeout(_))
                | Error::Generation(GenerationError::Network(_))
                | Error::Generation(GenerationError::Unavailable)
                | Error::Generation(GenerationError::Timeout(_))
                | Error::Store(StoreError::Backend(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_unavailable_classification() {
        let e: Error = RetrievalError::Timeout(std::time::Duration::from_secs(1)).into();
        assert!(e.is_external_unavailable());

        let e: Error = StoreError::NotFound("302".into()).into();
        assert!(!e.is_external_unavailable());
    }
}
