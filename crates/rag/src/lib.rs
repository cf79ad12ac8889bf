//! Hybrid retrieval engine: BM25 sparse search, dense vector search, and
//! domain classification fusion, behind the `nyayarag_core::Retriever`
//! seam.
//!
//! Unlike a conventional RRF-based hybrid retriever, fusion here follows
//! the domain's normative algorithm (spec.md §4.8): both sides are
//! independently min-max normalized to `[0, 1]`, then combined by a
//! weighted sum. Reranking is a best-effort step — a `Reranker` backend is
//! optional, and the engine degrades to pass-through fused ranking when
//! none is supplied or when the configured backend is unavailable.

pub mod bm25;
pub mod domain_classifier;
pub mod reranker;
pub mod retriever;

pub use bm25::{Bm25Index, Bm25Params};
pub use domain_classifier::{classify_domain, keyword_fallback_domain, DomainClassification, DomainScore};
pub use reranker::SimpleScorerReranker;
pub use retriever::HybridSearchEngine;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RagError {
    #[error("embedder unavailable: {0}")]
    EmbedderUnavailable(String),

    #[error("lexical index error: {0}")]
    LexicalIndex(String),

    #[error("reranker unavailable: {0}")]
    RerankerUnavailable(String),

    #[error("malformed index entry: {0}")]
    MalformedIndexEntry(String),
}

impl From<RagError> for nyayarag_core::Error {
    fn from(err: RagError) -> Self {
        match err {
            RagError::EmbedderUnavailable(msg) => {
                nyayarag_core::RetrievalError::EmbedderUnavailable(msg).into()
            }
            RagError::LexicalIndex(msg) => nyayarag_core::RetrievalError::LexicalIndex(msg).into(),
            RagError::RerankerUnavailable(msg) => {
                nyayarag_core::RetrievalError::RerankerUnavailable(msg).into()
            }
            RagError::MalformedIndexEntry(msg) => {
                nyayarag_core::RetrievalError::MalformedIndexEntry(msg).into()
            }
        }
    }
}
