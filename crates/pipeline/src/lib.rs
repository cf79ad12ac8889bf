//! The seven `Stage` implementations driven by the orchestrator in fixed
//! order (spec.md §2, §9 "Dynamic dispatch over agents"): QueryAnalyzer,
//! StatuteRetriever, CaseRetriever, RegulatoryFilter, CitationBuilder,
//! Summarizer, Responder.
//!
//! Every stage implements `nyayarag_core::Stage::run`, which never
//! propagates a Rust error: internal failures are folded into
//! `ctx.errors` via `RequestContext::error_stage` and the stage falls
//! back to a safe default rather than aborting the request.

pub mod query_analyzer;
pub mod statute_retriever;
pub mod case_retriever;
pub mod regulatory_filter;
pub mod citation_builder;
pub mod summarizer;
pub mod responder;

pub use query_analyzer::QueryAnalyzer;
pub use statute_retriever::StatuteRetriever;
pub use case_retriever::CaseRetriever;
pub use regulatory_filter::RegulatoryFilter;
pub use citation_builder::CitationBuilder;
pub use summarizer::Summarizer;
pub use responder::Responder;

use thiserror::Error;

/// Failures surfaced by the (synchronous, non-`Stage`) helpers a stage
/// calls into before folding them into `ctx.errors`. Stages themselves
/// never return `Err` from `run`; this type exists for the pieces under
/// the stage boundary (store/retriever/generator calls) that still need
/// a typed `Result` to `match` on.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("structured store error: {0}")]
    Store(String),

    #[error("retrieval error: {0}")]
    Retrieval(String),

    #[error("generation error: {0}")]
    Generation(String),
}

impl From<nyayarag_core::Error> for PipelineError {
    fn from(err: nyayarag_core::Error) -> Self {
        match err {
            nyayarag_core::Error::Store(e) => PipelineError::Store(e.to_string()),
            nyayarag_core::Error::Retrieval(e) => PipelineError::Retrieval(e.to_string()),
            nyayarag_core::Error::Generation(e) => PipelineError::Generation(e.to_string()),
            other => PipelineError::Retrieval(other.to_string()),
        }
    }
}

impl From<PipelineError> for nyayarag_core::Error {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Store(msg) => nyayarag_core::StoreError::Backend(msg).into(),
            PipelineError::Retrieval(msg) => nyayarag_core::RetrievalError::LexicalIndex(msg).into(),
            PipelineError::Generation(msg) => nyayarag_core::GenerationError::Api(msg).into(),
        }
    }
}
