//! Orchestrates the seven `nyayarag_pipeline::Stage` implementations into
//! a single request lifecycle (spec.md §2, §9), grounded on
//! `orchestrator.py`: a unary `run` that returns the final
//! `RequestContext`, and a streaming `run_streaming` that emits an
//! `OrchestratorEvent` per stage transition plus incremental statutes,
//! case law, and citations as they become available.

pub mod orchestrator;

pub use orchestrator::{CancellationToken, Orchestrator, OrchestratorEvent};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("pipeline error: {0}")]
    Pipeline(String),

    #[error("request was cancelled")]
    Cancelled,
}

impl From<nyayarag_pipeline::PipelineError> for AgentError {
    fn from(err: nyayarag_pipeline::PipelineError) -> Self {
        AgentError::Pipeline(err.to_string())
    }
}

impl From<AgentError> for nyayarag_core::Error {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::Pipeline(msg) => nyayarag_core::RetrievalError::LexicalIndex(msg).into(),
            AgentError::Cancelled => nyayarag_core::Error::Cancelled,
        }
    }
}
