//! Generator (L0) backend and prompt construction (spec.md §4.6, §4.7).
//!
//! `backend::OllamaBackend` implements `nyayarag_core::LanguageModel`
//! against a local Ollama server. `prompt::PromptBuilder` assembles the
//! constrained, context-bearing prompt `Summarizer` hands to the
//! generator. `template::render_fallback` provides the deterministic
//! Markdown renderer `Responder` falls back to when the generator is
//! unavailable (spec.md §4.7 "Generator unavailable").

pub mod backend;
pub mod prompt;
pub mod template;

pub use backend::OllamaBackend;
pub use prompt::PromptBuilder;
pub use template::render_fallback;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
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

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout(std::time::Duration::from_secs(0))
        } else {
            LlmError::Network(err.to_string())
        }
    }
}

impl From<LlmError> for nyayarag_core::Error {
    fn from(err: LlmError) -> Self {
        let generation = match err {
            LlmError::Network(msg) => nyayarag_core::GenerationError::Network(msg),
            LlmError::Api(msg) => nyayarag_core::GenerationError::Api(msg),
            LlmError::InvalidResponse(msg) => nyayarag_core::GenerationError::InvalidResponse(msg),
            LlmError::Configuration(msg) => nyayarag_core::GenerationError::Configuration(msg),
            LlmError::Timeout(d) => nyayarag_core::GenerationError::Timeout(d),
            LlmError::Unavailable => nyayarag_core::GenerationError::Unavailable,
        };
        generation.into()
    }
}
