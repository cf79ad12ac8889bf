//! Fixed data tables and per-deployment settings for the legal query
//! orchestration core.
//!
//! Most of this crate is static reference data consulted at runtime by the
//! pipeline stages: per-domain act lists and regulatory notes (`acts`), the
//! BM25 domain classification corpus (`corpus`), the official source
//! registry and IPC section doc-id table (`citations`), legal-text
//! cleaning patterns (`text_cleaning`), and bilingual prompt/disclaimer/
//! rejection text (`prompts`). `settings` is the exception: typed,
//! per-deployment configuration (retrieval weights, generator parameters,
//! domain-gate thresholds, log level) loaded from YAML/JSON plus
//! environment variables.

pub mod acts;
pub mod citations;
pub mod corpus;
pub mod prompts;
pub mod settings;
pub mod text_cleaning;

pub use acts::{acts_for_domain, regulatory_notes_for, RegulatoryNoteTemplate, JURISDICTION_ACTS, REGULATORY_NOTES};
pub use citations::{
    ipc_section_doc_id, official_source, OfficialSource, COMMON_IPC_SECTIONS, IPC_SECTION_DOCS,
    OFFICIAL_SOURCES,
};
pub use corpus::{corpus_for_domain, DOMAIN_CORPUS, STOP_WORDS};
pub use settings::{DomainGateSettings, GeneratorSettings, ObservabilitySettings, RetrievalSettings, Settings};
pub use prompts::{
    disclaimer_for, extract_takeaway, rejection_text, system_preamble_for, RejectionTemplates,
    DISCLAIMER_EN, DISCLAIMER_HI, REJECTION_TEMPLATES, SYSTEM_PREAMBLE_EN, SYSTEM_PREAMBLE_HI,
    SYSTEM_PREAMBLE_HINGLISH, TAKEAWAY_HEADER,
};
pub use text_cleaning::{clean_legal_text, AMENDMENT_ANNOTATION, FOOTNOTE_MARKER, OCR_WORD_JOIN_FIXES};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment error: {0}")]
    Environment(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
