//! Core traits and types for the legal query orchestration core.
//!
//! This crate provides foundational types used across the retrieval,
//! generation, and pipeline crates:
//! - Trait seams for pluggable backends (Generator, Retriever, Reranker,
//!   Embedder, StructuredStore)
//! - The request data model (`RequestContext` and the record types it
//!   carries: statutes, cases, mappings, citations, chunks)
//! - Script/language detection
//! - Error types

pub mod context;
pub mod domain;
pub mod error;
pub mod language;
pub mod llm_types;
pub mod records;
pub mod traits;

pub use context::{CitedSection, DocumentSummary, ErrorRecord, RequestContext, StageId, StageRecord, StageState};
pub use domain::Domain;
pub use error::{Error, GenerationError, Result, RetrievalError, StoreError};
pub use language::{detect, DetectionResult, Language, Script};
pub use llm_types::{FinishReason, GenerateRequest, GenerateResponse, Message, Role, StreamChunk, TokenUsage};
pub use records::{Case, Chunk, ChunkMetadata, Citation, CitationType, Entity, Mapping, MappingType, RegulatoryNotes, Statute};
pub use traits::{
    Document, Embedder, FilterOp, LanguageModel, MetadataFilter, Reranker, RerankedDocument,
    RetrieveOptions, Retriever, SearchSource, Stage, StructuredStore,
};
