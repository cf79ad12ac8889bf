//! Trait seams for pluggable backends.
//!
//! ```text
//! Generation:
//!   - LanguageModel: chat-style text generation (the Generator, L0)
//!
//! Retrieval:
//!   - Retriever: hybrid dense+sparse passage search (L0)
//!   - Embedder: dense vector production (L0)
//!   - Reranker: cross-encoder scoring of (query, passage) pairs (L0)
//!
//! Structured data:
//!   - StructuredStore: statutes/cases/mappings key lookup (L0)
//!
//! Pipeline:
//!   - Stage: the uniform run(ctx) -> ctx contract every stage implements
//! ```

mod llm;
mod retriever;
mod stage;
mod store;

pub use llm::LanguageModel;
pub use retriever::{
    Document, Embedder, FilterOp, MetadataFilter, Reranker, RerankedDocument, RetrieveOptions,
    Retriever, SearchSource,
};
pub use stage::Stage;
pub use store::StructuredStore;
