//! Hybrid retrieval traits (spec.md §4.8 `HybridSearchEngine`).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;

/// Dense vector production, offline (documents) and online (queries).
#[async_trait]
pub trait Embedder: Send + Sync + 'static {
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>>;
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
    fn dimension(&self) -> usize;
}

/// Cross-encoder scoring of `(query, passage)` pairs.
#[async_trait]
pub trait Reranker: Send + Sync + 'static {
    async fn rerank(&self, query: &str, candidates: &[Document]) -> Result<Vec<RerankedDocument>>;
    fn name(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct RerankedDocument {
    pub document: Document,
    pub score: f32,
}

/// Which retrieval path produced a result (spec.md §4.8 step 5 "hybrid").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchSource {
    Dense,
    Sparse,
    Hybrid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreComponents {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dense: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparse: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rerank: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub content: String,
    pub score: f32,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
    pub source: SearchSource,
    #[serde(default)]
    pub score_components: ScoreComponents,
}

impl Document {
    pub fn new(id: impl Into<String>, content: impl Into<String>, score: f32, source: SearchSource) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            score,
            metadata: HashMap::new(),
            source,
            score_components: ScoreComponents::default(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataFilter {
    pub field: String,
    pub op: FilterOp,
    pub value: serde_json::Value,
}

impl MetadataFilter {
    pub fn eq(field: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            field: field.into(),
            op: FilterOp::Equals,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum FilterOp {
    Equals,
    NotEquals,
    Contains,
}

/// Options for one `HybridSearchEngine::search` call (spec.md §4.8).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrieveOptions {
    pub top_k: usize,
    #[serde(default)]
    pub filters: Vec<MetadataFilter>,
    #[serde(default = "default_true")]
    pub use_reranker: bool,
    /// Fusion weight given to the lexical (BM25) side; the dense side gets
    /// `1.0 - lexical_weight`. Default 0.5; callers may request 0.7 in
    /// favor of lexical, per spec.md §4.8 step 5.
    #[serde(default = "default_lexical_weight")]
    pub lexical_weight: f32,
}

fn default_true() -> bool {
    true
}

fn default_lexical_weight() -> f32 {
    0.5
}

impl Default for RetrieveOptions {
    fn default() -> Self {
        Self {
            top_k: 5,
            filters: Vec::new(),
            use_reranker: true,
            lexical_weight: 0.5,
        }
    }
}

impl RetrieveOptions {
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_filter(mut self, filter: MetadataFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn without_reranker(mut self) -> Self {
        self.use_reranker = false;
        self
    }

    pub fn with_lexical_weight(mut self, weight: f32) -> Self {
        self.lexical_weight = weight.clamp(0.0, 1.0);
        self
    }
}

/// `HybridSearchEngine` (spec.md §4.8): top-k passages given a query and
/// optional metadata filters.
#[async_trait]
pub trait Retriever: Send + Sync + 'static {
    async fn search(&self, query: &str, options: &RetrieveOptions) -> Result<Vec<Document>>;

    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrieve_options_builder() {
        let options = RetrieveOptions::default()
            .with_top_k(10)
            .with_filter(MetadataFilter::eq("domain", "criminal"))
            .without_reranker()
            .with_lexical_weight(0.7);

        assert_eq!(options.top_k, 10);
        assert_eq!(options.filters.len(), 1);
        assert!(!options.use_reranker);
        assert_eq!(options.lexical_weight, 0.7);
    }
}
