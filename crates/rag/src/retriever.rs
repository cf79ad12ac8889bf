//! `HybridSearchEngine` (spec.md §4.8).
//!
//! Fusion deliberately does NOT use Reciprocal Rank Fusion. The original
//! service (`hybrid_search_service.py`) normalizes each side's scores
//! independently with min-max scaling, then combines them with a weighted
//! sum — RRF would compress the score distribution to rank position alone
//! and discard the magnitude information the normalization step is there
//! to preserve.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{instrument, warn};

use nyayarag_core::{
    Document, Embedder, MetadataFilter, Reranker, Result, RetrieveOptions, Retriever, SearchSource,
};

use crate::bm25::Bm25Index;

/// Candidates scoring below this after reranking are dropped (spec.md
/// §4.8 step 7).
const RERANK_SCORE_THRESHOLD: f32 = 0.3;

/// A single passage backing the sparse/dense indices, addressed by
/// position in both `Bm25Index` and the dense embedding matrix.
#[derive(Debug, Clone)]
pub struct IndexedPassage {
    pub id: String,
    pub content: String,
    pub embedding: Vec<f32>,
    pub metadata: HashMap<String, serde_json::Value>,
}

pub struct HybridSearchEngine {
    name: String,
    passages: Vec<IndexedPassage>,
    bm25: Bm25Index,
    embedder: Option<Arc<dyn Embedder>>,
    reranker: Option<Arc<dyn Reranker>>,
}

impl HybridSearchEngine {
    pub fn new(name: impl Into<String>, passages: Vec<IndexedPassage>) -> Self {
        let texts: Vec<&str> = passages.iter().map(|p| p.content.as_str()).collect();
        let bm25 = Bm25Index::build(&texts, crate::bm25::Bm25Params::default());
        Self {
            name: name.into(),
            passages,
            bm25,
            embedder: None,
            reranker: None,
        }
    }

    pub fn with_embedder(mut self, embedder: Arc<dyn Embedder>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    pub fn with_reranker(mut self, reranker: Arc<dyn Reranker>) -> Self {
        self.reranker = Some(reranker);
        self
    }

    fn matches_filters(&self, passage: &IndexedPassage, filters: &[MetadataFilter]) -> bool {
        filters.iter().all(|filter| {
            let Some(value) = passage.metadata.get(&filter.field) else {
                return false;
            };
            match filter.op {
                nyayarag_core::FilterOp::Equals => value == &filter.value,
                nyayarag_core::FilterOp::NotEquals => value != &filter.value,
                nyayarag_core::FilterOp::Contains => value
                    .as_str()
                    .zip(filter.value.as_str())
                    .map(|(v, f)| v.contains(f))
                    .unwrap_or(false),
            }
        })
    }

    fn sparse_scores(&self, query: &str, eligible: &[usize]) -> HashMap<usize, f32> {
        eligible
            .iter()
            .map(|&i| (i, self.bm25.score(query, i)))
            .collect()
    }

    async fn dense_scores(&self, query: &str, eligible: &[usize]) -> Result<HashMap<usize, f32>> {
        let Some(embedder) = &self.embedder else {
            return Ok(HashMap::new());
        };
        let query_vec = embedder.embed_query(query).await?;
        Ok(eligible
            .iter()
            .map(|&i| (i, cosine_similarity(&query_vec, &self.passages[i].embedding)))
            .collect())
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a > 0.0 && norm_b > 0.0 {
        dot / (norm_a * norm_b)
    } else {
        0.0
    }
}

/// Independent min-max normalization of a score map to `[0, 1]`. A
/// constant score set (including the empty set) normalizes to all zeros
/// rather than dividing by zero.
fn min_max_normalize(scores: &HashMap<usize, f32>) -> HashMap<usize, f32> {
    if scores.is_empty() {
        return HashMap::new();
    }
    let min = scores.values().cloned().fold(f32::INFINITY, f32::min);
    let max = scores.values().cloned().fold(f32::NEG_INFINITY, f32::max);
    let range = max - min;

    scores
        .iter()
        .map(|(&i, &score)| {
            let normalized = if range > 1e-9 { (score - min) / range } else { 0.0 };
            (i, normalized)
        })
        .collect()
}

#[async_trait]
impl Retriever for HybridSearchEngine {
    #[instrument(skip(self, options), fields(engine = %self.name))]
    async fn search(&self, query: &str, options: &RetrieveOptions) -> Result<Vec<Document>> {
        let eligible: Vec<usize> = self
            .passages
            .iter()
            .enumerate()
            .filter(|(_, p)| self.matches_filters(p, &options.filters))
            .map(|(i, _)| i)
            .collect();

        if eligible.is_empty() {
            return Ok(Vec::new());
        }

        let sparse_raw = self.sparse_scores(query, &eligible);
        let dense_raw = match self.dense_scores(query, &eligible).await {
            Ok(scores) => scores,
            Err(err) => {
                warn!(error = %err, "dense retrieval unavailable, falling back to sparse-only");
                HashMap::new()
            }
        };

        let sparse_norm = min_max_normalize(&sparse_raw);
        let dense_norm = min_max_normalize(&dense_raw);

        let lexical_weight = options.lexical_weight.clamp(0.0, 1.0);
        let dense_weight = 1.0 - lexical_weight;

        let mut fused: Vec<(usize, f32, Option<f32>, Option<f32>)> = eligible
            .iter()
            .map(|&i| {
                let sparse = sparse_norm.get(&i).copied();
                let dense = dense_norm.get(&i).copied();
                let score = lexical_weight * sparse.unwrap_or(0.0) + dense_weight * dense.unwrap_or(0.0);
                (i, score, dense, sparse)
            })
            .collect();

        fused.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let candidate_count = (options.top_k * 4).max(options.top_k);
        fused.truncate(candidate_count);

        let mut documents: Vec<Document> = fused
            .into_iter()
            .map(|(i, score, dense, sparse)| {
                let passage = &self.passages[i];
                let source = match (dense, sparse) {
                    (Some(_), Some(_)) => SearchSource::Hybrid,
                    (Some(_), None) => SearchSource::Dense,
                    _ => SearchSource::Sparse,
                };
                let mut doc = Document::new(passage.id.clone(), passage.content.clone(), score, source);
                doc.metadata = passage.metadata.clone();
                doc.score_components.dense = dense;
                doc.score_components.sparse = sparse;
                doc
            })
            .collect();

        if options.use_reranker {
            if let Some(reranker) = &self.reranker {
                match reranker.rerank(query, &documents).await {
                    Ok(reranked) => {
                        documents = reranked
                            .into_iter()
                            .map(|r| {
                                let mut doc = r.document;
                                doc.score_components.rerank = Some(r.score);
                                doc.score = r.score;
                                doc
                            })
                            .collect();
                        documents
                            .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
                        documents.retain(|d| d.score >= RERANK_SCORE_THRESHOLD);
                    }
                    Err(err) => {
                        warn!(error = %err, "reranker unavailable, keeping fused order");
                    }
                }
            }
        }

        documents.truncate(options.top_k);
        Ok(documents)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nyayarag_core::RetrieveOptions;

    fn passage(id: &str, content: &str, embedding: Vec<f32>) -> IndexedPassage {
        IndexedPassage {
            id: id.to_string(),
            content: content.to_string(),
            embedding,
            metadata: HashMap::new(),
        }
    }

    #[test]
    fn min_max_normalize_handles_constant_scores() {
        let mut scores = HashMap::new();
        scores.insert(0, 0.5);
        scores.insert(1, 0.5);
        let normalized = min_max_normalize(&scores);
        assert_eq!(normalized[&0], 0.0);
        assert_eq!(normalized[&1], 0.0);
    }

    #[test]
    fn min_max_normalize_handles_empty() {
        let scores = HashMap::new();
        assert!(min_max_normalize(&scores).is_empty());
    }

    #[tokio::test]
    async fn sparse_only_search_ranks_by_bm25() {
        let passages = vec![
            passage("s1", "murder and culpable homicide under the penal code", vec![]),
            passage("s2", "company director fiduciary duty", vec![]),
        ];
        let engine = HybridSearchEngine::new("test", passages);
        let options = RetrieveOptions::default().with_top_k(2).without_reranker();
        let results = engine.search("murder penal code", &options).await.unwrap();
        assert_eq!(results[0].id, "s1");
    }
}
