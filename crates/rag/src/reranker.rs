//! Reranker backends.
//!
//! `HybridSearchEngine` treats reranking as optional: callers that don't
//! configure a `Reranker` simply get the fused dense/sparse order, and any
//! reranker that errors mid-request degrades the same way (see
//! `retriever::HybridSearchEngine::search`). `SimpleScorerReranker` below
//! is a keyword-overlap scorer usable either as a real (cheap) reranker or
//! as a stand-in for a heavier cross-encoder in environments where one
//! isn't deployed.

use async_trait::async_trait;
use std::collections::HashSet;

use nyayarag_core::{Document, RerankedDocument, Result, Reranker};

pub struct SimpleScorerReranker;

impl SimpleScorerReranker {
    pub fn score(query: &str, document: &str) -> f32 {
        let query_lower = query.to_lowercase();
        let doc_lower = document.to_lowercase();

        let query_words: HashSet<&str> = query_lower.split_whitespace().collect();
        let doc_words: HashSet<&str> = doc_lower.split_whitespace().collect();

        let overlap = query_words.intersection(&doc_words).count();
        let union = query_words.union(&doc_words).count();

        if union > 0 {
            overlap as f32 / union as f32
        } else {
            0.0
        }
    }
}

#[async_trait]
impl Reranker for SimpleScorerReranker {
    async fn rerank(&self, query: &str, candidates: &[Document]) -> Result<Vec<RerankedDocument>> {
        let mut scored: Vec<RerankedDocument> = candidates
            .iter()
            .map(|doc| RerankedDocument {
                document: doc.clone(),
                score: Self::score(query, &doc.content),
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        Ok(scored)
    }

    fn name(&self) -> &str {
        "simple-scorer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nyayarag_core::SearchSource;

    #[tokio::test]
    async fn reranks_by_keyword_overlap() {
        let reranker = SimpleScorerReranker;
        let candidates = vec![
            Document::new("a", "gold loan interest rate from kotak", 0.1, SearchSource::Sparse),
            Document::new("b", "weather forecast for tomorrow", 0.2, SearchSource::Sparse),
        ];

        let results = reranker.rerank("gold loan interest", &candidates).await.unwrap();
        assert_eq!(results[0].document.id, "a");
    }
}
