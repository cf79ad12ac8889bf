//! A small in-memory BM25 index.
//!
//! Tokenization matches the original's `hybrid_search_service.py::_tokenize`:
//! lowercase, split on non-word characters, drop empty tokens. No
//! stemming — the original doesn't stem either, and IPC/BNS section
//! numbers and act abbreviations are case- and form-sensitive enough that
//! stemming would hurt more than help.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("token pattern"));

pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_PATTERN
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct Bm25Params {
    pub k1: f32,
    pub b: f32,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.5, b: 0.75 }
    }
}

struct IndexedDoc {
    term_counts: HashMap<String, u32>,
    length: usize,
}

/// An in-memory BM25 index over a fixed corpus of documents, addressed by
/// position. Used both for sparse passage retrieval
/// (`HybridSearchEngine`) and for BM25-side domain classification
/// (`domain_classifier`).
pub struct Bm25Index {
    params: Bm25Params,
    docs: Vec<IndexedDoc>,
    doc_freq: HashMap<String, u32>,
    avg_doc_len: f32,
}

impl Bm25Index {
    pub fn build(documents: &[impl AsRef<str>], params: Bm25Params) -> Self {
        let mut docs = Vec::with_capacity(documents.len());
        let mut doc_freq: HashMap<String, u32> = HashMap::new();
        let mut total_len = 0usize;

        for doc in documents {
            let tokens = tokenize(doc.as_ref());
            let mut term_counts: HashMap<String, u32> = HashMap::new();
            for token in &tokens {
                *term_counts.entry(token.clone()).or_insert(0) += 1;
            }
            for term in term_counts.keys() {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
            total_len += tokens.len();
            docs.push(IndexedDoc {
                term_counts,
                length: tokens.len(),
            });
        }

        let avg_doc_len = if docs.is_empty() {
            0.0
        } else {
            total_len as f32 / docs.len() as f32
        };

        Self {
            params,
            docs,
            doc_freq,
            avg_doc_len,
        }
    }

    fn idf(&self, term: &str) -> f32 {
        let n = self.docs.len() as f32;
        let df = *self.doc_freq.get(term).unwrap_or(&0) as f32;
        ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
    }

    /// BM25 score of `query` against document at `doc_index`.
    pub fn score(&self, query: &str, doc_index: usize) -> f32 {
        let Some(doc) = self.docs.get(doc_index) else {
            return 0.0;
        };
        let query_terms = tokenize(query);
        let mut score = 0.0f32;

        for term in &query_terms {
            let tf = *doc.term_counts.get(term).unwrap_or(&0) as f32;
            if tf == 0.0 {
                continue;
            }
            let idf = self.idf(term);
            let numerator = tf * (self.params.k1 + 1.0);
            let denominator = tf
                + self.params.k1
                    * (1.0 - self.params.b
                        + self.params.b * (doc.length as f32 / self.avg_doc_len.max(1.0)));
            score += idf * (numerator / denominator);
        }

        score
    }

    /// Scores `query` against every document, returning `(index, score)`
    /// pairs sorted by descending score.
    pub fn search(&self, query: &str) -> Vec<(usize, f32)> {
        let mut scored: Vec<(usize, f32)> = (0..self.docs.len())
            .map(|i| (i, self.score(query, i)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_splits() {
        let tokens = tokenize("Section 302, IPC — murder!");
        assert_eq!(tokens, vec!["section", "302", "ipc", "murder"]);
    }

    #[test]
    fn scores_favor_matching_documents() {
        let docs = vec![
            "murder and culpable homicide under the penal code",
            "company director fiduciary duty under companies act",
            "divorce and maintenance under the hindu marriage act",
        ];
        let index = Bm25Index::build(&docs, Bm25Params::default());
        let results = index.search("murder penal code");
        assert_eq!(results[0].0, 0);
        assert!(results[0].1 > results[1].1);
    }

    #[test]
    fn empty_index_scores_zero() {
        let docs: Vec<&str> = vec![];
        let index = Bm25Index::build(&docs, Bm25Params::default());
        assert!(index.is_empty());
        assert!(index.search("anything").is_empty());
    }
}
