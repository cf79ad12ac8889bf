//! Domain classification for the query-analysis gate (spec.md §4.1 rule 3),
//! grounded on `bm25_service.py`'s domain scorer: BM25 similarity against a
//! fixed per-domain corpus, fused with a semantic (cosine) classifier, with
//! the fusion weight itself depending on query length — short queries (at
//! most 3 tokens) lean more heavily on the lexical signal, since there's
//! too little text for embeddings to disambiguate reliably.

use std::collections::HashMap;

use nyayarag_core::Domain;
use nyayarag_config::corpus_for_domain;

use crate::bm25::{tokenize, Bm25Index, Bm25Params};

#[derive(Debug, Clone)]
pub struct DomainScore {
    pub domain: Domain,
    pub bm25: f32,
    pub semantic: f32,
    pub fused: f32,
}

#[derive(Debug, Clone)]
pub struct DomainClassification {
    pub scores: Vec<DomainScore>,
    pub top: Domain,
    pub top_score: f32,
}

impl DomainClassification {
    pub fn score_for(&self, domain: Domain) -> f32 {
        self.scores
            .iter()
            .find(|s| s.domain == domain)
            .map(|s| s.fused)
            .unwrap_or(0.0)
    }
}

/// A pluggable semantic similarity function: `(query, domain) -> cosine
/// similarity in [0, 1]`. Kept generic rather than requiring a concrete
/// `Embedder` so this module has no async dependency; callers typically
/// close over an `Arc<dyn Embedder>` and precomputed domain-corpus
/// embeddings.
pub type SemanticScorer<'a> = dyn Fn(&str, Domain) -> f32 + 'a;

/// Max-normalized BM25 score of `query` against `domain`'s fixed corpus,
/// treating each corpus pseudo-document as one line and taking the best
/// match, then normalizing across all domains so scores are comparable.
fn bm25_domain_scores(query: &str) -> HashMap<Domain, f32> {
    let mut raw = HashMap::new();
    let mut max_score = 0.0f32;

    for domain in Domain::ALL {
        let corpus = corpus_for_domain(domain);
        if corpus.is_empty() {
            raw.insert(domain, 0.0);
            continue;
        }
        let index = Bm25Index::build(corpus, Bm25Params::default());
        let best = index
            .search(query)
            .first()
            .map(|(_, score)| *score)
            .unwrap_or(0.0);
        max_score = max_score.max(best);
        raw.insert(domain, best);
    }

    if max_score > 0.0 {
        for score in raw.values_mut() {
            *score /= max_score;
        }
    }

    raw
}

/// Fuses BM25 and semantic domain scores per spec.md §4.1 rule 3: queries
/// of 3 tokens or fewer weight BM25 at 0.7 / semantic at 0.3; longer
/// queries weight them evenly at 0.5 / 0.5.
pub fn classify_domain(query: &str, semantic: &SemanticScorer<'_>) -> DomainClassification {
    let token_count = tokenize(query).len();
    let (bm25_weight, semantic_weight) = if token_count <= 3 {
        (0.7, 0.3)
    } else {
        (0.5, 0.5)
    };

    let bm25_scores = bm25_domain_scores(query);

    let mut scores: Vec<DomainScore> = Domain::ALL
        .into_iter()
        .map(|domain| {
            let bm25 = *bm25_scores.get(&domain).unwrap_or(&0.0);
            let semantic_score = semantic(query, domain).clamp(0.0, 1.0);
            let fused = bm25_weight * bm25 + semantic_weight * semantic_score;
            DomainScore {
                domain,
                bm25,
                semantic: semantic_score,
                fused,
            }
        })
        .collect();

    scores.sort_by(|a, b| b.fused.partial_cmp(&a.fused).unwrap_or(std::cmp::Ordering::Equal));

    let top = scores.first().map(|s| s.domain).unwrap_or_default();
    let top_score = scores.first().map(|s| s.fused).unwrap_or(0.0);

    DomainClassification {
        scores,
        top,
        top_score,
    }
}

/// Fallback keyword-based domain guess (spec.md §10.1 supplement), used
/// only beneath the normative fusion gate above — e.g. when an upstream
/// caller wants a cheap non-authoritative hint without running BM25 at
/// all. Never substitutes for `classify_domain`'s result in the gate
/// itself.
pub fn keyword_fallback_domain(query: &str) -> Option<Domain> {
    let lower = query.to_lowercase();
    let checks: &[(Domain, &[&str])] = &[
        (Domain::Criminal, &["murder", "theft", "fir", "bail", "assault", "robbery"]),
        (Domain::CivilFamily, &["divorce", "custody", "alimony", "maintenance", "marriage"]),
        (Domain::Corporate, &["company", "shareholder", "director", "insolvency", "sebi"]),
        (Domain::ItCyber, &["cyber", "hacking", "data breach", "phishing", "online fraud"]),
        (Domain::Traffic, &["accident", "driving licence", "challan", "motor vehicle"]),
        (Domain::Property, &["property", "tenant", "landlord", "sale deed", "rera"]),
        (Domain::Constitutional, &["fundamental right", "writ petition", "article 32", "article 226"]),
        (Domain::Environment, &["pollution", "wildlife", "forest", "environmental clearance"]),
    ];

    checks
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(domain, _)| *domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_semantic_signal(_query: &str, _domain: Domain) -> f32 {
        0.0
    }

    #[test]
    fn short_query_weights_bm25_heavily() {
        let classification = classify_domain("murder ipc section", &no_semantic_signal);
        assert_eq!(classification.top, Domain::Criminal);
    }

    #[test]
    fn long_query_still_classifies() {
        let classification = classify_domain(
            "what is the procedure for filing a divorce petition by mutual consent",
            &no_semantic_signal,
        );
        assert_eq!(classification.top, Domain::CivilFamily);
    }

    #[test]
    fn semantic_signal_can_shift_top_domain() {
        let semantic = |_q: &str, d: Domain| if d == Domain::Environment { 1.0 } else { 0.0 };
        let classification = classify_domain("short query", &semantic);
        assert_eq!(classification.top, Domain::Environment);
    }

    #[test]
    fn keyword_fallback_matches_obvious_terms() {
        assert_eq!(keyword_fallback_domain("I want to file an FIR for theft"), Some(Domain::Criminal));
        assert_eq!(keyword_fallback_domain("random unrelated text"), None);
    }
}
