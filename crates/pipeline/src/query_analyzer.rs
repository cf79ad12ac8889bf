//! S1 QueryAnalyzer (spec.md §4.1), grounded on `query_agent.py`: script
//! and language detection, section/entity extraction, domain
//! classification and gating, applicable-act assignment, and query
//! reformulation for retrieval.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tokio::sync::OnceCell;
use tracing::warn;

use nyayarag_config::{acts_for_domain, corpus_for_domain, rejection_text, STOP_WORDS};
use nyayarag_core::{detect, Domain, Embedder, Entity, RequestContext, Stage, StageId};
use nyayarag_rag::{classify_domain, keyword_fallback_domain};

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern"));

/// Matches an explicit section reference such as `Section 302`,
/// `Sec. 420 IPC`, `u/s 498A of BNS`, `§ 304B`, or `धारा 302`
/// (SPEC_FULL.md §10 item 4, `query_agent.py:19`).
static SECTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:section|sec\.?|धारा|§|u/s)\s*(\d+[a-z]?)(?:\s*(?:of|,)?\s*(?:the\s*)?(ipc|bns|crpc|bnss|iea|bsa))?",
    )
    .expect("section pattern")
});

/// Bare 2-3 digit numbers that are overwhelmingly IPC/BNS section numbers
/// even without a `section`/`धारा` prefix, the way `धारा`-less queries
/// ("आईपीसी 302...") still name a section. Matched against the fixed
/// twelve-entry `COMMON_SECTIONS` set below (`query_agent.py:177-184`).
static STANDALONE_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{2,3}[a-zA-Z]?)\b").expect("standalone number pattern"));

/// The twelve common IPC sections `query_agent.py._extract_sections`
/// (lines 180) treats as sections even when they appear as bare numbers.
const COMMON_SECTIONS: [&str; 12] =
    ["302", "307", "376", "420", "498", "304", "306", "323", "354", "506", "379", "380"];

/// Matches an explicit mention of the IPC act by name, English or Hindi
/// (`query_agent.py:20`), used to decide whether a query names its own
/// applicable acts (spec.md §4.1 rule 4) rather than falling back to the
/// domain's act list.
static IPC_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:ipc|indian penal code|आईपीसी|भारतीय दंड संहिता)\b").expect("ipc mention pattern"));

/// Matches an explicit mention of the BNS act by name, English or Hindi
/// (`query_agent.py:21`).
static BNS_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:bns|bhartiya nyaya sanhita|बीएनएस|भारतीय न्याय संहिता)\b").expect("bns mention pattern")
});

/// Minimum fused domain score, relative to the top score, for a
/// caller-specified domain to be accepted even when it isn't the
/// classifier's top pick (spec.md §4.1 rule 5 "domain gate").
const RELATIVE_ACCEPT_RATIO: f32 = 0.5;
const RELATIVE_ACCEPT_FLOOR: f32 = 0.1;
const ABSOLUTE_ACCEPT_FLOOR: f32 = 0.2;

pub struct QueryAnalyzer {
    embedder: Option<Arc<dyn Embedder>>,
    domain_centroids: OnceCell<HashMap<Domain, Vec<f32>>>,
}

impl QueryAnalyzer {
    pub fn new(embedder: Option<Arc<dyn Embedder>>) -> Self {
        Self {
            embedder,
            domain_centroids: OnceCell::new(),
        }
    }

    /// Lazily embeds each domain's fixed BM25 corpus once per process and
    /// averages it into a single centroid vector per domain, so semantic
    /// domain similarity is a single cosine comparison per request rather
    /// than an embedding call per corpus document.
    async fn centroids(&self, embedder: &Arc<dyn Embedder>) -> &HashMap<Domain, Vec<f32>> {
        self.domain_centroids
            .get_or_init(|| async {
                let mut centroids = HashMap::new();
                for domain in Domain::ALL {
                    let corpus: Vec<String> = corpus_for_domain(domain).iter().map(|s| s.to_string()).collect();
                    if corpus.is_empty() {
                        continue;
                    }
                    match embedder.embed_documents(&corpus).await {
                        Ok(embeddings) if !embeddings.is_empty() => {
                            centroids.insert(domain, average_vector(&embeddings));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            warn!(error = %err, ?domain, "failed to embed domain corpus for classification centroid");
                        }
                    }
                }
                centroids
            })
            .await
    }

    fn extract_entities(query: &str) -> Vec<Entity> {
        let mut entities = Vec::new();
        let mut seen = std::collections::HashSet::new();

        for caps in SECTION_PATTERN.captures_iter(query) {
            let section = caps[1].to_uppercase();
            if seen.insert(section.clone()) {
                entities.push(Entity::section(section));
            }
        }

        // Standalone-number fallback (query_agent.py:176-184): a bare
        // number from the fixed common-sections set still counts as a
        // section entity even with no section/धारा prefix at all.
        for caps in STANDALONE_NUMBER_PATTERN.captures_iter(query) {
            let number = caps[1].to_uppercase();
            if COMMON_SECTIONS.contains(&number.as_str()) && seen.insert(number.clone()) {
                entities.push(Entity::section(number));
            }
        }

        entities
    }

    fn assign_applicable_acts(ctx: &mut RequestContext) {
        let is_ipc = IPC_MENTION.is_match(&ctx.query);
        let is_bns = BNS_MENTION.is_match(&ctx.query);
        if is_ipc || is_bns {
            if is_ipc {
                ctx.add_applicable_act("IPC");
            }
            if is_bns {
                ctx.add_applicable_act("BNS");
            }
            return;
        }

        if let Some(domain) = ctx.detected_domain {
            for act in acts_for_domain(domain) {
                ctx.add_applicable_act(*act);
            }
            return;
        }

        if ctx.entities.iter().any(|e| e.kind == "section") {
            ctx.add_applicable_act("IPC");
            ctx.add_applicable_act("BNS");
        }
    }

    fn reformulate(ctx: &RequestContext) -> String {
        let domain_label = ctx.detected_domain.map(|d| d.as_str()).unwrap_or("general");
        let sections: Vec<&str> = ctx
            .entities
            .iter()
            .filter(|e| e.kind == "section")
            .map(|e| e.value.as_str())
            .collect();

        if sections.is_empty() {
            format!("[{}] {}", domain_label, ctx.query)
        } else {
            format!("[{}] {} (Sections: {})", domain_label, ctx.query, sections.join(", "))
        }
    }
}

fn average_vector(vectors: &[Vec<f32>]) -> Vec<f32> {
    let dim = vectors[0].len();
    let mut sum = vec![0.0f32; dim];
    for v in vectors {
        for (i, x) in v.iter().enumerate() {
            if i < dim {
                sum[i] += x;
            }
        }
    }
    let n = vectors.len() as f32;
    sum.into_iter().map(|x| x / n).collect()
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

#[async_trait]
impl Stage for QueryAnalyzer {
    async fn run(&self, mut ctx: RequestContext) -> RequestContext {
        ctx.start_stage(StageId::QueryAnalyzer);

        let detection = detect(&ctx.query);
        ctx.detected_language = ctx.requested_language.unwrap_or(detection.language);
        ctx.detected_script = detection.script;

        ctx.entities = Self::extract_entities(&ctx.query);
        ctx.keywords = WORD_PATTERN
            .find_iter(&ctx.query.to_lowercase())
            .map(|m| m.as_str().to_string())
            .filter(|w| !STOP_WORDS.contains(w.as_str()) && w.len() > 1)
            .collect();

        let query_embedding = match &self.embedder {
            Some(embedder) => embedder.embed_query(&ctx.query).await.ok(),
            None => None,
        };

        let centroids = match &self.embedder {
            Some(embedder) => Some(self.centroids(embedder).await.clone()),
            None => None,
        };

        let semantic = |_q: &str, domain: Domain| -> f32 {
            match (&query_embedding, &centroids) {
                (Some(qe), Some(c)) => c.get(&domain).map(|ce| cosine_similarity(qe, ce).max(0.0)).unwrap_or(0.0),
                _ => 0.0,
            }
        };

        let classification = classify_domain(&ctx.query, &semantic);

        // The fused BM25+semantic gate is degenerate when every domain
        // scores zero (e.g. an empty corpus or an unreachable embedder);
        // fall back to a cheap keyword guess beneath the normative gate
        // rather than rejecting on a score of pure zero (SPEC_FULL.md §10.1).
        let keyword_guess = if classification.top_score <= 0.0 {
            keyword_fallback_domain(&ctx.query)
        } else {
            None
        };

        let requested = ctx
            .specified_domain
            .as_deref()
            .filter(|s| !Domain::is_wildcard(s))
            .and_then(Domain::parse);

        match requested {
            Some(domain) => {
                let selected_score = classification.score_for(domain);
                let accept = domain == classification.top
                    || (selected_score > RELATIVE_ACCEPT_RATIO * classification.top_score
                        && selected_score > RELATIVE_ACCEPT_FLOOR)
                    || selected_score > ABSOLUTE_ACCEPT_FLOOR
                    || keyword_guess == Some(domain);

                if accept {
                    ctx.predicted_domain = Some(classification.top);
                    ctx.detected_domain = Some(domain);
                    ctx.domain_confidence = selected_score as f64;
                } else {
                    ctx.predicted_domain = Some(classification.top);
                    ctx.reject(rejection_text(ctx.detected_language, true).to_string());
                }
            }
            None => {
                ctx.predicted_domain = Some(classification.top);
                if classification.top_score > ABSOLUTE_ACCEPT_FLOOR {
                    ctx.detected_domain = Some(classification.top);
                    ctx.domain_confidence = classification.top_score as f64;
                } else if let Some(domain) = keyword_guess {
                    ctx.detected_domain = Some(domain);
                    ctx.domain_confidence = ABSOLUTE_ACCEPT_FLOOR as f64;
                } else {
                    ctx.reject(rejection_text(ctx.detected_language, false).to_string());
                }
            }
        }

        Self::assign_applicable_acts(&mut ctx);
        ctx.reformulated_query = Some(Self::reformulate(&ctx));

        let note = format!(
            "language={} domain={:?} relevant={}",
            ctx.detected_language, ctx.detected_domain, ctx.is_relevant
        );
        ctx.complete_stage(StageId::QueryAnalyzer, Some(note));
        ctx
    }

    fn id(&self) -> StageId {
        StageId::QueryAnalyzer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn detects_section_entity_and_act() {
        let analyzer = QueryAnalyzer::new(None);
        let ctx = RequestContext::new("What is the punishment under Section 302 IPC?", "s1", None, None);
        let ctx = analyzer.run(ctx).await;

        assert!(ctx.entities.iter().any(|e| e.value == "302"));
        assert!(ctx.applicable_acts.contains(&"IPC".to_string()));
        assert!(ctx.reformulated_query.is_some());
    }

    #[tokio::test]
    async fn standalone_common_section_number_is_detected_without_prefix() {
        let analyzer = QueryAnalyzer::new(None);
        let ctx = RequestContext::new("आईपीसी 302 और बीएनएस 103 में क्या अंतर है?", "s1", None, None);
        let ctx = analyzer.run(ctx).await;

        assert!(ctx.entities.iter().any(|e| e.value == "302"));
        assert!(ctx.applicable_acts.contains(&"IPC".to_string()));
        assert!(ctx.applicable_acts.contains(&"BNS".to_string()));
    }

    #[tokio::test]
    async fn hindi_dhara_prefix_is_recognized() {
        let analyzer = QueryAnalyzer::new(None);
        let ctx = RequestContext::new("धारा 498A के तहत क्या सजा है?", "s1", None, None);
        let ctx = analyzer.run(ctx).await;

        assert!(ctx.entities.iter().any(|e| e.value == "498A"));
    }

    #[tokio::test]
    async fn rejects_out_of_scope_query() {
        let analyzer = QueryAnalyzer::new(None);
        let ctx = RequestContext::new("What is the best recipe for biryani?", "s1", None, None);
        let ctx = analyzer.run(ctx).await;

        assert!(!ctx.is_relevant);
        assert!(ctx.rejection_reason.is_some());
    }

    #[tokio::test]
    async fn accepts_matching_specified_domain() {
        let analyzer = QueryAnalyzer::new(None);
        let ctx = RequestContext::new(
            "murder punishment under ipc",
            "s1",
            None,
            Some("criminal".to_string()),
        );
        let ctx = analyzer.run(ctx).await;

        assert!(ctx.is_relevant);
        assert_eq!(ctx.detected_domain, Some(Domain::Criminal));
    }
}
