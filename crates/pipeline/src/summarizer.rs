//! S6 Summarizer (spec.md §4.6), grounded on `summarization_agent.py`:
//! only runs when a document is attached to the request. Regex-first
//! extraction of parties/court/date/cited-sections/verdict, then an
//! LLM-assisted pass for `key_arguments`/`legal_issues`/`ratio_decidendi`
//! when a generator is configured and reachable, falling back to a
//! rule-based key-sentence extractor otherwise.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::warn;

use nyayarag_core::{CitedSection, DocumentSummary, GenerateRequest, LanguageModel, RequestContext, Stage, StageId};

const PARTIES_WINDOW: usize = 1000;
const COURT_WINDOW: usize = 2000;
const LLM_INPUT_WINDOW: usize = 8000;
const MAX_KEY_SENTENCES: usize = 5;

static PARTIES_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([A-Za-z\s\.]+)\s*(?:v\.|vs\.?|versus)\s*([A-Za-z\s\.]+)").expect("parties pattern"));

static COURT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"Supreme Court of India").unwrap(),
        Regex::new(r"High Court of [\w\s]+").unwrap(),
        Regex::new(r"[\w\s]+ High Court").unwrap(),
        Regex::new(r"District Court").unwrap(),
        Regex::new(r"Sessions Court").unwrap(),
    ]
});

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:dated?|decided on|judgment dated?)\s*[:\-]?\s*(\d{1,2}[\-/.]\d{1,2}[\-/.]\d{4}|\d{1,2}\s+\w+\s+\d{4})")
        .expect("date pattern")
});

static CITED_SECTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Section|Sec\.|धारा|§)\s*(\d+[A-Za-z]?)\s*(?:of|,)?\s*(?:the\s+)?(IPC|BNS|CrPC|IT Act|Indian Penal Code|Bhartiya Nyaya Sanhita)?")
        .expect("cited section pattern")
});

static VERDICT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(appeal|petition)\s+(allowed|dismissed|partly allowed|remanded)").unwrap(),
        Regex::new(r"(?i)(?:court|bench)\s+(orders?|directs?|holds?)[^.]*").unwrap(),
        Regex::new(r"(?i)conviction\s+(upheld|set aside|modified)").unwrap(),
        Regex::new(r"(?i)accused\s+(acquitted|convicted)").unwrap(),
    ]
});

const KEY_PHRASES: &[&str] = &[
    "held that",
    "court observed",
    "it was held",
    "issue before",
    "question of law",
    "appellant contended",
    "respondent submitted",
    "therefore",
    "accordingly",
    "we are of the view",
    "in our opinion",
];

#[derive(Debug, Deserialize, Default)]
struct LlmSummaryFields {
    #[serde(default)]
    key_arguments: Vec<String>,
    #[serde(default)]
    legal_issues: Vec<String>,
    #[serde(default)]
    verdict: Option<String>,
    #[serde(default)]
    ratio_decidendi: Option<String>,
}

pub struct Summarizer {
    generator: Option<Arc<dyn LanguageModel>>,
}

impl Summarizer {
    pub fn new(generator: Option<Arc<dyn LanguageModel>>) -> Self {
        Self { generator }
    }

    fn window(text: &str, max_chars: usize) -> &str {
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => &text[..idx],
            None => text,
        }
    }

    fn extract_parties(text: &str) -> Vec<String> {
        let window = Self::window(text, PARTIES_WINDOW);
        PARTIES_PATTERN
            .captures(window)
            .map(|caps| vec![format!("{} v. {}", caps[1].trim(), caps[2].trim())])
            .unwrap_or_default()
    }

    fn extract_court(text: &str) -> Option<String> {
        let window = Self::window(text, COURT_WINDOW);
        COURT_PATTERNS.iter().find_map(|pattern| pattern.find(window).map(|m| m.as_str().to_string()))
    }

    fn extract_date(text: &str) -> Option<String> {
        DATE_PATTERN.captures(text).map(|caps| caps[1].to_string())
    }

    fn extract_cited_sections(text: &str) -> Vec<CitedSection> {
        let mut seen = HashSet::new();
        let mut sections = Vec::new();
        for caps in CITED_SECTION_PATTERN.captures_iter(text) {
            let section = caps[1].to_uppercase();
            let act = caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_else(|| "IPC".to_string());
            let key = format!("{act}_{section}");
            if seen.insert(key) {
                sections.push(CitedSection { act, section });
            }
        }
        sections
    }

    fn extract_verdict(text: &str) -> Option<String> {
        VERDICT_PATTERNS.iter().find_map(|pattern| {
            pattern.find(text).map(|m| {
                let matched = m.as_str();
                let mut chars = matched.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => matched.to_string(),
                }
            })
        })
    }

    fn extract_key_sentences(text: &str, max_sentences: usize) -> Vec<String> {
        let lower = text.to_lowercase();
        let boundary = Regex::new(r"[.!?]+\s+").expect("sentence boundary");
        let mut offset = 0usize;
        let mut sentences = Vec::new();

        for piece in boundary.split(text) {
            let start = offset;
            offset += piece.len();
            let lower_piece = &lower[start.min(lower.len())..offset.min(lower.len())];
            if KEY_PHRASES.iter().any(|phrase| lower_piece.contains(phrase))
                && piece.len() >= 50
                && piece.len() <= 500
            {
                sentences.push(piece.trim().to_string());
            }
            if sentences.len() >= max_sentences {
                break;
            }
        }

        sentences
    }

    async fn llm_summarize(&self, text: &str) -> Option<LlmSummaryFields> {
        let generator = self.generator.as_ref()?;
        if !generator.is_available().await {
            return None;
        }

        let window = Self::window(text, LLM_INPUT_WINDOW);
        let system = "You extract structured metadata from Indian court judgments. Respond with a single JSON \
object with the keys key_arguments (array of strings), legal_issues (array of strings), verdict (string or \
null), and ratio_decidendi (string or null). Do not include any text outside the JSON object.";
        let request = GenerateRequest::new(system)
            .with_user_message(window.to_string())
            .with_temperature(0.1)
            .with_max_tokens(512);

        match generator.generate(request).await {
            Ok(response) => match serde_json::from_str::<LlmSummaryFields>(response.text.trim()) {
                Ok(fields) => Some(fields),
                Err(err) => {
                    warn!(error = %err, "failed to parse structured summary from generator response");
                    None
                }
            },
            Err(err) => {
                warn!(error = %err, "generator unavailable for document summarization");
                None
            }
        }
    }

    async fn summarize_document(&self, text: &str) -> DocumentSummary {
        let mut summary = DocumentSummary {
            parties: Self::extract_parties(text),
            court_name: Self::extract_court(text),
            date: Self::extract_date(text),
            case_type: None,
            cited_sections: Self::extract_cited_sections(text),
            verdict: Self::extract_verdict(text),
            case_summary: Vec::new(),
            key_arguments: Vec::new(),
            legal_issues: Vec::new(),
            ratio_decidendi: None,
        };

        match self.llm_summarize(text).await {
            Some(fields) => {
                summary.key_arguments = fields.key_arguments;
                summary.legal_issues = fields.legal_issues;
                summary.ratio_decidendi = fields.ratio_decidendi;
                if summary.verdict.is_none() {
                    summary.verdict = fields.verdict;
                }
            }
            None => {
                summary.key_arguments = Self::extract_key_sentences(text, MAX_KEY_SENTENCES);
            }
        }

        summary
    }
}

#[async_trait]
impl Stage for Summarizer {
    async fn run(&self, mut ctx: RequestContext) -> RequestContext {
        ctx.start_stage(StageId::Summarizer);

        if !ctx.is_relevant {
            ctx.complete_stage(StageId::Summarizer, Some("skipped: query rejected upstream".into()));
            return ctx;
        }

        let Some(document) = ctx.attached_document.clone() else {
            ctx.complete_stage(StageId::Summarizer, Some("skipped: no attached document".into()));
            return ctx;
        };

        let summary = self.summarize_document(&document).await;
        ctx.document_summary = Some(summary);

        ctx.complete_stage(StageId::Summarizer, Some("document summarized".into()));
        ctx
    }

    fn id(&self) -> StageId {
        StageId::Summarizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn skips_when_no_document_attached() {
        let stage = Summarizer::new(None);
        let ctx = RequestContext::new("q", "s1", None, None);
        let ctx = stage.run(ctx).await;
        assert!(ctx.document_summary.is_none());
    }

    #[tokio::test]
    async fn extracts_parties_and_sections_without_generator() {
        let stage = Summarizer::new(None);
        let mut ctx = RequestContext::new("q", "s1", None, None);
        ctx.attached_document = Some(
            "Ram Lal v. State of Uttar Pradesh, Supreme Court of India, dated 12-03-2021. The accused was \
charged under Section 302 of the Indian Penal Code. The court observed that the prosecution had proved its \
case beyond reasonable doubt and accordingly the appeal was dismissed."
                .to_string(),
        );

        let ctx = stage.run(ctx).await;
        let summary = ctx.document_summary.expect("summary present");
        assert!(!summary.parties.is_empty());
        assert_eq!(summary.court_name.as_deref(), Some("Supreme Court of India"));
        assert!(summary.cited_sections.iter().any(|s| s.section == "302"));
        assert!(!summary.key_arguments.is_empty());
    }
}
