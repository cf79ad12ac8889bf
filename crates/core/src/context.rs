//! `RequestContext`: the single mutable value threaded through the seven
//! pipeline stages (spec.md §3). Owned exclusively by one request; never
//! shared across requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::language::{Language, Script};
use crate::records::{Case, Citation, Entity, Mapping, RegulatoryNotes, Statute};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    QueryAnalyzer,
    StatuteRetriever,
    CaseRetriever,
    RegulatoryFilter,
    CitationBuilder,
    Summarizer,
    Responder,
}

impl StageId {
    pub const ORDER: [StageId; 7] = [
        StageId::QueryAnalyzer,
        StageId::StatuteRetriever,
        StageId::CaseRetriever,
        StageId::RegulatoryFilter,
        StageId::CitationBuilder,
        StageId::Summarizer,
        StageId::Responder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StageId::QueryAnalyzer => "query_analyzer",
            StageId::StatuteRetriever => "statute_retriever",
            StageId::CaseRetriever => "case_retriever",
            StageId::RegulatoryFilter => "regulatory_filter",
            StageId::CitationBuilder => "citation_builder",
            StageId::Summarizer => "summarizer",
            StageId::Responder => "responder",
        }
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageState {
    Pending,
    Running,
    Completed,
    Error,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageRecord {
    pub stage: StageId,
    pub state: StageState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub stage: StageId,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Structured output of the Summarizer stage (spec.md §4.6).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentSummary {
    #[serde(default)]
    pub parties: Vec<String>,
    pub court_name: Option<String>,
    pub date: Option<String>,
    pub case_type: Option<String>,
    #[serde(default)]
    pub cited_sections: Vec<CitedSection>,
    pub verdict: Option<String>,
    #[serde(default)]
    pub case_summary: Vec<String>,
    #[serde(default)]
    pub key_arguments: Vec<String>,
    #[serde(default)]
    pub legal_issues: Vec<String>,
    pub ratio_decidendi: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitedSection {
    pub act: String,
    pub section: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    // --- inputs ---
    pub original_query: String,
    pub query: String,
    pub requested_language: Option<Language>,
    pub session_id: String,
    pub specified_domain: Option<String>,
    /// Raw document text attached to the request, if any (S6 input).
    pub attached_document: Option<String>,

    // --- analysis outputs (S1) ---
    pub detected_language: Language,
    pub detected_script: Script,
    pub detected_domain: Option<Domain>,
    pub predicted_domain: Option<Domain>,
    pub domain_confidence: f64,
    pub reformulated_query: Option<String>,
    pub entities: Vec<Entity>,
    pub keywords: Vec<String>,
    pub applicable_acts: Vec<String>,
    pub is_relevant: bool,
    pub rejection_reason: Option<String>,
    pub rejection_reason_secondary: Option<String>,

    // --- retrieval outputs ---
    pub statutes: Vec<Statute>,
    pub case_laws: Vec<Case>,
    pub ipc_bns_mappings: Vec<Mapping>,
    pub regulatory_notes: Option<RegulatoryNotes>,

    // --- synthesis outputs ---
    pub citations: Vec<Citation>,
    pub response_primary: Option<String>,
    pub response_secondary: Option<String>,
    pub document_summary: Option<DocumentSummary>,

    // --- tracing ---
    pub steps: Vec<StageRecord>,
    pub errors: Vec<ErrorRecord>,
}

impl RequestContext {
    pub fn new(
        query: impl Into<String>,
        session_id: impl Into<String>,
        requested_language: Option<Language>,
        specified_domain: Option<String>,
    ) -> Self {
        let query = query.into();
        Self {
            original_query: query.clone(),
            query,
            requested_language,
            session_id: session_id.into(),
            specified_domain,
            attached_document: None,
            detected_language: Language::English,
            detected_script: Script::Latin,
            detected_domain: None,
            predicted_domain: None,
            domain_confidence: 0.0,
            reformulated_query: None,
            entities: Vec::new(),
            keywords: Vec::new(),
            applicable_acts: Vec::new(),
            is_relevant: true,
            rejection_reason: None,
            rejection_reason_secondary: None,
            statutes: Vec::new(),
            case_laws: Vec::new(),
            ipc_bns_mappings: Vec::new(),
            regulatory_notes: None,
            citations: Vec::new(),
            response_primary: None,
            response_secondary: None,
            document_summary: None,
            steps: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Append-or-update-in-place, keyed by stage identity (spec.md §3 invariant).
    fn upsert_step(&mut self, stage: StageId, f: impl FnOnce(&mut StageRecord)) {
        if let Some(existing) = self.steps.iter_mut().find(|s| s.stage == stage) {
            f(existing);
        } else {
            let mut record = StageRecord {
                stage,
                state: StageState::Pending,
                started_at: None,
                ended_at: None,
                note: None,
            };
            f(&mut record);
            self.steps.push(record);
        }
    }

    pub fn start_stage(&mut self, stage: StageId) {
        self.upsert_step(stage, |r| {
            r.state = StageState::Running;
            r.started_at = Some(Utc::now());
        });
    }

    pub fn complete_stage(&mut self, stage: StageId, note: Option<String>) {
        self.upsert_step(stage, |r| {
            r.state = StageState::Completed;
            r.ended_at = Some(Utc::now());
            r.note = note;
        });
    }

    pub fn error_stage(&mut self, stage: StageId, message: impl Into<String>) {
        let message = message.into();
        self.upsert_step(stage, |r| {
            r.state = StageState::Error;
            r.ended_at = Some(Utc::now());
            r.note = Some(message.clone());
        });
        self.errors.push(ErrorRecord {
            stage,
            message,
            at: Utc::now(),
        });
    }

    pub fn cancel_remaining(&mut self, from: StageId) {
        let start_idx = StageId::ORDER.iter().position(|s| *s == from).unwrap_or(0);
        for stage in &StageId::ORDER[start_idx..] {
            self.upsert_step(*stage, |r| {
                if !matches!(r.state, StageState::Completed | StageState::Error) {
                    r.state = StageState::Cancelled;
                }
            });
        }
    }

    /// Append an act code to `applicable_acts` if not already present
    /// (ordered-set semantics, spec.md §3).
    pub fn add_applicable_act(&mut self, act_code: impl Into<String>) {
        let act_code = act_code.into();
        if !self.applicable_acts.contains(&act_code) {
            self.applicable_acts.push(act_code);
        }
    }

    pub fn reject(&mut self, reason: impl Into<String>) {
        self.is_relevant = false;
        self.rejection_reason = Some(reason.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_tracing_is_idempotent_per_stage() {
        let mut ctx = RequestContext::new("hello", "s1", None, None);
        ctx.start_stage(StageId::QueryAnalyzer);
        ctx.complete_stage(StageId::QueryAnalyzer, Some("ok".into()));
        ctx.start_stage(StageId::StatuteRetriever);

        assert_eq!(ctx.steps.len(), 2);
        let qa = ctx.steps.iter().find(|s| s.stage == StageId::QueryAnalyzer).unwrap();
        assert_eq!(qa.state, StageState::Completed);
    }

    #[test]
    fn applicable_acts_dedup_preserves_order() {
        let mut ctx = RequestContext::new("q", "s1", None, None);
        ctx.add_applicable_act("IPC");
        ctx.add_applicable_act("BNS");
        ctx.add_applicable_act("IPC");
        assert_eq!(ctx.applicable_acts, vec!["IPC".to_string(), "BNS".to_string()]);
    }

    #[test]
    fn reject_marks_is_relevant_false() {
        let mut ctx = RequestContext::new("q", "s1", None, None);
        ctx.reject("domain mismatch");
        assert!(!ctx.is_relevant);
        assert!(ctx.statutes.is_empty());
        assert!(ctx.citations.is_empty());
    }
}
