//! Runs the seven pipeline stages over a `RequestContext` in fixed order
//! (spec.md §9 "Dynamic dispatch over agents" — the stage list is a
//! closed sum, not a registry), grounded on `orchestrator.py`'s
//! `process_query`/`process_query_streaming`.
//!
//! The short-circuit rule (spec.md §4.1 rule 5): once `QueryAnalyzer`
//! marks a request irrelevant, every stage but `Responder` is a no-op —
//! `Responder` always runs so a rejection still gets rendered.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_stream::stream;
use tokio_stream::Stream;
use tracing::info;
use uuid::Uuid;

use nyayarag_core::{
    Case, Citation, Domain, Error, Language, LanguageModel, Mapping, RequestContext, Result, Stage, StageId,
    Statute, StructuredStore,
};
use nyayarag_pipeline::{
    CaseRetriever, CitationBuilder, QueryAnalyzer, RegulatoryFilter, Responder, StatuteRetriever, Summarizer,
};

const STREAM_STATUTE_LIMIT: usize = 5;
const STREAM_CASE_LIMIT: usize = 3;

/// Request content length bound (spec.md §6 `content: string (1..5000)`).
/// Counted in chars, not bytes — a query in a non-Latin script must not be
/// rejected early just because its UTF-8 byte length exceeds the cap.
const MAX_QUERY_CHARS: usize = 5000;

/// `InputInvalid` (spec.md §7): an empty or oversized query is rejected
/// before S1 ever runs, with no stage tracing produced at all.
fn validate_query(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(Error::InputInvalid("query must not be empty".into()));
    }
    let char_count = query.chars().count();
    if char_count > MAX_QUERY_CHARS {
        return Err(Error::InputInvalid(format!(
            "query length {char_count} exceeds the {MAX_QUERY_CHARS}-character limit"
        )));
    }
    Ok(())
}

/// A cooperative cancellation flag checked between pipeline stages.
///
/// Stages themselves are not cancellation-aware (spec.md §9); cancelling
/// mid-pipeline stops the orchestrator from dispatching the *next* stage
/// and marks the remaining stages as cancelled in `ctx.steps` rather than
/// aborting a stage already in flight.
#[derive(Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Streamed progress events mirrored from `ChatStreamChunk` (spec.md §5,
/// grounded on `orchestrator.py::process_query_streaming`).
#[derive(Debug, Clone)]
pub enum OrchestratorEvent {
    Start { session_id: String, query: String },
    StageStarted { stage: StageId },
    StageCompleted { stage: StageId, note: Option<String> },
    StageSkipped { stage: StageId },
    StageErrored { stage: StageId, message: String },
    Statutes(Vec<Statute>),
    CaseLaws(Vec<Case>),
    Citations(Vec<Citation>),
    Response {
        primary: Option<String>,
        secondary: Option<String>,
        statutes: Vec<Statute>,
        case_laws: Vec<Case>,
        ipc_bns_mappings: Vec<Mapping>,
        citations: Vec<Citation>,
    },
    Cancelled { session_id: String },
    Complete { session_id: String },
    /// `InputInvalid` (spec.md §7): emitted in place of `Start` when the
    /// query fails validation; no stage runs and no `Complete` follows.
    Error { message: String },
}

pub struct Orchestrator {
    query_analyzer: QueryAnalyzer,
    statute_retriever: StatuteRetriever,
    case_retriever: CaseRetriever,
    regulatory_filter: RegulatoryFilter,
    citation_builder: CitationBuilder,
    summarizer: Summarizer,
    responder: Responder,
}

impl Orchestrator {
    pub fn new(
        store: Arc<dyn StructuredStore>,
        retriever: Option<Arc<dyn nyayarag_core::Retriever>>,
        embedder: Option<Arc<dyn nyayarag_core::Embedder>>,
        generator: Option<Arc<dyn LanguageModel>>,
    ) -> Self {
        Self {
            query_analyzer: QueryAnalyzer::new(embedder),
            statute_retriever: StatuteRetriever::new(store.clone(), retriever.clone()),
            case_retriever: CaseRetriever::new(store, retriever),
            regulatory_filter: RegulatoryFilter,
            citation_builder: CitationBuilder,
            summarizer: Summarizer::new(generator.clone()),
            responder: Responder::new(generator),
        }
    }

    /// Convenience constructor backed by `nyayarag_store`'s representative
    /// seed dataset, for demos and integration tests that don't need a
    /// deployment-specific `StructuredStore` wired in.
    pub fn with_seeded_store(
        retriever: Option<Arc<dyn nyayarag_core::Retriever>>,
        embedder: Option<Arc<dyn nyayarag_core::Embedder>>,
        generator: Option<Arc<dyn LanguageModel>>,
    ) -> Self {
        let store: Arc<dyn StructuredStore> = Arc::new(nyayarag_store::InMemoryStructuredStore::seeded());
        Self::new(store, retriever, embedder, generator)
    }

    fn new_context(
        query: &str,
        session_id: Option<String>,
        language: Option<Language>,
        domain: Option<String>,
        attached_document: Option<String>,
    ) -> RequestContext {
        let session_id = session_id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let mut ctx = RequestContext::new(query, session_id, language, domain);
        ctx.attached_document = attached_document;
        ctx
    }

    /// Runs the full pipeline and returns the final context. Equivalent to
    /// `orchestrator.py::process_query`, minus the wall-clock timing and
    /// JSON envelope, which are response-layer concerns outside this
    /// crate's scope.
    ///
    /// Returns `Err(Error::InputInvalid(_))` without running any stage
    /// when `query` is empty or exceeds `MAX_QUERY_CHARS` (spec.md §7,
    /// §8 "Empty query → InputInvalid; no stage runs").
    pub async fn run(
        &self,
        query: &str,
        session_id: Option<String>,
        language: Option<Language>,
        domain: Option<String>,
        attached_document: Option<String>,
    ) -> Result<RequestContext> {
        validate_query(query)?;
        let ctx = Self::new_context(query, session_id, language, domain, attached_document);
        Ok(self.run_to_completion(ctx).await)
    }

    async fn run_to_completion(&self, mut ctx: RequestContext) -> RequestContext {
        ctx = self.query_analyzer.run(ctx).await;
        info!(relevant = ctx.is_relevant, domain = ?ctx.detected_domain, "query analyzed");

        ctx = self.statute_retriever.run(ctx).await;
        ctx = self.case_retriever.run(ctx).await;
        ctx = self.regulatory_filter.run(ctx).await;
        ctx = self.citation_builder.run(ctx).await;
        ctx = self.summarizer.run(ctx).await;
        ctx = self.responder.run(ctx).await;
        ctx
    }

    /// Streaming counterpart of `run`, grounded on
    /// `orchestrator.py::process_query_streaming`: emits a `Start` event,
    /// a started/completed-or-skipped event per stage, intermediate
    /// statutes/case-laws/citations as each retrieval stage finishes, and
    /// a final `Response` plus `Complete` event.
    pub fn run_streaming(
        &self,
        query: String,
        session_id: Option<String>,
        language: Option<Language>,
        domain: Option<String>,
        attached_document: Option<String>,
        cancellation: CancellationToken,
    ) -> impl Stream<Item = OrchestratorEvent> + '_ {
        stream! {
            if let Err(err) = validate_query(&query) {
                yield OrchestratorEvent::Error { message: err.to_string() };
                return;
            }

            let mut ctx = Self::new_context(&query, session_id, language, domain, attached_document);
            let session_id = ctx.session_id.clone();

            yield OrchestratorEvent::Start { session_id: session_id.clone(), query: query.clone() };

            for stage_id in StageId::ORDER {
                if cancellation.is_cancelled() {
                    ctx.cancel_remaining(stage_id);
                    yield OrchestratorEvent::Cancelled { session_id: session_id.clone() };
                    return;
                }

                if !ctx.is_relevant && stage_id != StageId::Responder {
                    yield OrchestratorEvent::StageSkipped { stage: stage_id };
                    continue;
                }

                yield OrchestratorEvent::StageStarted { stage: stage_id };
                ctx = self.run_stage(stage_id, ctx).await;

                match ctx.steps.iter().find(|s| s.stage == stage_id) {
                    Some(step) if step.state == nyayarag_core::StageState::Error => {
                        yield OrchestratorEvent::StageErrored {
                            stage: stage_id,
                            message: step.note.clone().unwrap_or_default(),
                        };
                    }
                    Some(step) => {
                        yield OrchestratorEvent::StageCompleted { stage: stage_id, note: step.note.clone() };
                    }
                    None => {}
                }

                match stage_id {
                    StageId::StatuteRetriever if !ctx.statutes.is_empty() => {
                        yield OrchestratorEvent::Statutes(
                            ctx.statutes.iter().take(STREAM_STATUTE_LIMIT).cloned().collect(),
                        );
                    }
                    StageId::CaseRetriever if !ctx.case_laws.is_empty() => {
                        yield OrchestratorEvent::CaseLaws(
                            ctx.case_laws.iter().take(STREAM_CASE_LIMIT).cloned().collect(),
                        );
                    }
                    StageId::CitationBuilder if !ctx.citations.is_empty() => {
                        yield OrchestratorEvent::Citations(ctx.citations.clone());
                    }
                    _ => {}
                }
            }

            yield OrchestratorEvent::Response {
                primary: ctx.response_primary.clone(),
                secondary: ctx.response_secondary.clone(),
                statutes: ctx.statutes.clone(),
                case_laws: ctx.case_laws.clone(),
                ipc_bns_mappings: ctx.ipc_bns_mappings.clone(),
                citations: ctx.citations.clone(),
            };

            yield OrchestratorEvent::Complete { session_id };
        }
    }

    async fn run_stage(&self, stage_id: StageId, ctx: RequestContext) -> RequestContext {
        match stage_id {
            StageId::QueryAnalyzer => self.query_analyzer.run(ctx).await,
            StageId::StatuteRetriever => self.statute_retriever.run(ctx).await,
            StageId::CaseRetriever => self.case_retriever.run(ctx).await,
            StageId::RegulatoryFilter => self.regulatory_filter.run(ctx).await,
            StageId::CitationBuilder => self.citation_builder.run(ctx).await,
            StageId::Summarizer => self.summarizer.run(ctx).await,
            StageId::Responder => self.responder.run(ctx).await,
        }
    }

    /// Domain fixed list surfaced for clients that need to render a
    /// jurisdiction picker without round-tripping a query.
    pub fn supported_domains(&self) -> &'static [Domain] {
        Domain::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::StreamExt;

    struct EmptyStore;

    #[async_trait]
    impl StructuredStore for EmptyStore {
        async fn get_section(&self, _section_number: &str, _act_code: &str) -> Result<Option<Statute>> {
            Ok(None)
        }
        async fn search_statutes(
            &self,
            _query: &str,
            _act_codes: Option<&[String]>,
            _domain: Option<Domain>,
            _limit: usize,
        ) -> Result<Vec<Statute>> {
            Ok(Vec::new())
        }
        async fn get_ipc_bns_mapping(&self, _ipc_section: &str) -> Result<Option<Mapping>> {
            Ok(None)
        }
        async fn get_cases_by_section(&self, _section_number: &str, _limit: usize) -> Result<Vec<Case>> {
            Ok(Vec::new())
        }
        async fn search_cases(
            &self,
            _query: &str,
            _court: Option<&str>,
            _domain: Option<Domain>,
            _limit: usize,
        ) -> Result<Vec<Case>> {
            Ok(Vec::new())
        }
        async fn get_landmark_cases(&self, _domain: Option<Domain>, _limit: usize) -> Result<Vec<Case>> {
            Ok(Vec::new())
        }
    }

    fn orchestrator() -> Orchestrator {
        Orchestrator::new(Arc::new(EmptyStore), None, None, None)
    }

    #[tokio::test]
    async fn rejects_out_of_scope_query_and_still_responds() {
        let orchestrator = orchestrator();
        let ctx = orchestrator
            .run("best recipe for biryani", None, None, None, None)
            .await
            .unwrap();

        assert!(!ctx.is_relevant);
        assert!(ctx.response_primary.is_some());
    }

    #[tokio::test]
    async fn empty_query_is_input_invalid_with_no_stages_run() {
        let orchestrator = orchestrator();
        let err = orchestrator.run("   ", None, None, None, None).await.unwrap_err();
        assert!(matches!(err, nyayarag_core::Error::InputInvalid(_)));
    }

    #[tokio::test]
    async fn oversized_query_is_input_invalid() {
        let orchestrator = orchestrator();
        let query = "a".repeat(5001);
        let err = orchestrator.run(&query, None, None, None, None).await.unwrap_err();
        assert!(matches!(err, nyayarag_core::Error::InputInvalid(_)));
    }

    #[tokio::test]
    async fn streaming_rejects_empty_query_without_start_event() {
        let orchestrator = orchestrator();
        let token = CancellationToken::new();
        let stream = orchestrator.run_streaming(String::new(), None, None, None, None, token);
        tokio::pin!(stream);

        let mut saw_start = false;
        let mut saw_error = false;
        while let Some(event) = stream.next().await {
            match event {
                OrchestratorEvent::Start { .. } => saw_start = true,
                OrchestratorEvent::Error { .. } => saw_error = true,
                _ => {}
            }
        }

        assert!(!saw_start);
        assert!(saw_error);
    }

    #[tokio::test]
    async fn streaming_emits_start_and_complete() {
        let orchestrator = orchestrator();
        let token = CancellationToken::new();
        let stream = orchestrator.run_streaming(
            "murder punishment under ipc".to_string(),
            None,
            None,
            None,
            None,
            token,
        );
        tokio::pin!(stream);

        let mut saw_start = false;
        let mut saw_complete = false;
        while let Some(event) = stream.next().await {
            match event {
                OrchestratorEvent::Start { .. } => saw_start = true,
                OrchestratorEvent::Complete { .. } => saw_complete = true,
                _ => {}
            }
        }

        assert!(saw_start);
        assert!(saw_complete);
    }

    #[tokio::test]
    async fn cancellation_stops_remaining_stages() {
        let orchestrator = orchestrator();
        let token = CancellationToken::new();
        token.cancel();

        let stream = orchestrator.run_streaming("section 302 ipc".to_string(), None, None, None, None, token);
        tokio::pin!(stream);

        let mut saw_cancelled = false;
        while let Some(event) = stream.next().await {
            if matches!(event, OrchestratorEvent::Cancelled { .. }) {
                saw_cancelled = true;
            }
        }

        assert!(saw_cancelled);
    }

    #[tokio::test]
    async fn seeded_store_resolves_murder_statutes_and_mapping() {
        let orchestrator = Orchestrator::with_seeded_store(None, None, None);
        let ctx = orchestrator
            .run("What is punishment for murder under section 302?", None, None, Some("criminal".into()), None)
            .await
            .unwrap();

        assert!(ctx.is_relevant);
        assert!(ctx.statutes.iter().any(|s| s.section_number == "302" && s.act_code == "IPC"));
        assert!(ctx.ipc_bns_mappings.iter().any(|m| m.ipc_section == "302" && m.bns_section == "103"));
        assert_eq!(ctx.citations.len(), ctx.citations.iter().map(|c| &c.url).collect::<std::collections::HashSet<_>>().len());
    }

    #[tokio::test]
    async fn seeded_store_rejects_mismatched_domain() {
        let orchestrator = Orchestrator::with_seeded_store(None, None, None);
        let ctx = orchestrator
            .run("divorce grounds under Hindu law", None, None, Some("traffic".into()), None)
            .await
            .unwrap();

        assert!(!ctx.is_relevant);
        assert!(ctx.statutes.is_empty());
        assert!(ctx.citations.is_empty());
    }
}
