//! S2 StatuteRetriever (spec.md §4.2), grounded on `statute_agent.py`:
//! exact section lookups first, then hybrid search, then — only if
//! neither of those produced a single statute — a keyword-search
//! fallback against the structured store, deduplicated by id and capped
//! at five statutes. IPC sections found along the way also resolve their
//! BNS mapping.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use nyayarag_core::{
    Domain, MetadataFilter, RequestContext, Retriever, RetrieveOptions, Stage, StageId, Statute,
    StructuredStore,
};

const MAX_STATUTES: usize = 5;

pub struct StatuteRetriever {
    store: Arc<dyn StructuredStore>,
    retriever: Option<Arc<dyn Retriever>>,
}

impl StatuteRetriever {
    pub fn new(store: Arc<dyn StructuredStore>, retriever: Option<Arc<dyn Retriever>>) -> Self {
        Self { store, retriever }
    }

    fn push_unique(statutes: &mut Vec<Statute>, candidate: Statute) {
        if !statutes.iter().any(|s| s.id == candidate.id) {
            statutes.push(candidate);
        }
    }

    fn document_to_statute(doc: &nyayarag_core::Document, fallback_domain: Option<Domain>) -> Option<Statute> {
        let act_code = doc.metadata.get("act_code")?.as_str()?.to_string();
        let section_number = doc.metadata.get("section_number")?.as_str()?.to_string();
        let title = doc
            .metadata
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or(&section_number)
            .to_string();
        let act_name = doc
            .metadata
            .get("act_name")
            .and_then(|v| v.as_str())
            .unwrap_or(&act_code)
            .to_string();
        let domain = doc
            .metadata
            .get("domain")
            .and_then(|v| v.as_str())
            .and_then(Domain::parse)
            .or(fallback_domain)
            .unwrap_or_default();

        Some(Statute {
            id: doc.id.clone(),
            act_code,
            act_name,
            section_number,
            title,
            content: doc.content.clone(),
            domain,
            year_enacted: doc.metadata.get("year_enacted").and_then(|v| v.as_u64()).map(|n| n as u32),
            is_cognizable: doc.metadata.get("is_cognizable").and_then(|v| v.as_bool()).unwrap_or(false),
            is_bailable: doc.metadata.get("is_bailable").and_then(|v| v.as_bool()).unwrap_or(false),
            punishment_description: doc
                .metadata
                .get("punishment_description")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
        })
    }
}

#[async_trait]
impl Stage for StatuteRetriever {
    async fn run(&self, mut ctx: RequestContext) -> RequestContext {
        ctx.start_stage(StageId::StatuteRetriever);

        if !ctx.is_relevant {
            ctx.complete_stage(StageId::StatuteRetriever, Some("skipped: query rejected upstream".into()));
            return ctx;
        }

        let mut statutes: Vec<Statute> = Vec::new();
        let sections: Vec<String> = ctx
            .entities
            .iter()
            .filter(|e| e.kind == "section")
            .map(|e| e.value.clone())
            .collect();

        for section in &sections {
            for act in ctx.applicable_acts.clone() {
                match self.store.get_section(section, &act).await {
                    Ok(Some(statute)) => Self::push_unique(&mut statutes, statute),
                    Ok(None) => {}
                    Err(err) => ctx.error_stage(StageId::StatuteRetriever, format!("get_section({section}, {act}): {err}")),
                }
            }
        }

        let query = ctx.reformulated_query.clone().unwrap_or_else(|| ctx.query.clone());

        if let Some(retriever) = &self.retriever {
            let mut options = RetrieveOptions::default().with_top_k(MAX_STATUTES);
            if let Some(domain) = ctx.detected_domain {
                options = options.with_filter(MetadataFilter::eq("domain", domain.as_str()));
            }
            match retriever.search(&query, &options).await {
                Ok(docs) => {
                    for doc in &docs {
                        if let Some(statute) = Self::document_to_statute(doc, ctx.detected_domain) {
                            Self::push_unique(&mut statutes, statute);
                        }
                    }
                }
                Err(err) => {
                    warn!(error = %err, "statute hybrid search unavailable, falling back to keyword search");
                    ctx.error_stage(StageId::StatuteRetriever, format!("hybrid search: {err}"));
                }
            }
        }

        if statutes.is_empty() {
            let acts = ctx.applicable_acts.clone();
            let act_filter = if acts.is_empty() { None } else { Some(acts.as_slice()) };
            match self
                .store
                .search_statutes(&query, act_filter, ctx.detected_domain, MAX_STATUTES)
                .await
            {
                Ok(results) => {
                    for statute in results {
                        Self::push_unique(&mut statutes, statute);
                    }
                }
                Err(err) => ctx.error_stage(StageId::StatuteRetriever, format!("search_statutes: {err}")),
            }
        }

        statutes.truncate(MAX_STATUTES);

        for statute in &statutes {
            if statute.act_code != "IPC" {
                continue;
            }
            match self.store.get_ipc_bns_mapping(&statute.section_number).await {
                Ok(Some(mapping)) => {
                    if !ctx.ipc_bns_mappings.iter().any(|m| m.ipc_section == mapping.ipc_section) {
                        ctx.ipc_bns_mappings.push(mapping);
                    }
                }
                Ok(None) => {}
                Err(err) => ctx.error_stage(StageId::StatuteRetriever, format!("get_ipc_bns_mapping: {err}")),
            }
        }

        ctx.statutes = statutes;
        let note = format!("statutes={} mappings={}", ctx.statutes.len(), ctx.ipc_bns_mappings.len());
        ctx.complete_stage(StageId::StatuteRetriever, Some(note));
        ctx
    }

    fn id(&self) -> StageId {
        StageId::StatuteRetriever
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait as at;
    use nyayarag_core::{Case, Mapping, Result};

    struct EmptyStore;

    #[at]
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

    #[tokio::test]
    async fn skips_retrieval_when_not_relevant() {
        let stage = StatuteRetriever::new(Arc::new(EmptyStore), None);
        let mut ctx = RequestContext::new("q", "s1", None, None);
        ctx.reject("out of scope");
        let ctx = stage.run(ctx).await;
        assert!(ctx.statutes.is_empty());
    }

    #[tokio::test]
    async fn empty_store_yields_no_statutes() {
        let stage = StatuteRetriever::new(Arc::new(EmptyStore), None);
        let ctx = RequestContext::new("murder under section 302", "s1", None, None);
        let ctx = stage.run(ctx).await;
        assert!(ctx.statutes.is_empty());
    }

    fn sample_statute(section_number: &str) -> Statute {
        Statute {
            id: format!("ipc-{section_number}"),
            act_code: "IPC".into(),
            act_name: "Indian Penal Code".into(),
            section_number: section_number.into(),
            title: "Punishment for murder".into(),
            content: "Whoever commits murder shall be punished.".into(),
            domain: Domain::Criminal,
            year_enacted: Some(1860),
            is_cognizable: true,
            is_bailable: false,
            punishment_description: None,
        }
    }

    struct ExactHitStore {
        keyword_search_calls: std::sync::atomic::AtomicUsize,
    }

    #[at]
    impl StructuredStore for ExactHitStore {
        async fn get_section(&self, section_number: &str, _act_code: &str) -> Result<Option<Statute>> {
            Ok(Some(sample_statute(section_number)))
        }
        async fn search_statutes(
            &self,
            _query: &str,
            _act_codes: Option<&[String]>,
            _domain: Option<Domain>,
            _limit: usize,
        ) -> Result<Vec<Statute>> {
            self.keyword_search_calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(vec![sample_statute("999")])
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

    #[tokio::test]
    async fn keyword_fallback_is_skipped_once_exact_lookup_finds_a_statute() {
        let store = Arc::new(ExactHitStore { keyword_search_calls: std::sync::atomic::AtomicUsize::new(0) });
        let stage = StatuteRetriever::new(store.clone(), None);
        let mut ctx = RequestContext::new("murder under section 302", "s1", None, None);
        ctx.add_applicable_act("IPC");
        ctx.entities.push(nyayarag_core::Entity::section("302"));

        let ctx = stage.run(ctx).await;
        assert_eq!(ctx.statutes.len(), 1);
        assert_eq!(ctx.statutes[0].section_number, "302");
        assert_eq!(store.keyword_search_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }
}
