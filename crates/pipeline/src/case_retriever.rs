//! S3 CaseRetriever (spec.md §4.3), grounded on `case_agent.py`: cases
//! cited under the top statutes first, a domain-filtered keyword search
//! fallback, landmark cases always appended, and an optional semantic
//! search topping up the remainder — deduplicated by id and capped at
//! five.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use nyayarag_core::{Case, Domain, RequestContext, Retriever, RetrieveOptions, Stage, StageId, StructuredStore};

const MAX_CASES: usize = 5;
const CASES_PER_SECTION: usize = 2;
const LANDMARK_CASES: usize = 2;

pub struct CaseRetriever {
    store: Arc<dyn StructuredStore>,
    retriever: Option<Arc<dyn Retriever>>,
}

impl CaseRetriever {
    pub fn new(store: Arc<dyn StructuredStore>, retriever: Option<Arc<dyn Retriever>>) -> Self {
        Self { store, retriever }
    }

    fn push_unique(cases: &mut Vec<Case>, candidate: Case) {
        if !cases.iter().any(|c| c.id == candidate.id) {
            cases.push(candidate);
        }
    }

    fn document_to_case(doc: &nyayarag_core::Document, fallback_domain: Option<Domain>) -> Option<Case> {
        let case_name = doc.metadata.get("case_name")?.as_str()?.to_string();
        let court = doc.metadata.get("court").and_then(|v| v.as_str()).unwrap_or("").to_string();
        let court_name = doc
            .metadata
            .get("court_name")
            .and_then(|v| v.as_str())
            .unwrap_or(&court)
            .to_string();
        let domain = doc
            .metadata
            .get("domain")
            .and_then(|v| v.as_str())
            .and_then(Domain::parse)
            .or(fallback_domain)
            .unwrap_or_default();

        Some(Case {
            id: doc.id.clone(),
            case_name,
            court,
            court_name,
            citation_string: doc.metadata.get("citation_string").and_then(|v| v.as_str()).map(|s| s.to_string()),
            reporting_year: doc.metadata.get("reporting_year").and_then(|v| v.as_u64()).map(|n| n as u32),
            summary: doc.content.clone(),
            key_holdings: doc
                .metadata
                .get("key_holdings")
                .and_then(|v| v.as_array())
                .map(|a| a.iter().filter_map(|x| x.as_str().map(|s| s.to_string())).collect())
                .unwrap_or_default(),
            is_landmark: doc.metadata.get("is_landmark").and_then(|v| v.as_bool()).unwrap_or(false),
            domain,
            source_url: doc.metadata.get("source_url").and_then(|v| v.as_str()).map(|s| s.to_string()),
            cited_sections: doc
                .metadata
                .get("cited_sections")
                .and_then(|v| v.as_array())
                .map(|a| a.iter().filter_map(|x| x.as_str().map(|s| s.to_string())).collect())
                .unwrap_or_default(),
        })
    }
}

#[async_trait]
impl Stage for CaseRetriever {
    async fn run(&self, mut ctx: RequestContext) -> RequestContext {
        ctx.start_stage(StageId::CaseRetriever);

        if !ctx.is_relevant {
            ctx.complete_stage(StageId::CaseRetriever, Some("skipped: query rejected upstream".into()));
            return ctx;
        }

        let mut cases: Vec<Case> = Vec::new();

        for statute in ctx.statutes.iter().take(3) {
            match self.store.get_cases_by_section(&statute.section_number, CASES_PER_SECTION).await {
                Ok(results) => {
                    for case in results {
                        Self::push_unique(&mut cases, case);
                    }
                }
                Err(err) => ctx.error_stage(StageId::CaseRetriever, format!("get_cases_by_section: {err}")),
            }
        }

        let query = ctx.reformulated_query.clone().unwrap_or_else(|| ctx.query.clone());

        if cases.is_empty() {
            match self.store.search_cases(&query, None, ctx.detected_domain, MAX_CASES).await {
                Ok(results) => {
                    for case in results {
                        Self::push_unique(&mut cases, case);
                    }
                }
                Err(err) => ctx.error_stage(StageId::CaseRetriever, format!("search_cases: {err}")),
            }
        }

        let landmark_domain = ctx.detected_domain;
        match self.store.get_landmark_cases(landmark_domain, LANDMARK_CASES).await {
            Ok(results) => {
                for case in results {
                    Self::push_unique(&mut cases, case);
                }
            }
            Err(err) => ctx.error_stage(StageId::CaseRetriever, format!("get_landmark_cases: {err}")),
        }

        if cases.len() < MAX_CASES {
            if let Some(retriever) = &self.retriever {
                let options = RetrieveOptions::default().with_top_k(MAX_CASES);
                match retriever.search(&query, &options).await {
                    Ok(docs) => {
                        for doc in &docs {
                            if cases.len() >= MAX_CASES {
                                break;
                            }
                            if let Some(case) = Self::document_to_case(doc, ctx.detected_domain) {
                                Self::push_unique(&mut cases, case);
                            }
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, "case semantic search unavailable");
                        ctx.error_stage(StageId::CaseRetriever, format!("semantic search: {err}"));
                    }
                }
            }
        }

        cases.truncate(MAX_CASES);
        ctx.case_laws = cases;

        let note = format!("cases={}", ctx.case_laws.len());
        ctx.complete_stage(StageId::CaseRetriever, Some(note));
        ctx
    }

    fn id(&self) -> StageId {
        StageId::CaseRetriever
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait as at;
    use nyayarag_core::{Mapping, Result, Statute};

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
        let stage = CaseRetriever::new(Arc::new(EmptyStore), None);
        let mut ctx = RequestContext::new("q", "s1", None, None);
        ctx.reject("out of scope");
        let ctx = stage.run(ctx).await;
        assert!(ctx.case_laws.is_empty());
    }
}
