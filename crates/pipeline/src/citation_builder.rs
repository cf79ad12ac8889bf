//! S5 CitationBuilder (spec.md §4.5), grounded on `citation_agent.py`:
//! turns the statutes, cases, and IPC↔BNS mappings accumulated so far
//! into verifiable `Citation` records with cleaned excerpts, then
//! deduplicates by URL, keeping the first occurrence.

use std::collections::HashSet;

use async_trait::async_trait;

use nyayarag_config::{clean_legal_text, ipc_section_doc_id, official_source};
use nyayarag_core::{Case, Citation, CitationType, Mapping, RequestContext, Stage, StageId, Statute};

const STATUTE_EXCERPT_LIMIT: usize = 500;
const CASE_EXCERPT_LIMIT: usize = 300;

pub struct CitationBuilder;

impl CitationBuilder {
    fn truncate(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let truncated: String = text.chars().take(max_chars).collect();
            format!("{truncated}...")
        }
    }

    fn statute_citation(statute: &Statute, id: String) -> Citation {
        let source = official_source(&statute.act_code);
        let source_name = source.map(|s| s.source_name.to_string()).unwrap_or_else(|| statute.act_name.clone());
        let base_url = source.map(|s| s.base_url.to_string()).unwrap_or_default();

        let url = if statute.act_code == "IPC" {
            match ipc_section_doc_id(&statute.section_number) {
                Some(doc_id) => format!("https://indiankanoon.org/doc/{doc_id}/"),
                None => format!("https://indiankanoon.org/search/?formInput=IPC+section+{}", statute.section_number),
            }
        } else if !base_url.is_empty() {
            format!("{base_url}#section-{}", statute.section_number)
        } else {
            format!("https://indiankanoon.org/search/?formInput={}+section+{}", statute.act_code, statute.section_number)
        };

        Citation {
            id,
            kind: CitationType::Statute,
            title: format!("{} Section {} - {}", statute.act_code, statute.section_number, statute.title),
            source_key: statute.act_code.clone(),
            source_name,
            url,
            excerpt: Self::truncate(&clean_legal_text(&statute.content), STATUTE_EXCERPT_LIMIT),
            year: statute.year_enacted,
            verified: true,
            takeaway: None,
            is_landmark: None,
        }
    }

    fn case_citation(case: &Case, id: String) -> Citation {
        let url = case.source_url.clone().unwrap_or_else(|| {
            let safe_name: String = case
                .case_name
                .chars()
                .filter(|c| c.is_alphanumeric() || c.is_whitespace())
                .collect();
            let encoded_name = safe_name.split_whitespace().collect::<Vec<_>>().join("%20");
            let qualifier = match case.court.as_str() {
                "supreme_court" => "%20supreme%20court",
                "high_court" => "%20high%20court",
                _ => "",
            };
            format!("https://indiankanoon.org/search/?formInput={encoded_name}{qualifier}")
        });

        let title = match &case.citation_string {
            Some(citation_string) if !citation_string.is_empty() => {
                format!("{} ({})", case.case_name, citation_string)
            }
            _ => case.case_name.clone(),
        };

        Citation {
            id,
            kind: CitationType::CaseLaw,
            title,
            source_key: "case_law".to_string(),
            source_name: "Indian Kanoon".to_string(),
            url,
            excerpt: Self::truncate(&clean_legal_text(&case.summary), CASE_EXCERPT_LIMIT),
            year: case.reporting_year,
            verified: true,
            takeaway: None,
            is_landmark: Some(case.is_landmark),
        }
    }

    fn mapping_citation(mapping: &Mapping, id: String) -> Citation {
        Citation {
            id,
            kind: CitationType::Mapping,
            title: format!("IPC Section {} \u{2192} BNS Section {} Mapping", mapping.ipc_section, mapping.bns_section),
            source_key: "gazette".to_string(),
            source_name: "Ministry of Home Affairs Gazette Notification".to_string(),
            url: "https://egazette.gov.in/WriteReadData/2023/248044.pdf".to_string(),
            excerpt: format!(
                "IPC Section {} corresponds to BNS Section {} under the Bharatiya Nyaya Sanhita, 2023.",
                mapping.ipc_section, mapping.bns_section
            ),
            year: Some(2023),
            verified: true,
            takeaway: None,
            is_landmark: None,
        }
    }

    fn deduplicate(citations: Vec<Citation>) -> Vec<Citation> {
        let mut seen_urls = HashSet::new();
        citations.into_iter().filter(|c| seen_urls.insert(c.url.clone())).collect()
    }
}

#[async_trait]
impl Stage for CitationBuilder {
    async fn run(&self, mut ctx: RequestContext) -> RequestContext {
        ctx.start_stage(StageId::CitationBuilder);

        if !ctx.is_relevant {
            ctx.complete_stage(StageId::CitationBuilder, Some("skipped: query rejected upstream".into()));
            return ctx;
        }

        let mut citations = Vec::new();
        let mut counter = 0usize;

        for statute in &ctx.statutes {
            counter += 1;
            citations.push(Self::statute_citation(statute, format!("citation-{counter}")));
        }
        for case in &ctx.case_laws {
            counter += 1;
            citations.push(Self::case_citation(case, format!("citation-{counter}")));
        }
        for mapping in &ctx.ipc_bns_mappings {
            counter += 1;
            citations.push(Self::mapping_citation(mapping, format!("citation-{counter}")));
        }

        ctx.citations = Self::deduplicate(citations);

        let note = format!("citations={}", ctx.citations.len());
        ctx.complete_stage(StageId::CitationBuilder, Some(note));
        ctx
    }

    fn id(&self) -> StageId {
        StageId::CitationBuilder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nyayarag_core::Domain;

    fn sample_statute() -> Statute {
        Statute {
            id: "ipc-302".into(),
            act_code: "IPC".into(),
            act_name: "Indian Penal Code".into(),
            section_number: "302".into(),
            title: "Punishment for murder".into(),
            content: "Whoever commits murder shall be punished [Ins. by Act 1 of 1870] with death.".into(),
            domain: Domain::Criminal,
            year_enacted: Some(1860),
            is_cognizable: true,
            is_bailable: false,
            punishment_description: None,
        }
    }

    #[tokio::test]
    async fn builds_citation_with_known_doc_id() {
        let stage = CitationBuilder;
        let mut ctx = RequestContext::new("q", "s1", None, None);
        ctx.statutes.push(sample_statute());

        let ctx = stage.run(ctx).await;
        assert_eq!(ctx.citations.len(), 1);
        assert!(ctx.citations[0].url.contains("indiankanoon.org/doc/"));
        assert!(!ctx.citations[0].excerpt.contains("Ins. by Act"));
    }

    fn sample_case(court: &str) -> Case {
        Case {
            id: "case-1".into(),
            case_name: "State v. Example".into(),
            court: court.into(),
            court_name: "Example Court".into(),
            citation_string: None,
            reporting_year: Some(2020),
            summary: "A summary.".into(),
            key_holdings: vec![],
            is_landmark: false,
            domain: Domain::Criminal,
            source_url: None,
            cited_sections: vec![],
        }
    }

    #[tokio::test]
    async fn case_citation_adds_court_qualifier_when_source_url_missing() {
        let stage = CitationBuilder;
        let mut ctx = RequestContext::new("q", "s1", None, None);
        ctx.case_laws.push(sample_case("supreme_court"));

        let ctx = stage.run(ctx).await;
        assert!(ctx.citations[0].url.ends_with("%20supreme%20court"));
    }

    #[tokio::test]
    async fn case_citation_prefers_source_url_when_present() {
        let stage = CitationBuilder;
        let mut ctx = RequestContext::new("q", "s1", None, None);
        let mut case = sample_case("high_court");
        case.source_url = Some("https://indiankanoon.org/doc/123/".into());
        ctx.case_laws.push(case);

        let ctx = stage.run(ctx).await;
        assert_eq!(ctx.citations[0].url, "https://indiankanoon.org/doc/123/");
    }

    #[tokio::test]
    async fn deduplicates_by_url() {
        let stage = CitationBuilder;
        let mut ctx = RequestContext::new("q", "s1", None, None);
        ctx.statutes.push(sample_statute());
        ctx.statutes.push(sample_statute());

        let ctx = stage.run(ctx).await;
        assert_eq!(ctx.citations.len(), 1);
    }
}
