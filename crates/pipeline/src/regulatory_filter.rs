//! S4 RegulatoryFilter (spec.md §4.4), grounded on `regulatory_agent.py`:
//! re-scores the retrieved statutes and cases by domain relevance using a
//! stable sort (so equally-scored items keep their prior retrieval
//! order), and attaches the fixed regulatory-notes bundle for the
//! request's domain.

use async_trait::async_trait;

use nyayarag_config::{acts_for_domain, regulatory_notes_for};
use nyayarag_core::{RequestContext, Stage, StageId};

const EXACT_DOMAIN_BONUS: i32 = 10;
const ACT_OR_LANDMARK_BONUS: i32 = 5;

pub struct RegulatoryFilter;

#[async_trait]
impl Stage for RegulatoryFilter {
    async fn run(&self, mut ctx: RequestContext) -> RequestContext {
        ctx.start_stage(StageId::RegulatoryFilter);

        if !ctx.is_relevant {
            ctx.complete_stage(StageId::RegulatoryFilter, Some("skipped: query rejected upstream".into()));
            return ctx;
        }

        let domain = ctx.detected_domain.or(ctx.predicted_domain).unwrap_or_default();
        let acts = acts_for_domain(domain);

        let mut scored_statutes: Vec<(i32, nyayarag_core::Statute)> = ctx
            .statutes
            .drain(..)
            .map(|statute| {
                let mut score = 0;
                if statute.domain == domain {
                    score += EXACT_DOMAIN_BONUS;
                }
                if acts.contains(&statute.act_code.as_str()) {
                    score += ACT_OR_LANDMARK_BONUS;
                }
                (score, statute)
            })
            .collect();
        scored_statutes.sort_by(|a, b| b.0.cmp(&a.0));
        ctx.statutes = scored_statutes.into_iter().map(|(_, s)| s).collect();

        let mut scored_cases: Vec<(i32, nyayarag_core::Case)> = ctx
            .case_laws
            .drain(..)
            .map(|case| {
                let mut score = 0;
                if case.domain == domain {
                    score += EXACT_DOMAIN_BONUS;
                }
                if case.is_landmark {
                    score += ACT_OR_LANDMARK_BONUS;
                }
                (score, case)
            })
            .collect();
        scored_cases.sort_by(|a, b| b.0.cmp(&a.0));
        ctx.case_laws = scored_cases.into_iter().map(|(_, c)| c).collect();

        ctx.regulatory_notes = Some(regulatory_notes_for(domain));

        ctx.complete_stage(StageId::RegulatoryFilter, Some(format!("domain={domain}")));
        ctx
    }

    fn id(&self) -> StageId {
        StageId::RegulatoryFilter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nyayarag_core::{Case, Domain, Statute};

    fn statute(id: &str, act_code: &str, domain: Domain) -> Statute {
        Statute {
            id: id.into(),
            act_code: act_code.into(),
            act_name: act_code.into(),
            section_number: "1".into(),
            title: "title".into(),
            content: "content".into(),
            domain,
            year_enacted: None,
            is_cognizable: false,
            is_bailable: false,
            punishment_description: None,
        }
    }

    fn case(id: &str, domain: Domain, is_landmark: bool) -> Case {
        Case {
            id: id.into(),
            case_name: "name".into(),
            court: "court".into(),
            court_name: "court".into(),
            citation_string: None,
            reporting_year: None,
            summary: "summary".into(),
            key_holdings: Vec::new(),
            is_landmark,
            domain,
            source_url: None,
            cited_sections: Vec::new(),
        }
    }

    #[tokio::test]
    async fn reorders_statutes_by_domain_match_stably() {
        let stage = RegulatoryFilter;
        let mut ctx = RequestContext::new("q", "s1", None, None);
        ctx.detected_domain = Some(Domain::Criminal);
        ctx.statutes = vec![
            statute("a", "SEBI Act", Domain::Corporate),
            statute("b", "IPC", Domain::Criminal),
            statute("c", "BNS", Domain::Criminal),
        ];

        let ctx = stage.run(ctx).await;
        assert_eq!(ctx.statutes[0].id, "b");
        assert_eq!(ctx.statutes[1].id, "c");
        assert_eq!(ctx.statutes[2].id, "a");
    }

    #[tokio::test]
    async fn attaches_regulatory_notes() {
        let stage = RegulatoryFilter;
        let mut ctx = RequestContext::new("q", "s1", None, None);
        ctx.detected_domain = Some(Domain::Traffic);
        ctx.case_laws = vec![case("x", Domain::Traffic, true), case("y", Domain::Traffic, false)];

        let ctx = stage.run(ctx).await;
        assert!(ctx.regulatory_notes.is_some());
        assert_eq!(ctx.case_laws[0].id, "x");
    }
}
