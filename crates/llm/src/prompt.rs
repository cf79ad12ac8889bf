//! Builds the constrained generation prompt from a `RequestContext`
//! (spec.md §4.6, §4.7, §9 "Long-context generator inputs").
//!
//! Context is capped per-source to keep the prompt within the generator's
//! window: the top 5 statutes (content truncated to 800 characters each),
//! top 3 cases, all IPC↔BNS mappings collected so far, and the regulatory
//! notes bundle if present.

use nyayarag_core::{Case, GenerateRequest, Mapping, RegulatoryNotes, RequestContext, Statute};
use nyayarag_config::system_preamble_for;

const MAX_STATUTES: usize = 5;
const MAX_CASES: usize = 3;
const STATUTE_CONTENT_LIMIT: usize = 800;

pub struct PromptBuilder;

impl PromptBuilder {
    /// Builds the full generator request for `Summarizer`'s call into the
    /// Generator (L0), from the statutes/cases/mappings/notes accumulated
    /// on `ctx` so far.
    pub fn build(ctx: &RequestContext) -> GenerateRequest {
        let system = system_preamble_for(ctx.detected_language);
        let context_section = Self::render_context(
            &ctx.statutes,
            &ctx.case_laws,
            &ctx.ipc_bns_mappings,
            ctx.regulatory_notes.as_ref(),
        );

        let query = ctx.reformulated_query.as_deref().unwrap_or(&ctx.query);

        let user_message = format!(
            "## Context\n{context_section}\n\n## Question\n{query}\n\n\
Answer the question using only the context above. Include a final line starting with \
\"📌 **Citation:**\" summarizing the single most relevant statute or case."
        );

        GenerateRequest::new(system)
            .with_user_message(user_message)
            .with_temperature(0.3)
            .with_max_tokens(768)
    }

    fn render_context(
        statutes: &[Statute],
        cases: &[Case],
        mappings: &[Mapping],
        notes: Option<&RegulatoryNotes>,
    ) -> String {
        let mut sections = Vec::new();

        if !statutes.is_empty() {
            let rendered: Vec<String> = statutes
                .iter()
                .take(MAX_STATUTES)
                .map(|s| {
                    let content = truncate(&s.content, STATUTE_CONTENT_LIMIT);
                    format!("- {} Section {} ({}): {}", s.act_code, s.section_number, s.title, content)
                })
                .collect();
            sections.push(format!("### Statutes\n{}", rendered.join("\n")));
        }

        if !cases.is_empty() {
            let rendered: Vec<String> = cases
                .iter()
                .take(MAX_CASES)
                .map(|c| format!("- {} ({}): {}", c.case_name, c.court_name, c.summary))
                .collect();
            sections.push(format!("### Case Law\n{}", rendered.join("\n")));
        }

        if !mappings.is_empty() {
            let rendered: Vec<String> = mappings
                .iter()
                .map(|m| format!("- IPC {} -> BNS {} ({:?})", m.ipc_section, m.bns_section, m.mapping_type))
                .collect();
            sections.push(format!("### IPC-BNS Mappings\n{}", rendered.join("\n")));
        }

        if let Some(notes) = notes {
            sections.push(format!(
                "### Regulatory Notes ({})\nApplicable acts: {}\nKey authorities: {}\nFiling requirements: {}\nTime limits: {}",
                notes.jurisdiction,
                notes.applicable_acts.join(", "),
                notes.key_authorities.join(", "),
                notes.filing_requirements.join(", "),
                notes.time_limits.join(", "),
            ));
        }

        if sections.is_empty() {
            "(no supporting context retrieved)".to_string()
        } else {
            sections.join("\n\n")
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
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
            content: "Whoever commits murder shall be punished with death or imprisonment for life.".into(),
            domain: Domain::Criminal,
            year_enacted: Some(1860),
            is_cognizable: true,
            is_bailable: false,
            punishment_description: Some("Death or life imprisonment".into()),
        }
    }

    #[test]
    fn builds_prompt_with_statute_context() {
        let mut ctx = RequestContext::new("What is the punishment for murder?", "s1", None, None);
        ctx.statutes.push(sample_statute());

        let request = PromptBuilder::build(&ctx);
        assert_eq!(request.messages.len(), 2);
        assert!(request.messages[1].content.contains("IPC Section 302"));
        assert!(request.messages[1].content.contains("📌"));
    }

    #[test]
    fn caps_statute_count_and_truncates_content() {
        let mut ctx = RequestContext::new("q", "s1", None, None);
        for i in 0..10 {
            let mut statute = sample_statute();
            statute.section_number = i.to_string();
            statute.content = "x".repeat(2000);
            ctx.statutes.push(statute);
        }

        let request = PromptBuilder::build(&ctx);
        let body = &request.messages[1].content;
        assert_eq!(body.matches("Section").count(), MAX_STATUTES);
        assert!(body.contains("..."));
    }

    #[test]
    fn empty_context_renders_placeholder() {
        let ctx = RequestContext::new("q", "s1", None, None);
        let request = PromptBuilder::build(&ctx);
        assert!(request.messages[1].content.contains("no supporting context"));
    }
}
