//! Deterministic Markdown fallback used by `Responder` when the Generator
//! is unavailable (spec.md §4.7 "Generator unavailable" / §7 degraded
//! mode): renders the retrieved statutes, cases, and regulatory notes
//! directly, with no paraphrasing, plus the bilingual disclaimer footer.

use nyayarag_core::{Language, RequestContext};
use nyayarag_config::disclaimer_for;

pub fn render_fallback(ctx: &RequestContext) -> String {
    let mut out = String::new();

    out.push_str("_The legal assistant's generation service is temporarily unavailable. \
Below is the supporting material retrieved for your question._\n\n");

    if ctx.statutes.is_empty() && ctx.case_laws.is_empty() {
        out.push_str("No directly relevant statutes or case law were found for this query.\n\n");
    }

    if !ctx.statutes.is_empty() {
        out.push_str("## Relevant Statutes\n\n");
        for statute in &ctx.statutes {
            out.push_str(&format!(
                "- **{} Section {}** — {}: {}\n",
                statute.act_code, statute.section_number, statute.title, statute.content
            ));
        }
        out.push('\n');
    }

    if !ctx.case_laws.is_empty() {
        out.push_str("## Relevant Case Law\n\n");
        for case in &ctx.case_laws {
            out.push_str(&format!("- **{}** ({}) — {}\n", case.case_name, case.court_name, case.summary));
        }
        out.push('\n');
    }

    if !ctx.ipc_bns_mappings.is_empty() {
        out.push_str("## IPC \u{2192} BNS Mapping\n\n");
        for mapping in &ctx.ipc_bns_mappings {
            out.push_str(&format!(
                "- IPC {} corresponds to BNS {} ({:?})\n",
                mapping.ipc_section, mapping.bns_section, mapping.mapping_type
            ));
        }
        out.push('\n');
    }

    if let Some(notes) = &ctx.regulatory_notes {
        out.push_str("## Regulatory Notes\n\n");
        out.push_str(&format!("Applicable acts: {}\n\n", notes.applicable_acts.join(", ")));
        out.push_str(&format!("Key authorities: {}\n\n", notes.key_authorities.join(", ")));
    }

    out.push_str(disclaimer_for(ctx.detected_language));
    out
}

/// Used by `Responder` for the secondary/bilingual response when the
/// request language differs from English and no generator is available.
pub fn render_fallback_disclaimer_only(language: Language) -> String {
    disclaimer_for(language).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nyayarag_core::{Domain, Statute};

    #[test]
    fn renders_statutes_and_disclaimer() {
        let mut ctx = RequestContext::new("q", "s1", None, None);
        ctx.statutes.push(Statute {
            id: "ipc-302".into(),
            act_code: "IPC".into(),
            act_name: "Indian Penal Code".into(),
            section_number: "302".into(),
            title: "Punishment for murder".into(),
            content: "Whoever commits murder shall be punished.".into(),
            domain: Domain::Criminal,
            year_enacted: None,
            is_cognizable: true,
            is_bailable: false,
            punishment_description: None,
        });

        let rendered = render_fallback(&ctx);
        assert!(rendered.contains("IPC Section 302"));
        assert!(rendered.contains("legal advice") || rendered.contains("\u{0915}\u{093e}\u{0928}\u{0942}\u{0928}\u{0940}"));
    }

    #[test]
    fn empty_context_notes_no_results() {
        let ctx = RequestContext::new("q", "s1", None, None);
        let rendered = render_fallback(&ctx);
        assert!(rendered.contains("No directly relevant"));
    }
}
