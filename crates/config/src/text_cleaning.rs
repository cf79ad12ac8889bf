//! Idempotent legal-text cleaning tables used by `CitationBuilder`
//! (spec.md §4.5.1), grounded on the original's `_clean_legal_text`:
//! amendment-annotation and footnote-marker stripping, OCR word-join
//! repair, punctuation and dash normalization, whitespace collapse, and
//! skipping a truncated leading fragment forward to the next sentence.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches bracketed amendment annotations such as
/// `[Ins. by Act 13 of 2018]` or `(w.e.f. 21-4-2018)`.
pub static AMENDMENT_ANNOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\[(?:ins\.|subs\.|omitted|added|w\.e\.f\.)[^\]]*\]|\((?:w\.e\.f\.|subs\.|ins\.)[^)]*\)")
        .expect("amendment annotation regex")
});

/// Stray footnote markers and double pipes left over from bare-act OCR
/// extraction: a leading digit run glued to `[`, a trailing digit run
/// glued to `]`, and `||` (`citation_agent.py:77-78,75-76`).
pub static FOOTNOTE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\[|\]\d+|\|\|").expect("footnote marker regex"));

/// Common OCR word-join breaks seen in scanned bare-act text: a lowercase
/// letter immediately followed by an uppercase letter with no space, e.g.
/// `shallbe` -> `shall be`. We only fix a small fixed table of known
/// offenders rather than a general heuristic, to avoid mangling proper
/// nouns like `McDonald`.
pub static OCR_WORD_JOIN_FIXES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("shallbe", "shall be"),
        ("shallnot", "shall not"),
        ("mayalso", "may also"),
        ("ofthe", "of the"),
        ("tothe", "to the"),
        ("inthe", "in the"),
        ("bythe", "by the"),
        ("andthe", "and the"),
        ("forthe", "for the"),
        ("withthe", "with the"),
    ]
});

/// The next sentence boundary followed by a capitalized word, used by
/// step 5 to find where a truncated leading fragment ends
/// (`citation_agent.py:184`: `re.search(r'[.]\s*([A-Z][a-z])', text)`).
static NEXT_SENTENCE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.]\s*([A-Z][a-z])").expect("next sentence start regex"));

static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("multi space regex"));
static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([,.;:!?])").expect("space before punct"));

/// Cleans raw statute/case text extracted from source documents.
/// Idempotent: running it twice on its own output is a no-op.
pub fn clean_legal_text(input: &str) -> String {
    let mut text = AMENDMENT_ANNOTATION.replace_all(input, "").to_string();
    text = FOOTNOTE_MARKER.replace_all(&text, "").to_string();

    for (broken, fixed) in OCR_WORD_JOIN_FIXES.iter() {
        text = text.replace(broken, fixed);
    }

    text = SPACE_BEFORE_PUNCT.replace_all(&text, "$1").to_string();
    // En dash to spaced hyphen (citation_agent.py:177).
    text = text.replace('–', " - ");
    text = MULTI_SPACE.replace_all(&text, " ").to_string();
    text = text.trim().to_string();

    // Step 5: amendment stripping above can leave text starting mid-sentence
    // (e.g. a dangling "of the offence. Whoever..."). If so, skip ahead to
    // the next capitalized sentence (citation_agent.py:179-186).
    let starts_mid_sentence =
        text.chars().next().is_some_and(|c| c.is_lowercase()) || text.starts_with("of ") || text.starts_with("for ");
    if starts_mid_sentence {
        if let Some(caps) = NEXT_SENTENCE_START.captures(&text) {
            let capital_start = caps.get(1).expect("group 1 always matches with the pattern").start();
            text = text[capital_start..].to_string();
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_amendment_annotations() {
        let input = "Whoever commits murder [Ins. by Act 13 of 2018] shall be punished.";
        let cleaned = clean_legal_text(input);
        assert!(!cleaned.contains("Ins. by Act"));
    }

    #[test]
    fn fixes_ocr_word_joins() {
        let cleaned = clean_legal_text("The accused shallbe punished ofthe offence.");
        assert!(cleaned.contains("shall be"));
        assert!(cleaned.contains("of the"));
    }

    #[test]
    fn collapses_whitespace() {
        let cleaned = clean_legal_text("  Section 302:   Whoever   commits murder.");
        assert_eq!(cleaned, "Section 302: Whoever commits murder.");
    }

    #[test]
    fn strips_footnote_markers_and_double_pipes() {
        let cleaned = clean_legal_text("Whoever 84[commits murder]84 shall be punished||.");
        assert!(!cleaned.contains('['));
        assert!(!cleaned.contains(']'));
        assert!(!cleaned.contains("||"));
    }

    #[test]
    fn normalizes_en_dash() {
        let cleaned = clean_legal_text("Death – or imprisonment for life.");
        assert!(cleaned.contains(" - "));
    }

    #[test]
    fn advances_past_truncated_leading_fragment() {
        let cleaned = clean_legal_text("of the offence committed under this section. Whoever commits murder shall be punished.");
        assert_eq!(cleaned, "Whoever commits murder shall be punished.");
    }

    #[test]
    fn leaves_properly_capitalized_text_untouched() {
        let cleaned = clean_legal_text("Whoever commits murder shall be punished.");
        assert_eq!(cleaned, "Whoever commits murder shall be punished.");
    }

    #[test]
    fn is_idempotent() {
        let once = clean_legal_text("Section 420. Whoever  cheats  shallbe punished [w.e.f. 1-1-2019].");
        let twice = clean_legal_text(&once);
        assert_eq!(once, twice);
    }
}
