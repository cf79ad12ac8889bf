//! Bilingual prompt text used by `Responder` and the `nyayarag-llm` prompt
//! builder (spec.md §4.7): system preambles, disclaimers, domain-gate
//! rejection templates, and the takeaway-parsing header patterns.

use nyayarag_core::Language;
use once_cell::sync::Lazy;
use regex::Regex;

/// English system preamble prefixed to every generation prompt.
pub const SYSTEM_PREAMBLE_EN: &str = "You are a legal information assistant for Indian law. \
Answer strictly from the statutes, case law, and regulatory notes supplied in the context below. \
Do not invent section numbers, case names, or citations. If the context is insufficient to answer \
confidently, say so explicitly rather than guessing.";

/// Hindi system preamble (Devanagari script).
pub const SYSTEM_PREAMBLE_HI: &str = "आप भारतीय कानून के लिए एक कानूनी सूचना सहायक हैं। \
नीचे दिए गए संदर्भ में उपलब्ध कानूनों, मामलों और विनियामक टिप्पणियों के आधार पर ही उत्तर दें। \
धारा संख्या, मामलों के नाम या उद्धरण गढ़ें नहीं। यदि संदर्भ पर्याप्त नहीं है, तो अनुमान लगाने के बजाय \
स्पष्ट रूप से यह बताएं।";

/// Hinglish (romanized Hindi/English mix) system preamble, used when the
/// detected language is Hindi but the script is Latin.
pub const SYSTEM_PREAMBLE_HINGLISH: &str = "Aap Indian law ke liye ek legal information assistant hain. \
Neeche diye gaye context mein maujood statutes, case law aur regulatory notes ke aadhar par hi jawab \
dein. Section number, case names ya citations khud se mat banayein. Agar context kaafi nahi hai to \
guess karne ke bajaye yeh saaf saaf bata dein.";

pub const DISCLAIMER_EN: &str = "This response is for general legal information only and does not \
constitute legal advice. Consult a qualified advocate for advice on your specific situation.";

pub const DISCLAIMER_HI: &str = "यह उत्तर केवल सामान्य कानूनी जानकारी के लिए है और यह कानूनी सलाह नहीं है। \
अपनी विशिष्ट स्थिति के लिए कृपया एक योग्य अधिवक्ता से परामर्श करें।";

/// Picks a system preamble for the detected request language.
pub fn system_preamble_for(language: Language) -> &'static str {
    match language {
        Language::Hindi => SYSTEM_PREAMBLE_HI,
        _ if language.script() == nyayarag_core::Script::Devanagari => SYSTEM_PREAMBLE_HI,
        _ => SYSTEM_PREAMBLE_EN,
    }
}

pub fn disclaimer_for(language: Language) -> &'static str {
    match language {
        Language::Hindi => DISCLAIMER_HI,
        _ => DISCLAIMER_EN,
    }
}

/// Domain-gate rejection templates (spec.md §4.1 "reject" path), keyed by
/// whether the request is outside every declared domain entirely versus
/// outside the caller-requested domain specifically.
pub struct RejectionTemplates {
    pub out_of_scope_en: &'static str,
    pub out_of_scope_hi: &'static str,
    pub wrong_domain_en: &'static str,
    pub wrong_domain_hi: &'static str,
}

pub static REJECTION_TEMPLATES: Lazy<RejectionTemplates> = Lazy::new(|| RejectionTemplates {
    out_of_scope_en: "This question does not appear to relate to any of the legal domains this \
assistant covers (criminal, civil/family, corporate, IT/cyber, traffic, property, constitutional, \
or environmental law). Please rephrase your question or consult a qualified advocate.",
    out_of_scope_hi: "यह प्रश्न उन कानूनी क्षेत्रों से संबंधित प्रतीत नहीं होता जिन्हें यह सहायक कवर करता है। \
कृपया अपना प्रश्न फिर से लिखें या किसी योग्य अधिवक्ता से परामर्श करें।",
    wrong_domain_en: "This question appears to fall outside the legal domain you selected. Please \
choose the matching domain, or select \"all\" to let the assistant detect it automatically.",
    wrong_domain_hi: "यह प्रश्न आपके द्वारा चुने गए कानूनी क्षेत्र से बाहर प्रतीत होता है। कृपया सही क्षेत्र \
चुनें, या स्वचालित पहचान के लिए \"सभी\" चुनें।",
});

pub fn rejection_text(language: Language, wrong_domain: bool) -> &'static str {
    let hindi = matches!(language, Language::Hindi) || language.script() == nyayarag_core::Script::Devanagari;
    match (wrong_domain, hindi) {
        (true, true) => REJECTION_TEMPLATES.wrong_domain_hi,
        (true, false) => REJECTION_TEMPLATES.wrong_domain_en,
        (false, true) => REJECTION_TEMPLATES.out_of_scope_hi,
        (false, false) => REJECTION_TEMPLATES.out_of_scope_en,
    }
}

/// Matches a takeaway block header in generated text, e.g.
/// `📌 **Citation:**`, `📌 **Hawaala:**`, or `📌 **उद्धरण:**`
/// (spec.md §10.1 supplement, grounded on the original's takeaway parser).
pub static TAKEAWAY_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*📌\s*\*\*(?:Citation|Hawaala|उद्धरण)\s*:\*\*\s*(.*)$").expect("takeaway header regex")
});

/// Extracts the takeaway text following the first matching header, if any.
pub fn extract_takeaway(text: &str) -> Option<String> {
    TAKEAWAY_HEADER
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_hindi_preamble_for_hindi() {
        assert_eq!(system_preamble_for(Language::Hindi), SYSTEM_PREAMBLE_HI);
        assert_eq!(system_preamble_for(Language::English), SYSTEM_PREAMBLE_EN);
    }

    #[test]
    fn extracts_takeaway_from_marker() {
        let text = "Some answer text.\n📌 **Citation:** See Section 302 IPC for the punishment for murder.\nMore text.";
        let takeaway = extract_takeaway(text).expect("takeaway present");
        assert!(takeaway.contains("Section 302"));
    }

    #[test]
    fn extracts_takeaway_from_hindi_marker() {
        let text = "📌 **उद्धरण:** धारा 302 भादंसं देखें।";
        assert!(extract_takeaway(text).is_some());
    }

    #[test]
    fn no_takeaway_returns_none() {
        assert!(extract_takeaway("Plain answer with no marker.").is_none());
    }
}
