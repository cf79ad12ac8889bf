//! Script and language detection.
//!
//! The table of Unicode ranges and the 30%-of-Latin threshold rule are
//! taken from the query understanding stage of the system this crate
//! implements: tally characters per script, and if the largest non-Latin
//! script's count exceeds 30% of the Latin letter count, that script's
//! primary language wins; otherwise the query is treated as English.

use serde::{Deserialize, Serialize};

/// Supported languages: English, the 22 scheduled Indian languages, and a
/// handful of non-Indian languages whose scripts appear in the detection
/// table (queries in those scripts still need a `detected_language` label
/// even though the domain corpora are India-focused).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Bengali,
    Marathi,
    Gujarati,
    Punjabi,
    Odia,
    Assamese,
    Urdu,
    Kashmiri,
    Sindhi,
    Konkani,
    Dogri,
    Bodo,
    Maithili,
    Santali,
    Nepali,
    Manipuri,
    Sanskrit,
    Chinese,
    Japanese,
    Korean,
    Thai,
    Russian,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Tamil => "ta",
            Self::Telugu => "te",
            Self::Kannada => "kn",
            Self::Malayalam => "ml",
            Self::Bengali => "bn",
            Self::Marathi => "mr",
            Self::Gujarati => "gu",
            Self::Punjabi => "pa",
            Self::Odia => "or",
            Self::Assamese => "as",
            Self::Urdu => "ur",
            Self::Kashmiri => "ks",
            Self::Sindhi => "sd",
            Self::Konkani => "kok",
            Self::Dogri => "doi",
            Self::Bodo => "brx",
            Self::Maithili => "mai",
            Self::Santali => "sat",
            Self::Nepali => "ne",
            Self::Manipuri => "mni",
            Self::Sanskrit => "sa",
            Self::Chinese => "zh",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Thai => "th",
            Self::Russian => "ru",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
            Self::Kannada => "Kannada",
            Self::Malayalam => "Malayalam",
            Self::Bengali => "Bengali",
            Self::Marathi => "Marathi",
            Self::Gujarati => "Gujarati",
            Self::Punjabi => "Punjabi",
            Self::Odia => "Odia",
            Self::Assamese => "Assamese",
            Self::Urdu => "Urdu",
            Self::Kashmiri => "Kashmiri",
            Self::Sindhi => "Sindhi",
            Self::Konkani => "Konkani",
            Self::Dogri => "Dogri",
            Self::Bodo => "Bodo",
            Self::Maithili => "Maithili",
            Self::Santali => "Santali",
            Self::Nepali => "Nepali",
            Self::Manipuri => "Manipuri",
            Self::Sanskrit => "Sanskrit",
            Self::Chinese => "Chinese",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Thai => "Thai",
            Self::Russian => "Russian",
        }
    }

    pub fn script(&self) -> Script {
        match self {
            Self::Hindi | Self::Marathi | Self::Sanskrit | Self::Konkani | Self::Dogri
            | Self::Bodo | Self::Maithili | Self::Nepali => Script::Devanagari,
            Self::Tamil => Script::Tamil,
            Self::Telugu => Script::Telugu,
            Self::Kannada => Script::Kannada,
            Self::Malayalam => Script::Malayalam,
            Self::Bengali | Self::Assamese => Script::Bengali,
            Self::Gujarati => Script::Gujarati,
            Self::Punjabi => Script::Gurmukhi,
            Self::Odia => Script::Odia,
            Self::Urdu | Self::Kashmiri | Self::Sindhi => Script::Arabic,
            Self::Santali => Script::OlChiki,
            Self::Manipuri => Script::MeeteiMayek,
            Self::Chinese => Script::Han,
            Self::Japanese => Script::HiraganaKatakana,
            Self::Korean => Script::Hangul,
            Self::Thai => Script::Thai,
            Self::Russian => Script::Cyrillic,
            Self::English => Script::Latin,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self.script(), Script::Arabic)
    }

    pub fn sentence_terminators(&self) -> &'static [char] {
        match self.script() {
            Script::Devanagari | Script::Gurmukhi | Script::Kannada => &['.', '?', '!', '।', '॥'],
            Script::Bengali | Script::Tamil | Script::Telugu | Script::Malayalam
            | Script::Gujarati | Script::Odia => &['.', '?', '!', '।'],
            Script::Arabic => &['.', '?', '!', '؟', '۔'],
            Script::OlChiki => &['.', '?', '!', '᱾', '᱿'],
            Script::MeeteiMayek => &['.', '?', '!', '꯫'],
            Script::Han | Script::HiraganaKatakana => &['。', '!', '?', '.', '!', '?'],
            Script::Hangul => &['.', '?', '!'],
            Script::Thai => &['.', '?', '!'],
            Script::Cyrillic | Script::Latin => &['.', '?', '!'],
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "hi" | "hin" | "hindi" => Some(Self::Hindi),
            "ta" | "tam" | "tamil" => Some(Self::Tamil),
            "te" | "tel" | "telugu" => Some(Self::Telugu),
            "kn" | "kan" | "kannada" => Some(Self::Kannada),
            "ml" | "mal" | "malayalam" => Some(Self::Malayalam),
            "bn" | "ben" | "bengali" | "bangla" => Some(Self::Bengali),
            "mr" | "mar" | "marathi" => Some(Self::Marathi),
            "gu" | "guj" | "gujarati" => Some(Self::Gujarati),
            "pa" | "pan" | "punjabi" | "panjabi" => Some(Self::Punjabi),
            "or" | "ori" | "odia" | "oriya" => Some(Self::Odia),
            "as" | "asm" | "assamese" => Some(Self::Assamese),
            "ur" | "urd" | "urdu" => Some(Self::Urdu),
            "ks" | "kas" | "kashmiri" => Some(Self::Kashmiri),
            "sd" | "snd" | "sindhi" => Some(Self::Sindhi),
            "kok" | "konkani" => Some(Self::Konkani),
            "doi" | "dogri" => Some(Self::Dogri),
            "brx" | "bodo" => Some(Self::Bodo),
            "mai" | "maithili" => Some(Self::Maithili),
            "sat" | "santali" | "santhali" => Some(Self::Santali),
            "ne" | "nep" | "nepali" => Some(Self::Nepali),
            "mni" | "manipuri" | "meitei" => Some(Self::Manipuri),
            "sa" | "san" | "sanskrit" => Some(Self::Sanskrit),
            "zh" | "chi" | "chinese" => Some(Self::Chinese),
            "ja" | "jpn" | "japanese" => Some(Self::Japanese),
            "ko" | "kor" | "korean" => Some(Self::Korean),
            "th" | "tha" | "thai" => Some(Self::Thai),
            "ru" | "rus" | "russian" => Some(Self::Russian),
            _ => None,
        }
    }

    pub fn all() -> &'static [Language] {
        &[
            Self::English,
            Self::Hindi,
            Self::Tamil,
            Self::Telugu,
            Self::Kannada,
            Self::Malayalam,
            Self::Bengali,
            Self::Marathi,
            Self::Gujarati,
            Self::Punjabi,
            Self::Odia,
            Self::Assamese,
            Self::Urdu,
            Self::Kashmiri,
            Self::Sindhi,
            Self::Konkani,
            Self::Dogri,
            Self::Bodo,
            Self::Maithili,
            Self::Santali,
            Self::Nepali,
            Self::Manipuri,
            Self::Sanskrit,
            Self::Chinese,
            Self::Japanese,
            Self::Korean,
            Self::Thai,
            Self::Russian,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Script systems covered by the fixed detection table (spec.md §4.1 rule 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Devanagari,
    Tamil,
    Telugu,
    Bengali,
    Gujarati,
    Kannada,
    Malayalam,
    Gurmukhi,
    Odia,
    Arabic,
    Han,
    HiraganaKatakana,
    Hangul,
    Thai,
    Cyrillic,
    OlChiki,
    MeeteiMayek,
}

impl Script {
    /// Non-Latin scripts in the fixed detection table, in the order
    /// spec.md §4.1 rule 1 lists them.
    pub fn detection_table() -> &'static [Script] {
        &[
            Script::Devanagari,
            Script::Tamil,
            Script::Telugu,
            Script::Bengali,
            Script::Gujarati,
            Script::Kannada,
            Script::Malayalam,
            Script::Gurmukhi,
            Script::Odia,
            Script::Arabic,
            Script::Han,
            Script::HiraganaKatakana,
            Script::Hangul,
            Script::Thai,
            Script::Cyrillic,
        ]
    }

    /// Unicode ranges a character must fall in to count for this script.
    /// Scripts with multiple disjoint blocks (CJK, Hiragana/Katakana)
    /// return more than one range; `contains_char` checks all of them.
    pub fn unicode_ranges(&self) -> &'static [(u32, u32)] {
        match self {
            Self::Latin => &[(0x0041, 0x005A), (0x0061, 0x007A), (0x00C0, 0x00FF)],
            Self::Devanagari => &[(0x0900, 0x097F)],
            Self::Bengali => &[(0x0980, 0x09FF)],
            Self::Tamil => &[(0x0B80, 0x0BFF)],
            Self::Telugu => &[(0x0C00, 0x0C7F)],
            Self::Kannada => &[(0x0C80, 0x0CFF)],
            Self::Malayalam => &[(0x0D00, 0x0D7F)],
            Self::Gujarati => &[(0x0A80, 0x0AFF)],
            Self::Gurmukhi => &[(0x0A00, 0x0A7F)],
            Self::Odia => &[(0x0B00, 0x0B7F)],
            Self::Arabic => &[(0x0600, 0x06FF), (0x0750, 0x077F)],
            Self::Han => &[(0x4E00, 0x9FFF), (0x3400, 0x4DBF)],
            Self::HiraganaKatakana => &[(0x3040, 0x309F), (0x30A0, 0x30FF)],
            Self::Hangul => &[(0xAC00, 0xD7A3), (0x1100, 0x11FF)],
            Self::Thai => &[(0x0E00, 0x0E7F)],
            Self::Cyrillic => &[(0x0400, 0x04FF)],
            Self::OlChiki => &[(0x1C50, 0x1C7F)],
            Self::MeeteiMayek => &[(0xABC0, 0xABFF)],
        }
    }

    /// Kept for callers that want a single representative range (e.g.
    /// documentation/debugging); prefer `unicode_ranges` for detection.
    pub fn unicode_range(&self) -> (u32, u32) {
        self.unicode_ranges()[0]
    }

    pub fn contains_char(&self, c: char) -> bool {
        let code = c as u32;
        self.unicode_ranges()
            .iter()
            .any(|(start, end)| code >= *start && code <= *end)
    }

    /// The language this script maps to when it "wins" the detection rule.
    /// Scripts shared by several Indian languages default to the most
    /// common modern one (e.g. Devanagari → Hindi).
    pub fn primary_language(&self) -> Language {
        match self {
            Self::Latin => Language::English,
            Self::Devanagari => Language::Hindi,
            Self::Tamil => Language::Tamil,
            Self::Telugu => Language::Telugu,
            Self::Bengali => Language::Bengali,
            Self::Gujarati => Language::Gujarati,
            Self::Kannada => Language::Kannada,
            Self::Malayalam => Language::Malayalam,
            Self::Gurmukhi => Language::Punjabi,
            Self::Odia => Language::Odia,
            Self::Arabic => Language::Urdu,
            Self::Han => Language::Chinese,
            Self::HiraganaKatakana => Language::Japanese,
            Self::Hangul => Language::Korean,
            Self::Thai => Language::Thai,
            Self::Cyrillic => Language::Russian,
            Self::OlChiki => Language::Santali,
            Self::MeeteiMayek => Language::Manipuri,
        }
    }
}

/// Result of script/language detection: spec.md §4.1 rule 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionResult {
    pub script: Script,
    pub language: Language,
}

/// Detect the dominant script/language of `text` using the fixed
/// 30%-of-Latin-count threshold rule: tally Latin letters and each
/// non-Latin script in the detection table; if the largest non-Latin
/// count exceeds 30% of the Latin count, that script's primary language
/// wins, else English/Latin.
pub fn detect(text: &str) -> DetectionResult {
    let mut latin_count: u64 = 0;
    let mut non_latin_counts: std::collections::HashMap<Script, u64> =
        std::collections::HashMap::new();

    for c in text.chars() {
        if Script::Latin.contains_char(c) {
            latin_count += 1;
            continue;
        }
        for script in Script::detection_table() {
            if script.contains_char(c) {
                *non_latin_counts.entry(*script).or_insert(0) += 1;
                break;
            }
        }
    }

    let top_non_latin = non_latin_counts.into_iter().max_by_key(|(_, count)| *count);

    match top_non_latin {
        Some((script, count)) if (count as f64) > 0.3 * (latin_count as f64) => DetectionResult {
            script,
            language: script.primary_language(),
        },
        _ => DetectionResult {
            script: Script::Latin,
            language: Language::English,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(Language::Hindi.code(), "hi");
        assert_eq!(Language::Tamil.code(), "ta");
        assert_eq!(Language::English.code(), "en");
    }

    #[test]
    fn test_language_script() {
        assert_eq!(Language::Hindi.script(), Script::Devanagari);
        assert_eq!(Language::Urdu.script(), Script::Arabic);
        assert_eq!(Language::Japanese.script(), Script::HiraganaKatakana);
    }

    #[test]
    fn test_detect_pure_devanagari() {
        let result = detect("धारा 302 क्या है");
        assert_eq!(result.script, Script::Devanagari);
        assert_eq!(result.language, Language::Hindi);
    }

    #[test]
    fn test_detect_pure_english() {
        let result = detect("What is the punishment for murder?");
        assert_eq!(result.script, Script::Latin);
        assert_eq!(result.language, Language::English);
    }

    #[test]
    fn test_detect_below_threshold_stays_english() {
        // A single Devanagari character among a long English sentence
        // should not flip detection away from English.
        let result = detect("What is section 302 अ about in criminal law today");
        assert_eq!(result.language, Language::English);
    }

    #[test]
    fn test_detect_mixed_above_threshold() {
        // Majority Devanagari content with a few Latin digits/punctuation.
        let result = detect("आईपीसी 302 और बीएनएस 103 में क्या अंतर है");
        assert_eq!(result.language, Language::Hindi);
    }

    #[test]
    fn test_detect_tamil() {
        let result = detect("வணக்கம் இது ஒரு சோதனை");
        assert_eq!(result.script, Script::Tamil);
        assert_eq!(result.language, Language::Tamil);
    }

    #[test]
    fn test_from_str_loose() {
        assert_eq!(Language::from_str_loose("Hindi"), Some(Language::Hindi));
        assert_eq!(Language::from_str_loose("unknown"), None);
    }
}
