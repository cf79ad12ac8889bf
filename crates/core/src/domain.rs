//! The coarse legal-area tag used throughout the pipeline (spec.md GLOSSARY).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Criminal,
    CivilFamily,
    Corporate,
    ItCyber,
    Traffic,
    Property,
    Constitutional,
    Environment,
}

impl Domain {
    pub const ALL: [Domain; 8] = [
        Domain::Criminal,
        Domain::CivilFamily,
        Domain::Corporate,
        Domain::ItCyber,
        Domain::Traffic,
        Domain::Property,
        Domain::Constitutional,
        Domain::Environment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Criminal => "criminal",
            Domain::CivilFamily => "civil_family",
            Domain::Corporate => "corporate",
            Domain::ItCyber => "it_cyber",
            Domain::Traffic => "traffic",
            Domain::Property => "property",
            Domain::Constitutional => "constitutional",
            Domain::Environment => "environment",
        }
    }

    /// Parse a request-supplied domain string. The wildcard `"all"` (and
    /// unrecognized strings) parse to `None`, meaning "no domain gate".
    pub fn parse(s: &str) -> Option<Domain> {
        match s.trim().to_lowercase().as_str() {
            "criminal" => Some(Domain::Criminal),
            "civil_family" | "civil" | "family" => Some(Domain::CivilFamily),
            "corporate" => Some(Domain::Corporate),
            "it_cyber" | "cyber" | "it" => Some(Domain::ItCyber),
            "traffic" => Some(Domain::Traffic),
            "property" => Some(Domain::Property),
            "constitutional" => Some(Domain::Constitutional),
            "environment" => Some(Domain::Environment),
            _ => None,
        }
    }

    pub fn is_wildcard(s: &str) -> bool {
        s.trim().eq_ignore_ascii_case("all")
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for Domain {
    fn default() -> Self {
        Domain::Criminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrip() {
        for d in Domain::ALL {
            assert_eq!(Domain::parse(d.as_str()), Some(d));
        }
    }

    #[test]
    fn wildcard_parses_to_none() {
        assert!(Domain::parse("all").is_none());
        assert!(Domain::is_wildcard("All"));
    }
}
