//! Data-model record types shared by every stage (spec.md §3).

use serde::{Deserialize, Serialize};

use crate::domain::Domain;

/// `{kind, value}` — e.g. a `section` entity extracted from the query text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: String,
    pub value: String,
}

impl Entity {
    pub fn section(value: impl Into<String>) -> Self {
        Self {
            kind: "section".to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statute {
    pub id: String,
    pub act_code: String,
    pub act_name: String,
    pub section_number: String,
    pub title: String,
    pub content: String,
    pub domain: Domain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_enacted: Option<u32>,
    #[serde(default)]
    pub is_cognizable: bool,
    #[serde(default)]
    pub is_bailable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punishment_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub case_name: String,
    pub court: String,
    pub court_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_year: Option<u32>,
    pub summary: String,
    #[serde(default)]
    pub key_holdings: Vec<String>,
    #[serde(default)]
    pub is_landmark: bool,
    pub domain: Domain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default)]
    pub cited_sections: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingType {
    Exact,
    Modified,
    Merged,
    New,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    pub ipc_section: String,
    pub bns_section: String,
    pub mapping_type: MappingType,
    #[serde(default)]
    pub changes: Vec<String>,
    pub punishment_changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_punishment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_punishment: Option<String>,
    pub punishment_increased: bool,
}

/// A chunk-index entry, as produced by the (external) ingestion pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub chunk_id: String,
    pub content: String,
    pub embedding: Vec<f32>,
    pub metadata: ChunkMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChunkMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub section_numbers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub act_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitationType {
    Statute,
    CaseLaw,
    Mapping,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CitationType,
    pub title: String,
    pub source_key: String,
    pub source_name: String,
    pub url: String,
    pub excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub takeaway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_landmark: Option<bool>,
}

/// Fixed bundle attached by `RegulatoryFilter` (spec.md §4.4).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulatoryNotes {
    pub jurisdiction: Domain,
    pub applicable_acts: Vec<String>,
    pub key_authorities: Vec<String>,
    pub filing_requirements: Vec<String>,
    pub time_limits: Vec<String>,
}
