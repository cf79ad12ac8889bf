//! Typed, per-deployment settings — retrieval weights, generator
//! parameters, domain-gate thresholds, and observability knobs (SPEC_FULL.md
//! §0 "Configuration"). The fixed per-domain tables (`acts`, `corpus`,
//! `citations`, `prompts`) stay compiled-in `Lazy` statics rather than
//! fields here: they are reference data, not something an operator tunes
//! per environment.
//!
//! `Settings` is composed of per-concern sub-structs, each `Default`,
//! loaded with `config::Config` from a base file plus an optional
//! environment-specific overlay plus environment variables, in that
//! priority order.

use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// `HybridSearchEngine` defaults (spec.md §4.8).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetrievalSettings {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_lexical_weight")]
    pub lexical_weight: f32,
    #[serde(default = "default_rerank_threshold")]
    pub rerank_threshold: f32,
    #[serde(default = "default_candidate_multiplier")]
    pub candidate_multiplier: usize,
}

fn default_top_k() -> usize {
    5
}
fn default_lexical_weight() -> f32 {
    0.5
}
fn default_rerank_threshold() -> f32 {
    0.3
}
fn default_candidate_multiplier() -> usize {
    4
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            lexical_weight: default_lexical_weight(),
            rerank_threshold: default_rerank_threshold(),
            candidate_multiplier: default_candidate_multiplier(),
        }
    }
}

impl RetrievalSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.lexical_weight) {
            return Err(ConfigError::InvalidValue {
                field: "retrieval.lexical_weight".into(),
                message: "must be within 0.0..=1.0".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.rerank_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "retrieval.rerank_threshold".into(),
                message: "must be within 0.0..=1.0".into(),
            });
        }
        if self.top_k == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retrieval.top_k".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// Generator (L0) backend defaults (spec.md §4.6), independent of
/// `nyayarag-llm`'s runtime `LlmConfig` to avoid a dependency cycle — the
/// `agent` crate copies these fields across when it builds the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_model() -> String {
    "qwen2.5:7b-instruct-q4_K_M".to_string()
}
fn default_endpoint() -> String {
    "http://localhost:11434".to_string()
}
fn default_max_tokens() -> u32 {
    768
}
fn default_temperature() -> f32 {
    0.3
}
fn default_top_p() -> f32 {
    0.9
}
fn default_timeout_ms() -> u64 {
    30_000
}
fn default_max_retries() -> u32 {
    2
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
        }
    }
}

impl GeneratorSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingField("generator.endpoint".into()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "generator.temperature".into(),
                message: "must be within 0.0..=2.0".into(),
            });
        }
        Ok(())
    }
}

/// QueryAnalyzer domain-acceptance gate (spec.md §4.1 rule 3).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainGateSettings {
    #[serde(default = "default_relative_accept_ratio")]
    pub relative_accept_ratio: f32,
    #[serde(default = "default_relative_accept_floor")]
    pub relative_accept_floor: f32,
    #[serde(default = "default_absolute_accept_floor")]
    pub absolute_accept_floor: f32,
}

fn default_relative_accept_ratio() -> f32 {
    0.5
}
fn default_relative_accept_floor() -> f32 {
    0.1
}
fn default_absolute_accept_floor() -> f32 {
    0.2
}

impl Default for DomainGateSettings {
    fn default() -> Self {
        Self {
            relative_accept_ratio: default_relative_accept_ratio(),
            relative_accept_floor: default_relative_accept_floor(),
            absolute_accept_floor: default_absolute_accept_floor(),
        }
    }
}

/// `tracing`/`tracing-subscriber` defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservabilitySettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json_logs: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilitySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

/// Root settings object for the legal query orchestration core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub retrieval: RetrievalSettings,
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub domain_gate: DomainGateSettings,
    #[serde(default)]
    pub observability: ObservabilitySettings,
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.retrieval.validate()?;
        self.generator.validate()?;
        Ok(())
    }

    /// Load from a single YAML file, falling back to defaults for
    /// anything the file omits.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_file(path.as_ref(), "yaml")
    }

    /// Load from a single JSON file, falling back to defaults for
    /// anything the file omits.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_file(path.as_ref(), "json")
    }

    fn from_file(path: &Path, format_hint: &str) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let _ = format_hint;
        let config = Config::builder()
            .add_source(File::from(path).required(true))
            .build()?;
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings the way a deployed service would: an optional base
    /// file, overlaid by `NYAYARAG_`-prefixed environment variables
    /// (double underscore as the nesting separator, e.g.
    /// `NYAYARAG_GENERATOR__ENDPOINT`).
    pub fn load(base_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = base_file {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(Environment::with_prefix("NYAYARAG").separator("__").try_parsing(true));

        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_lexical_weight() {
        let mut settings = Settings::default();
        settings.retrieval.lexical_weight = 1.5;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn loads_yaml_overrides_and_keeps_other_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "retrieval:\n  top_k: 8\ngenerator:\n  model: \"llama3:8b\"").unwrap();

        let settings = Settings::from_yaml_file(file.path()).unwrap();
        assert_eq!(settings.retrieval.top_k, 8);
        assert_eq!(settings.generator.model, "llama3:8b");
        assert_eq!(settings.retrieval.lexical_weight, default_lexical_weight());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = Settings::from_yaml_file("/nonexistent/path/settings.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_falls_back_to_defaults_with_no_base_file() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
