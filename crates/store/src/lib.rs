//! In-memory `StructuredStore` adapter (spec.md §6 key surface,
//! `StructuredStore adapter` in §2's implementation budget).
//!
//! Grounded on `original_source/backend/app/services/statute_service.py`
//! and `case_service.py`: exact `(section_number, act_code)` lookup,
//! `ilike`-style substring search on title/content (or case_name/summary),
//! optional `act_codes`/`domain`/`court` filters, and `is_landmark`
//! filtering sorted by `reporting_year` descending. The backing data is a
//! small, representative seed set (`seed` module) rather than a CSV/DB
//! load — `seed_database.py`'s CSV ingestion is out of scope per spec.md
//! §1 ("schema seeding from CSV").

pub mod seed;

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::instrument;

use nyayarag_core::{Case, Domain, Mapping, Result, Statute, StructuredStore};

/// An in-process `StructuredStore` backed by a fixed `Vec<Statute>`/
/// `Vec<Case>`/`Vec<Mapping>` plus a couple of lookup indices built once
/// at construction. A real deployment would swap this for a Postgres- or
/// SQLite-backed adapter behind the same trait; nothing above this crate
/// depends on the backing being in-memory.
pub struct InMemoryStructuredStore {
    statutes: Vec<Statute>,
    cases: Vec<Case>,
    mappings: Vec<Mapping>,
    section_index: HashMap<(String, String), usize>,
    mapping_index: HashMap<String, usize>,
}

impl InMemoryStructuredStore {
    pub fn new(statutes: Vec<Statute>, cases: Vec<Case>, mappings: Vec<Mapping>) -> Self {
        let section_index = statutes
            .iter()
            .enumerate()
            .map(|(i, s)| ((s.section_number.clone(), s.act_code.clone()), i))
            .collect();
        let mapping_index = mappings.iter().enumerate().map(|(i, m)| (m.ipc_section.clone(), i)).collect();

        Self {
            statutes,
            cases,
            mappings,
            section_index,
            mapping_index,
        }
    }

    /// The seed dataset shipped with this crate (`seed::STATUTES`,
    /// `seed::CASES`, `seed::MAPPINGS`).
    pub fn seeded() -> Self {
        Self::new(seed::STATUTES.clone(), seed::CASES.clone(), seed::MAPPINGS.clone())
    }

    fn text_matches(haystacks: &[&str], query: &str) -> bool {
        if query.trim().is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        haystacks.iter().any(|h| h.to_lowercase().contains(&query))
    }
}

#[async_trait]
impl StructuredStore for InMemoryStructuredStore {
    #[instrument(skip(self))]
    async fn get_section(&self, section_number: &str, act_code: &str) -> Result<Option<Statute>> {
        let key = (section_number.to_string(), act_code.to_string());
        Ok(self.section_index.get(&key).map(|&i| self.statutes[i].clone()))
    }

    #[instrument(skip(self))]
    async fn search_statutes(
        &self,
        query: &str,
        act_codes: Option<&[String]>,
        domain: Option<Domain>,
        limit: usize,
    ) -> Result<Vec<Statute>> {
        let results = self
            .statutes
            .iter()
            .filter(|s| act_codes.map(|codes| codes.iter().any(|c| c == &s.act_code)).unwrap_or(true))
            .filter(|s| domain.map(|d| d == s.domain).unwrap_or(true))
            .filter(|s| Self::text_matches(&[&s.title, &s.content], query))
            .take(limit)
            .cloned()
            .collect();
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn get_ipc_bns_mapping(&self, ipc_section: &str) -> Result<Option<Mapping>> {
        Ok(self.mapping_index.get(ipc_section).map(|&i| self.mappings[i].clone()))
    }

    #[instrument(skip(self))]
    async fn get_cases_by_section(&self, section_number: &str, limit: usize) -> Result<Vec<Case>> {
        let results = self
            .cases
            .iter()
            .filter(|c| c.cited_sections.iter().any(|s| s == section_number))
            .take(limit)
            .cloned()
            .collect();
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn search_cases(
        &self,
        query: &str,
        court: Option<&str>,
        domain: Option<Domain>,
        limit: usize,
    ) -> Result<Vec<Case>> {
        let results = self
            .cases
            .iter()
            .filter(|c| court.map(|court| court == c.court).unwrap_or(true))
            .filter(|c| domain.map(|d| d == c.domain).unwrap_or(true))
            .filter(|c| Self::text_matches(&[&c.case_name, &c.summary], query))
            .take(limit)
            .cloned()
            .collect();
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn get_landmark_cases(&self, domain: Option<Domain>, limit: usize) -> Result<Vec<Case>> {
        let mut results: Vec<Case> = self
            .cases
            .iter()
            .filter(|c| c.is_landmark)
            .filter(|c| domain.map(|d| d == c.domain).unwrap_or(true))
            .cloned()
            .collect();
        results.sort_by(|a, b| b.reporting_year.cmp(&a.reporting_year));
        results.truncate(limit);
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryStructuredStore {
        InMemoryStructuredStore::seeded()
    }

    #[tokio::test]
    async fn exact_section_lookup_hits_seed_data() {
        let store = store();
        let statute = store.get_section("302", "IPC").await.unwrap().unwrap();
        assert_eq!(statute.act_code, "IPC");
        assert_eq!(statute.section_number, "302");
    }

    #[tokio::test]
    async fn unknown_section_returns_none() {
        let store = store();
        assert!(store.get_section("9999", "IPC").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ipc_bns_mapping_round_trips_common_sections() {
        let store = store();
        let mapping = store.get_ipc_bns_mapping("302").await.unwrap().unwrap();
        assert_eq!(mapping.bns_section, "103");
    }

    #[tokio::test]
    async fn search_statutes_filters_by_act_code_and_domain() {
        let store = store();
        let results = store
            .search_statutes("murder", Some(&["IPC".to_string()]), Some(Domain::Criminal), 10)
            .await
            .unwrap();
        assert!(results.iter().all(|s| s.act_code == "IPC"));
        assert!(results.iter().any(|s| s.section_number == "302"));
    }

    #[tokio::test]
    async fn search_statutes_excludes_other_act_codes() {
        let store = store();
        let results = store
            .search_statutes("murder", Some(&["BNS".to_string()]), None, 10)
            .await
            .unwrap();
        assert!(results.iter().all(|s| s.act_code == "BNS"));
    }

    #[tokio::test]
    async fn cases_by_section_filters_cited_sections() {
        let store = store();
        let cases = store.get_cases_by_section("498A", 10).await.unwrap();
        assert!(!cases.is_empty());
        assert!(cases.iter().all(|c| c.cited_sections.contains(&"498A".to_string())));
    }

    #[tokio::test]
    async fn landmark_cases_sorted_by_year_descending() {
        let store = store();
        let cases = store.get_landmark_cases(Some(Domain::Criminal), 10).await.unwrap();
        assert!(cases.iter().all(|c| c.is_landmark));
        let years: Vec<u32> = cases.iter().filter_map(|c| c.reporting_year).collect();
        let mut sorted = years.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(years, sorted);
    }

    #[tokio::test]
    async fn landmark_cases_respect_limit() {
        let store = store();
        let cases = store.get_landmark_cases(None, 1).await.unwrap();
        assert_eq!(cases.len(), 1);
    }

    #[tokio::test]
    async fn search_cases_filters_by_court() {
        let store = store();
        let results = store.search_cases("", Some("supreme_court"), None, 10).await.unwrap();
        assert!(results.iter().all(|c| c.court == "supreme_court"));
    }
}
