//! Structured store key surface (spec.md §6).

use async_trait::async_trait;

use crate::domain::Domain;
use crate::error::Result;
use crate::records::{Case, Mapping, Statute};

#[async_trait]
pub trait StructuredStore: Send + Sync + 'static {
    async fn get_section(&self, section_number: &str, act_code: &str) -> Result<Option<Statute>>;

    async fn search_statutes(
        &self,
        query: &str,
        act_codes: Option<&[String]>,
        domain: Option<Domain>,
        limit: usize,
    ) -> Result<Vec<Statute>>;

    async fn get_ipc_bns_mapping(&self, ipc_section: &str) -> Result<Option<Mapping>>;

    async fn get_cases_by_section(&self, section_number: &str, limit: usize) -> Result<Vec<Case>>;

    async fn search_cases(
        &self,
        query: &str,
        court: Option<&str>,
        domain: Option<Domain>,
        limit: usize,
    ) -> Result<Vec<Case>>;

    async fn get_landmark_cases(&self, domain: Option<Domain>, limit: usize) -> Result<Vec<Case>>;
}
