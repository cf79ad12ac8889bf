//! The Generator (L0) trait.

use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

use crate::error::Result;
use crate::llm_types::{GenerateRequest, GenerateResponse, StreamChunk};

#[async_trait]
pub trait LanguageModel: Send + Sync + 'static {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;

    fn generate_stream<'a>(
        &'a self,
        request: GenerateRequest,
    ) -> Pin<Box<dyn Stream<Item = Result<StreamChunk>> + Send + 'a>>;

    /// Returns false if the backend is not reachable; callers must degrade
    /// to the template fallback rather than call `generate`.
    async fn is_available(&self) -> bool;

    fn model_name(&self) -> &str;

    fn context_size(&self) -> usize {
        4096
    }

    fn estimate_tokens(&self, text: &str) -> usize {
        text.chars().count() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockLlm;

    #[async_trait]
    impl LanguageModel for MockLlm {
        async fn generate(&self, _request: GenerateRequest) -> Result<GenerateResponse> {
            Ok(GenerateResponse::text("mock response"))
        }

        fn generate_stream<'a>(
            &'a self,
            _request: GenerateRequest,
        ) -> Pin<Box<dyn Stream<Item = Result<StreamChunk>> + Send + 'a>> {
            Box::pin(futures::stream::empty())
        }

        async fn is_available(&self) -> bool {
            true
        }

        fn model_name(&self) -> &str {
            "mock-llm"
        }
    }

    #[tokio::test]
    async fn test_mock_llm() {
        let llm = MockLlm;
        assert!(llm.is_available().await);
        let response = llm.generate(GenerateRequest::new("sys")).await.unwrap();
        assert_eq!(response.text, "mock response");
    }
}
