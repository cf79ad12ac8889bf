//! The Ollama generator backend.

use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use futures::Stream;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use nyayarag_core::{
    FinishReason, GenerateRequest, GenerateResponse, LanguageModel, Message, Result, Role,
    StreamChunk, TokenUsage,
};

use crate::LlmError;

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub model: String,
    pub endpoint: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub timeout: Duration,
    pub max_retries: u32,
    pub initial_backoff: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "qwen2.5:7b-instruct-q4_K_M".to_string(),
            endpoint: "http://localhost:11434".to_string(),
            max_tokens: 768,
            temperature: 0.3,
            top_p: 0.9,
            timeout: Duration::from_secs(30),
            max_retries: 2,
            initial_backoff: Duration::from_millis(200),
        }
    }
}

#[derive(Clone)]
pub struct OllamaBackend {
    client: Client,
    config: LlmConfig,
}

impl OllamaBackend {
    pub fn new(config: LlmConfig) -> std::result::Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.config.endpoint, path)
    }

    fn chat_request(&self, request: &GenerateRequest) -> OllamaChatRequest {
        OllamaChatRequest {
            model: request.model.clone().unwrap_or_else(|| self.config.model.clone()),
            messages: request.messages.iter().map(OllamaMessage::from).collect(),
            stream: request.stream,
            options: Some(OllamaOptions {
                temperature: request.temperature.or(Some(self.config.temperature)),
                top_p: request.top_p.or(Some(self.config.top_p)),
                num_predict: request.max_tokens.or(Some(self.config.max_tokens)).map(|n| n as i32),
            }),
        }
    }

    async fn execute_request(&self, request: &OllamaChatRequest) -> std::result::Result<OllamaChatResponse, LlmError> {
        let response = self.client.post(self.api_url("/chat")).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            if status.is_server_error() {
                return Err(LlmError::Network(format!("server error {status}: {body}")));
            }
            return Err(LlmError::Api(body));
        }

        response.json().await.map_err(|e| LlmError::InvalidResponse(e.to_string()))
    }

    fn is_retryable(error: &LlmError) -> bool {
        matches!(error, LlmError::Network(_) | LlmError::Timeout(_))
    }
}

#[async_trait]
impl LanguageModel for OllamaBackend {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let chat_request = self.chat_request(&request);

        let mut last_error = None;
        let mut backoff = self.config.initial_backoff;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::warn!(attempt, max_retries = self.config.max_retries, ?backoff, "retrying generator request");
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }

            match self.execute_request(&chat_request).await {
                Ok(result) => {
                    return Ok(GenerateResponse {
                        text: result.message.content,
                        finish_reason: if result.done { FinishReason::Stop } else { FinishReason::Length },
                        usage: Some(TokenUsage::new(
                            result.prompt_eval_count.unwrap_or(0) as u32,
                            result.eval_count.unwrap_or(0) as u32,
                        )),
                    });
                }
                Err(e) if Self::is_retryable(&e) => last_error = Some(e),
                Err(e) => return Err(LlmError::from(e).into()),
            }
        }

        Err(last_error.unwrap_or(LlmError::Network("max retries exceeded".to_string())).into())
    }

    fn generate_stream<'a>(
        &'a self,
        request: GenerateRequest,
    ) -> Pin<Box<dyn Stream<Item = Result<StreamChunk>> + Send + 'a>> {
        let mut chat_request = self.chat_request(&request);
        chat_request.stream = true;
        let url = self.api_url("/chat");
        let client = self.client.clone();

        Box::pin(async_stream::stream! {
            let response = match client.post(&url).json(&chat_request).send().await {
                Ok(r) => r,
                Err(e) => {
                    yield Err(LlmError::from(e).into());
                    return;
                }
            };

            if !response.status().is_success() {
                let body = response.text().await.unwrap_or_default();
                yield Err(LlmError::Api(body).into());
                return;
            }

            use futures::StreamExt;
            let mut stream = response.bytes_stream();

            while let Some(chunk) = stream.next().await {
                let chunk = match chunk {
                    Ok(c) => c,
                    Err(e) => {
                        yield Err(LlmError::from(e).into());
                        return;
                    }
                };
                let text = String::from_utf8_lossy(&chunk);

                for line in text.lines() {
                    if line.is_empty() {
                        continue;
                    }
                    let Ok(parsed) = serde_json::from_str::<OllamaStreamChunk>(line) else {
                        continue;
                    };

                    if !parsed.message.content.is_empty() {
                        yield Ok(StreamChunk::text(parsed.message.content));
                    }

                    if parsed.done {
                        yield Ok(StreamChunk::final_chunk(FinishReason::Stop));
                        return;
                    }
                }
            }
        })
    }

    async fn is_available(&self) -> bool {
        self.client
            .get(format!("{}/api/tags", self.config.endpoint))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }

    fn context_size(&self) -> usize {
        8192
    }
}

#[derive(Debug, Serialize)]
struct OllamaChatRequest {
    model: String,
    messages: Vec<OllamaMessage>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaOptions>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OllamaMessage {
    role: String,
    content: String,
}

impl From<&Message> for OllamaMessage {
    fn from(msg: &Message) -> Self {
        let role = match msg.role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        Self {
            role: role.to_string(),
            content: msg.content.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaMessage,
    done: bool,
    #[serde(default)]
    eval_count: Option<u64>,
    #[serde(default)]
    prompt_eval_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct OllamaStreamChunk {
    message: OllamaMessage,
    done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_has_sane_sampling_params() {
        let config = LlmConfig::default();
        assert_eq!(config.temperature, 0.3);
        assert!(config.max_retries >= 1);
    }

    #[test]
    fn message_conversion_maps_roles() {
        let msg = Message::user("hello");
        let ollama: OllamaMessage = (&msg).into();
        assert_eq!(ollama.role, "user");
        assert_eq!(ollama.content, "hello");
    }

    #[tokio::test]
    async fn model_name_reflects_config() {
        let backend = OllamaBackend::new(LlmConfig::default()).unwrap();
        assert_eq!(backend.model_name(), "qwen2.5:7b-instruct-q4_K_M");
    }
}
