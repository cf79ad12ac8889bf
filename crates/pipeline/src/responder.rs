//! S7 Responder (spec.md §4.7), grounded on `response_agent.py`: the only
//! stage that always runs, even when S1 rejected the query or S2-S6
//! short-circuited. On the reject path it renders the bilingual rejection
//! templates; on the accept path it builds the constrained prompt via
//! `nyayarag_llm::PromptBuilder`, calls the Generator when reachable, and
//! falls back to the deterministic Markdown renderer otherwise. The
//! generated takeaway line is matched against citations by domain key so
//! the single most relevant citation carries it forward to callers.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use nyayarag_config::{extract_takeaway, rejection_text};
use nyayarag_core::{GenerateRequest, Language, LanguageModel, RequestContext, Stage, StageId};
use nyayarag_llm::{render_fallback, template::render_fallback_disclaimer_only, PromptBuilder};

pub struct Responder {
    generator: Option<Arc<dyn LanguageModel>>,
}

impl Responder {
    pub fn new(generator: Option<Arc<dyn LanguageModel>>) -> Self {
        Self { generator }
    }

    fn secondary_language(language: Language) -> Option<Language> {
        match language {
            Language::English => None,
            other => Some(other),
        }
    }

    fn render_rejection(&self, ctx: &mut RequestContext) {
        let wrong_domain = ctx.specified_domain.is_some();
        let reason = ctx
            .rejection_reason
            .clone()
            .unwrap_or_else(|| rejection_text(ctx.detected_language, wrong_domain).to_string());

        ctx.response_primary = Some(reason);
        if let Some(secondary_language) = Self::secondary_language(ctx.detected_language) {
            ctx.response_secondary = Some(rejection_text(secondary_language, wrong_domain).to_string());
        }
    }

    fn attach_takeaway(ctx: &mut RequestContext, generated: &str) {
        let Some(takeaway) = extract_takeaway(generated) else {
            return;
        };

        if let Some(citation) = ctx.citations.first_mut() {
            citation.takeaway = Some(takeaway);
        }
    }

    /// Translates `text` into `target` via the Generator, falling back to
    /// `text` itself unchanged if the generator is unreachable or errors
    /// (spec.md §4.7 "Translation uses the Generator or falls back to the
    /// same text", mirroring `response_agent.py:150-156`'s `_translate`).
    async fn translate(generator: &Arc<dyn LanguageModel>, text: &str, target: Language) -> String {
        let request = GenerateRequest::new(format!(
            "You translate legal answers faithfully into {}. Preserve all citations, \
section numbers, and formatting exactly. Output only the translation, nothing else.",
            target.name()
        ))
        .with_user_message(text)
        .with_temperature(0.2)
        .with_max_tokens(768);

        match generator.generate(request).await {
            Ok(response) => response.text,
            Err(err) => {
                warn!(error = %err, "translation call failed, falling back to untranslated text");
                text.to_string()
            }
        }
    }

    async fn render_generated(&self, ctx: &mut RequestContext) {
        let generator = match &self.generator {
            Some(generator) if generator.is_available().await => generator,
            _ => {
                ctx.response_primary = Some(render_fallback(ctx));
                if let Some(secondary_language) = Self::secondary_language(ctx.detected_language) {
                    ctx.response_secondary = Some(render_fallback_disclaimer_only(secondary_language));
                }
                return;
            }
        };

        let request = PromptBuilder::build(ctx);
        match generator.generate(request).await {
            Ok(response) => {
                Self::attach_takeaway(ctx, &response.text);
                ctx.response_primary = Some(response.text.clone());
                if let Some(secondary_language) = Self::secondary_language(ctx.detected_language) {
                    let translated = Self::translate(generator, &response.text, secondary_language).await;
                    ctx.response_secondary = Some(translated);
                }
            }
            Err(err) => {
                warn!(error = %err, "generator call failed, falling back to deterministic rendering");
                ctx.error_stage(StageId::Responder, format!("generate: {err}"));
                ctx.response_primary = Some(render_fallback(ctx));
                if let Some(secondary_language) = Self::secondary_language(ctx.detected_language) {
                    ctx.response_secondary = Some(render_fallback_disclaimer_only(secondary_language));
                }
            }
        }
    }
}

#[async_trait]
impl Stage for Responder {
    async fn run(&self, mut ctx: RequestContext) -> RequestContext {
        ctx.start_stage(StageId::Responder);

        if !ctx.is_relevant {
            self.render_rejection(&mut ctx);
            ctx.complete_stage(StageId::Responder, Some("rendered rejection".into()));
            return ctx;
        }

        self.render_generated(&mut ctx).await;

        let note = format!(
            "primary_chars={} citations={}",
            ctx.response_primary.as_deref().map(str::len).unwrap_or(0),
            ctx.citations.len()
        );
        ctx.complete_stage(StageId::Responder, Some(note));
        ctx
    }

    fn id(&self) -> StageId {
        StageId::Responder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use futures::Stream;
    use nyayarag_core::{GenerateResponse, Result as CoreResult, StreamChunk};

    /// Returns a distinct answer on the first call and echoes `[translated] `
    /// plus the request's content on every later call, so tests can tell a
    /// real translate-call apart from the primary generation.
    struct CountingGenerator {
        calls: AtomicUsize,
    }

    impl CountingGenerator {
        fn new() -> Self {
            Self { calls: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl LanguageModel for CountingGenerator {
        async fn generate(&self, request: nyayarag_core::GenerateRequest) -> CoreResult<GenerateResponse> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call == 0 {
                Ok(GenerateResponse::text(
                    "The punishment for murder under Section 302 is death or life imprisonment.",
                ))
            } else {
                let user_content = request.messages.last().map(|m| m.content.clone()).unwrap_or_default();
                Ok(GenerateResponse::text(format!("[translated] {user_content}")))
            }
        }

        fn generate_stream<'a>(
            &'a self,
            _request: nyayarag_core::GenerateRequest,
        ) -> std::pin::Pin<Box<dyn Stream<Item = CoreResult<StreamChunk>> + Send + 'a>> {
            Box::pin(futures::stream::empty())
        }

        async fn is_available(&self) -> bool {
            true
        }

        fn model_name(&self) -> &str {
            "counting-mock"
        }
    }

    #[tokio::test]
    async fn translates_secondary_response_via_generator() {
        let generator: Arc<dyn LanguageModel> = Arc::new(CountingGenerator::new());
        let stage = Responder::new(Some(generator));
        let mut ctx = RequestContext::new("What is the punishment under Section 302 IPC?", "s1", None, None);
        ctx.detected_domain = Some(nyayarag_core::Domain::Criminal);
        ctx.detected_language = Language::Hindi;

        let ctx = stage.run(ctx).await;
        let primary = ctx.response_primary.expect("primary response");
        let secondary = ctx.response_secondary.expect("secondary response");

        assert!(primary.contains("Section 302"));
        assert!(secondary.starts_with("[translated]"));
        assert!(secondary.contains(&primary));
    }

    #[tokio::test]
    async fn renders_rejection_even_when_other_stages_skipped() {
        let stage = Responder::new(None);
        let mut ctx = RequestContext::new("biryani recipe", "s1", None, None);
        ctx.reject("out of scope");

        let ctx = stage.run(ctx).await;
        assert!(ctx.response_primary.is_some());
        assert!(ctx.is_relevant == false);
    }

    #[tokio::test]
    async fn falls_back_to_deterministic_rendering_without_generator() {
        let stage = Responder::new(None);
        let mut ctx = RequestContext::new("q", "s1", None, None);
        ctx.detected_domain = Some(nyayarag_core::Domain::Criminal);

        let ctx = stage.run(ctx).await;
        assert!(ctx.response_primary.unwrap().contains("temporarily unavailable"));
    }
}
