//! CompletionClient -- the single adapter between services and providers.
//!
//! Constructed once at startup from the resolved credential and config,
//! then shared read-only. Every call is one request/response cycle with
//! no retry, caching, or streaming.

use tracing::{Instrument, debug, info_span};

use mbtigen_types::config::LlmSettings;
use mbtigen_types::error::GenerationError;
use mbtigen_types::llm::{CompletionRequest, ImageRequest, Message};

use super::box_provider::{BoxImageProvider, BoxLlmProvider};

pub struct CompletionClient {
    text: BoxLlmProvider,
    images: BoxImageProvider,
    settings: LlmSettings,
}

impl CompletionClient {
    pub fn new(text: BoxLlmProvider, images: BoxImageProvider, settings: LlmSettings) -> Self {
        Self {
            text,
            images,
            settings,
        }
    }

    pub fn settings(&self) -> &LlmSettings {
        &self.settings
    }

    pub fn provider_name(&self) -> &str {
        self.text.name()
    }

    /// Send one system instruction and one user prompt; return the generated text.
    ///
    /// The text is returned exactly as the provider produced it. A response
    /// with no visible text is [`GenerationError::EmptyResponse`].
    pub async fn complete(
        &self,
        system: &str,
        prompt: &str,
        temperature: f64,
    ) -> Result<String, GenerationError> {
        let request = CompletionRequest {
            model: self.settings.chat_model.clone(),
            messages: vec![Message::system(system), Message::user(prompt)],
            max_tokens: None,
            temperature: Some(temperature),
        };

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.text.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.temperature = temperature,
        );

        let response = self.text.complete(&request).instrument(span).await?;

        debug!(
            response_id = %response.id,
            stop_reason = %response.stop_reason,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "completion received"
        );

        if response.content.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(response.content)
    }

    /// Generate one image and return its URL.
    pub async fn generate_image(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = ImageRequest {
            model: self.settings.image_model.clone(),
            prompt: prompt.to_string(),
            size: self.settings.image_size,
            quality: self.settings.image_quality,
            n: 1,
        };

        let span = info_span!(
            "gen_ai.image",
            gen_ai.system = self.images.name(),
            gen_ai.request.model = %request.model,
            size = %request.size,
            quality = %request.quality,
        );

        let response = self.images.generate_image(&request).instrument(span).await?;

        if let Some(revised) = response.revised_prompt.as_deref() {
            debug!(revised_prompt = revised, "provider revised image prompt");
        }

        response
            .urls
            .into_iter()
            .find(|url| !url.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::mock::MockBackend;
    use mbtigen_types::llm::{ImageQuality, ImageSize, LlmError, MessageRole};

    #[tokio::test]
    async fn complete_sends_one_system_and_one_user_message() {
        let backend = MockBackend::new().reply_text("오늘도 좋은 하루!");
        let client = backend.client(LlmSettings::default());

        let text = client.complete("system text", "user prompt", 0.8).await.unwrap();
        assert_eq!(text, "오늘도 좋은 하루!");

        let requests = backend.text_requests();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.model, "gpt-3.5-turbo");
        assert_eq!(req.temperature, Some(0.8));
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, MessageRole::System);
        assert_eq!(req.messages[0].content, "system text");
        assert_eq!(req.messages[1].role, MessageRole::User);
        assert_eq!(req.messages[1].content, "user prompt");
    }

    #[tokio::test]
    async fn complete_passes_line_breaks_through_unmodified() {
        let raw = "1. 오늘의 조언: 쉬어가도 괜찮아요\n2. 오늘의 대사: \"내일은 또 다른 날이야\"\n3. 추천 행동: 산책하기\n";
        let backend = MockBackend::new().reply_text(raw);
        let client = backend.client(LlmSettings::default());

        let text = client.complete("s", "p", 0.8).await.unwrap();
        assert_eq!(text, raw);
    }

    #[tokio::test]
    async fn complete_maps_network_failure_to_generation_error() {
        let backend =
            MockBackend::new().fail_text(LlmError::Network("connection reset".to_string()));
        let client = backend.client(LlmSettings::default());

        let err = client.complete("s", "p", 0.8).await.unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Upstream(LlmError::Network(ref msg)) if msg == "connection reset"
        ));
    }

    #[tokio::test]
    async fn complete_rejects_blank_response() {
        let backend = MockBackend::new().reply_text("   \n");
        let client = backend.client(LlmSettings::default());

        let err = client.complete("s", "p", 0.8).await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));
    }

    #[tokio::test]
    async fn generate_image_uses_configured_model_size_quality() {
        let backend = MockBackend::new().reply_image("https://img.example/wizard.png");
        let settings = LlmSettings {
            image_model: "dall-e-3".to_string(),
            image_size: ImageSize::Portrait,
            image_quality: ImageQuality::Hd,
            ..LlmSettings::default()
        };
        let client = backend.client(settings);

        let url = client.generate_image("a wizard").await.unwrap();
        assert_eq!(url, "https://img.example/wizard.png");

        let requests = backend.image_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "dall-e-3");
        assert_eq!(requests[0].size, ImageSize::Portrait);
        assert_eq!(requests[0].quality, ImageQuality::Hd);
        assert_eq!(requests[0].n, 1);
        assert_eq!(requests[0].prompt, "a wizard");
    }

    #[tokio::test]
    async fn generate_image_without_url_is_empty_response() {
        let backend = MockBackend::new().reply_no_images();
        let client = backend.client(LlmSettings::default());

        let err = client.generate_image("a wizard").await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));
    }

    #[tokio::test]
    async fn generate_image_maps_rate_limit() {
        let backend = MockBackend::new().fail_image(LlmError::RateLimited {
            retry_after_ms: None,
        });
        let client = backend.client(LlmSettings::default());

        let err = client.generate_image("a wizard").await.unwrap_err();
        assert!(err.is_rate_limited());
    }
}
