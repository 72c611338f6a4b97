use std::sync::Arc;

use chrono::Utc;

use mbtigen_types::error::GenerationError;
use mbtigen_types::generation::GeneratedMessage;
use mbtigen_types::personality::PersonalityType;
use mbtigen_types::theme::Theme;

use crate::llm::client::CompletionClient;
use crate::prompt::{MESSAGE_SYSTEM_PROMPT, PromptBuilder};

/// Produces the daily message for a personality type and theme.
pub struct MessageService {
    client: Arc<CompletionClient>,
}

impl MessageService {
    pub fn new(client: Arc<CompletionClient>) -> Self {
        Self { client }
    }

    #[tracing::instrument(name = "generate_message", skip(self), fields(personality = %personality, theme = %theme))]
    pub async fn generate(
        &self,
        personality: PersonalityType,
        theme: Theme,
    ) -> Result<GeneratedMessage, GenerationError> {
        let prompt = PromptBuilder::build_message_prompt(personality, theme);
        let temperature = self.client.settings().message_temperature;

        let content = self
            .client
            .complete(MESSAGE_SYSTEM_PROMPT, &prompt, temperature)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "message generation failed"))?;

        Ok(GeneratedMessage {
            personality,
            theme,
            content,
            generated_at: Utc::now(),
        })
    }
}
