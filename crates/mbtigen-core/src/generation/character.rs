use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use mbtigen_types::error::GenerationError;
use mbtigen_types::generation::{GeneratedCharacter, ImageOutcome};
use mbtigen_types::personality::PersonalityType;

use crate::llm::client::CompletionClient;
use crate::prompt::{CHARACTER_SYSTEM_PROMPT, PromptBuilder};

/// Produces a wizard-world character description and, optionally, its portrait.
///
/// The two external calls are strictly sequential: the image prompt embeds
/// the description. A failed description aborts; a failed image does not.
pub struct CharacterService {
    client: Arc<CompletionClient>,
}

impl CharacterService {
    pub fn new(client: Arc<CompletionClient>) -> Self {
        Self { client }
    }

    #[tracing::instrument(name = "generate_character", skip(self), fields(personality = %personality))]
    pub async fn generate(
        &self,
        personality: PersonalityType,
        with_image: bool,
    ) -> Result<GeneratedCharacter, GenerationError> {
        let description = self.describe(personality).await?;

        let image = if with_image {
            self.portrait(personality, &description).await
        } else {
            ImageOutcome::Skipped
        };

        Ok(GeneratedCharacter {
            personality,
            description,
            image,
            generated_at: Utc::now(),
        })
    }

    /// Description text, trimmed of surrounding whitespace.
    pub async fn describe(&self, personality: PersonalityType) -> Result<String, GenerationError> {
        let prompt = PromptBuilder::build_character_prompt(personality);
        let temperature = self.client.settings().character_temperature;

        let text = self
            .client
            .complete(CHARACTER_SYSTEM_PROMPT, &prompt, temperature)
            .await
            .inspect_err(|e| warn!(error = %e, "character description failed"))?;

        Ok(text.trim().to_string())
    }

    async fn portrait(&self, personality: PersonalityType, description: &str) -> ImageOutcome {
        let result = match PromptBuilder::build_image_prompt(personality, description) {
            Ok(prompt) => self.client.generate_image(&prompt).await,
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(url) => {
                info!("character portrait generated");
                ImageOutcome::Generated { url }
            }
            Err(e) => {
                warn!(error = %e, "character portrait failed");
                ImageOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
