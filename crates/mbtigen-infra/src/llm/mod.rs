//! LLM provider implementations.
//!
//! Contains the concrete OpenAI-compatible providers plus the factory
//! ([`create_client`]) that wires them into a [`CompletionClient`].

pub mod openai_compat;

use mbtigen_core::llm::box_provider::{BoxImageProvider, BoxLlmProvider};
use mbtigen_core::llm::client::CompletionClient;
use mbtigen_types::config::LlmSettings;
use mbtigen_types::llm::LlmError;
use mbtigen_types::secret::ResolvedSecret;

use self::openai_compat::config::OpenAiCompatConfig;
use self::openai_compat::{OpenAiCompatibleProvider, OpenAiImageProvider};

/// Create the process-wide [`CompletionClient`] from settings and a resolved key.
pub fn create_client(
    settings: &LlmSettings,
    api_key: &ResolvedSecret,
) -> Result<CompletionClient, LlmError> {
    let config = OpenAiCompatConfig::from_settings(settings, api_key.value.expose());

    let text = OpenAiCompatibleProvider::new(&config);
    let images = OpenAiImageProvider::new(&config)?;

    tracing::info!(
        provider = %config.provider_name,
        base_url = %config.base_url,
        chat_model = %settings.chat_model,
        image_model = %settings.image_model,
        key_source = %api_key.source,
        "completion client ready"
    );

    Ok(CompletionClient::new(
        BoxLlmProvider::new(text),
        BoxImageProvider::new(images),
        settings.clone(),
    ))
}
