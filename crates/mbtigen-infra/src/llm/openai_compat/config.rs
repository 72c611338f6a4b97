//! Connection settings for an OpenAI-compatible endpoint.

use std::time::Duration;

use mbtigen_types::config::LlmSettings;

/// Configuration shared by the chat and image halves of the provider.
///
/// Does not derive Debug: it carries the raw API key.
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Per-call timeout.
    pub timeout: Duration,
}

impl OpenAiCompatConfig {
    /// Build from the loaded settings and an already-resolved key.
    ///
    /// The provider is named "openai" for the public endpoint and
    /// "openai_compatible" for anything else.
    pub fn from_settings(settings: &LlmSettings, api_key: &str) -> Self {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        let provider_name = if base_url == OPENAI_BASE_URL {
            "openai"
        } else {
            "openai_compatible"
        };

        Self {
            provider_name: provider_name.to_string(),
            base_url,
            api_key: api_key.to_string(),
            timeout: Duration::from_secs(settings.request_timeout_secs),
        }
    }
}

/// Public OpenAI API base URL.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_target_openai() {
        let config = OpenAiCompatConfig::from_settings(&LlmSettings::default(), "sk-test");
        assert_eq!(config.provider_name, "openai");
        assert_eq!(config.base_url, OPENAI_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(120));
    }

    #[test]
    fn custom_base_url_is_compatible_provider() {
        let settings = LlmSettings {
            base_url: "http://localhost:8080/v1/".to_string(),
            request_timeout_secs: 30,
            ..LlmSettings::default()
        };
        let config = OpenAiCompatConfig::from_settings(&settings, "sk-test");
        assert_eq!(config.provider_name, "openai_compatible");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
