//! Global configuration types for mbtigen.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! LLM endpoint, models, and sampling settings.

use serde::{Deserialize, Serialize};

use crate::llm::{ImageQuality, ImageSize};

/// Top-level configuration.
///
/// Loaded from `~/.mbtigen/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub llm: LlmSettings,
}

/// Endpoint, model, and sampling settings for both generation variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Base URL of the OpenAI-compatible API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the secret holding the API key.
    #[serde(default = "default_api_key_name")]
    pub api_key_name: String,

    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    #[serde(default = "default_image_model")]
    pub image_model: String,

    #[serde(default = "default_image_size")]
    pub image_size: ImageSize,

    #[serde(default = "default_image_quality")]
    pub image_quality: ImageQuality,

    /// Sampling temperature for daily messages.
    #[serde(default = "default_message_temperature")]
    pub message_temperature: f64,

    /// Sampling temperature for character descriptions.
    #[serde(default = "default_character_temperature")]
    pub character_temperature: f64,

    /// HTTP timeout for a single external call.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_api_key_name() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_chat_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_image_model() -> String {
    "dall-e-3".to_string()
}

fn default_image_size() -> ImageSize {
    ImageSize::Square
}

fn default_image_quality() -> ImageQuality {
    ImageQuality::Standard
}

fn default_message_temperature() -> f64 {
    0.8
}

fn default_character_temperature() -> f64 {
    0.9
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_name: default_api_key_name(),
            chat_model: default_chat_model(),
            image_model: default_image_model(),
            image_size: default_image_size(),
            image_quality: default_image_quality(),
            message_temperature: default_message_temperature(),
            character_temperature: default_character_temperature(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.llm.chat_model, "gpt-3.5-turbo");
        assert_eq!(config.llm.image_model, "dall-e-3");
        assert_eq!(config.llm.image_size, ImageSize::Square);
        assert_eq!(config.llm.image_quality, ImageQuality::Standard);
        assert_eq!(config.llm.api_key_name, "OPENAI_API_KEY");
        assert!((config.llm.message_temperature - 0.8).abs() < f64::EPSILON);
        assert!((config.llm.character_temperature - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_global_config_deserialize_empty() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.llm.base_url, "https://api.openai.com/v1");
        assert_eq!(config.llm.request_timeout_secs, 120);
    }

    #[test]
    fn test_global_config_deserialize_partial_llm_table() {
        let toml_str = r#"
[llm]
chat_model = "gpt-4o-mini"
image_size = "1024x1792"
image_quality = "hd"
message_temperature = 0.5
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.llm.chat_model, "gpt-4o-mini");
        assert_eq!(config.llm.image_size, ImageSize::Portrait);
        assert_eq!(config.llm.image_quality, ImageQuality::Hd);
        assert!((config.llm.message_temperature - 0.5).abs() < f64::EPSILON);
        // Untouched fields keep their defaults
        assert_eq!(config.llm.image_model, "dall-e-3");
        assert!((config.llm.character_temperature - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_global_config_rejects_unknown_size() {
        let toml_str = r#"
[llm]
image_size = "256x256"
"#;
        assert!(toml::from_str::<GlobalConfig>(toml_str).is_err());
    }
}
