//! OpenAiImageProvider -- [`ImageProvider`] over `POST {base_url}/images/generations`.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is only exposed
//! when building the `Authorization` header.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use mbtigen_core::llm::provider::ImageProvider;
use mbtigen_types::llm::{ImageRequest, ImageResponse, LlmError};

use super::config::OpenAiCompatConfig;

/// Image generation provider for OpenAI-compatible APIs.
///
/// Intentionally does NOT derive Debug.
pub struct OpenAiImageProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    provider_name: String,
}

#[derive(Deserialize)]
struct ImagesApiResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
}

#[derive(Deserialize)]
struct ImageDatum {
    url: Option<String>,
    revised_prompt: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

impl OpenAiImageProvider {
    pub fn new(config: &OpenAiCompatConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Provider {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key: SecretString::from(config.api_key.clone()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            provider_name: config.provider_name.clone(),
        })
    }

    fn url(&self) -> String {
        format!("{}/images/generations", self.base_url)
    }
}

impl ImageProvider for OpenAiImageProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn generate_image(&self, request: &ImageRequest) -> Result<ImageResponse, LlmError> {
        let response = self
            .client
            .post(self.url())
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::Network(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after_ms = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_retry_after);
            let body = response.text().await.unwrap_or_default();
            return Err(map_status(status, &body, retry_after_ms));
        }

        let parsed: ImagesApiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let revised_prompt = parsed
            .data
            .iter()
            .find_map(|d| d.revised_prompt.clone());
        let urls = parsed.data.into_iter().filter_map(|d| d.url).collect();

        Ok(ImageResponse {
            urls,
            revised_prompt,
        })
    }
}

/// Parse a `Retry-After` value given in seconds into milliseconds.
///
/// The header is server-controlled, so the conversion saturates.
fn parse_retry_after(value: &str) -> Option<u64> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .map(|secs| secs.saturating_mul(1000))
}

/// Map a non-success HTTP status and its body to an [`LlmError`].
fn map_status(status: StatusCode, body: &str, retry_after_ms: Option<u64>) -> LlmError {
    let detail = serde_json::from_str::<ApiErrorBody>(body).ok().map(|b| b.error);
    let message = detail
        .as_ref()
        .map(|d| d.message.clone())
        .unwrap_or_else(|| body.to_string());

    match status.as_u16() {
        401 => LlmError::AuthenticationFailed,
        429 if detail.as_ref().and_then(|d| d.code.as_deref()) == Some("insufficient_quota") => {
            LlmError::RateLimited {
                retry_after_ms: None,
            }
        }
        429 => LlmError::RateLimited { retry_after_ms },
        400 => LlmError::InvalidRequest(message),
        500..=599 => LlmError::Overloaded(message),
        _ => LlmError::Provider {
            message: format!("HTTP {status}: {message}"),
        },
    }
}
