//! Provider trait definitions.
//!
//! These are the core abstractions the infrastructure layer implements.
//! Uses RPITIT (Rust 2024 edition) for the async methods.

use mbtigen_types::llm::{
    CompletionRequest, CompletionResponse, ImageRequest, ImageResponse, LlmError,
};

/// Trait for chat-completion backends.
///
/// Implementations live in mbtigen-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}

/// Trait for image-generation backends.
pub trait ImageProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Generate images for a prompt and return their locators.
    fn generate_image(
        &self,
        request: &ImageRequest,
    ) -> impl std::future::Future<Output = Result<ImageResponse, LlmError>> + Send;
}
