//! Object-safe dynamic dispatch wrappers for the provider traits.
//!
//! Follows the blanket-impl pattern:
//! 1. Define an object-safe `*Dyn` trait with boxed futures
//! 2. Blanket-impl it for all implementors of the RPITIT trait
//! 3. The `Box*` type wraps `Box<dyn *Dyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use mbtigen_types::llm::{
    CompletionRequest, CompletionResponse, ImageRequest, ImageResponse, LlmError,
};

use super::provider::{ImageProvider, LlmProvider};

/// Object-safe version of [`LlmProvider`] with boxed futures.
pub trait LlmProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn complete_boxed<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<CompletionResponse, LlmError>> + Send + 'a>>;
}

impl<T: LlmProvider> LlmProviderDyn for T {
    fn name(&self) -> &str {
        LlmProvider::name(self)
    }

    fn complete_boxed<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<CompletionResponse, LlmError>> + Send + 'a>> {
        Box::pin(self.complete(request))
    }
}

/// Type-erased chat provider for runtime provider selection.
///
/// Since `LlmProvider` uses RPITIT, it cannot be used as a trait object
/// directly. `BoxLlmProvider` provides equivalent methods that delegate to
/// the inner `LlmProviderDyn` trait object.
pub struct BoxLlmProvider {
    inner: Box<dyn LlmProviderDyn + Send + Sync>,
}

impl BoxLlmProvider {
    /// Wrap a concrete `LlmProvider` in a type-erased box.
    pub fn new<T: LlmProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Send a completion request and receive the full response.
    pub async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, LlmError> {
        self.inner.complete_boxed(request).await
    }
}

/// Object-safe version of [`ImageProvider`] with boxed futures.
pub trait ImageProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn generate_image_boxed<'a>(
        &'a self,
        request: &'a ImageRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ImageResponse, LlmError>> + Send + 'a>>;
}

impl<T: ImageProvider> ImageProviderDyn for T {
    fn name(&self) -> &str {
        ImageProvider::name(self)
    }

    fn generate_image_boxed<'a>(
        &'a self,
        request: &'a ImageRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ImageResponse, LlmError>> + Send + 'a>> {
        Box::pin(self.generate_image(request))
    }
}

/// Type-erased image provider.
pub struct BoxImageProvider {
    inner: Box<dyn ImageProviderDyn + Send + Sync>,
}

impl BoxImageProvider {
    pub fn new<T: ImageProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn generate_image(&self, request: &ImageRequest) -> Result<ImageResponse, LlmError> {
        self.inner.generate_image_boxed(request).await
    }
}
