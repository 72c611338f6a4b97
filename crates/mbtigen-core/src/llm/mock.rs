//! Scripted provider used by unit tests across the crate.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use mbtigen_types::config::LlmSettings;
use mbtigen_types::llm::{
    CompletionRequest, CompletionResponse, ImageRequest, ImageResponse, LlmError, StopReason,
    Usage,
};

use super::box_provider::{BoxImageProvider, BoxLlmProvider};
use super::client::CompletionClient;
use super::provider::{ImageProvider, LlmProvider};

#[derive(Default)]
struct MockState {
    text_replies: VecDeque<Result<String, LlmError>>,
    image_replies: VecDeque<Result<Vec<String>, LlmError>>,
    text_requests: Vec<CompletionRequest>,
    image_requests: Vec<ImageRequest>,
}

/// Replays queued replies in order and records every request it sees.
///
/// Clones share state, so one clone can be boxed into a client while the
/// test keeps another to inspect requests.
#[derive(Clone, Default)]
pub(crate) struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply_text(self, text: &str) -> Self {
        self.lock().text_replies.push_back(Ok(text.to_string()));
        self
    }

    pub(crate) fn fail_text(self, err: LlmError) -> Self {
        self.lock().text_replies.push_back(Err(err));
        self
    }

    pub(crate) fn reply_image(self, url: &str) -> Self {
        self.lock().image_replies.push_back(Ok(vec![url.to_string()]));
        self
    }

    pub(crate) fn reply_no_images(self) -> Self {
        self.lock().image_replies.push_back(Ok(Vec::new()));
        self
    }

    pub(crate) fn fail_image(self, err: LlmError) -> Self {
        self.lock().image_replies.push_back(Err(err));
        self
    }

    pub(crate) fn text_requests(&self) -> Vec<CompletionRequest> {
        self.lock().text_requests.clone()
    }

    pub(crate) fn image_requests(&self) -> Vec<ImageRequest> {
        self.lock().image_requests.clone()
    }

    pub(crate) fn client(&self, settings: LlmSettings) -> CompletionClient {
        CompletionClient::new(
            BoxLlmProvider::new(self.clone()),
            BoxImageProvider::new(self.clone()),
            settings,
        )
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }
}

impl LlmProvider for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let reply = {
            let mut state = self.lock();
            state.text_requests.push(request.clone());
            state.text_replies.pop_front()
        };

        let content = reply.unwrap_or_else(|| {
            Err(LlmError::Provider {
                message: "no scripted text reply".to_string(),
            })
        })?;

        Ok(CompletionResponse {
            id: "resp-mock".to_string(),
            content,
            model: request.model.clone(),
            stop_reason: StopReason::EndTurn,
            usage: Usage::default(),
        })
    }
}

impl ImageProvider for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate_image(&self, request: &ImageRequest) -> Result<ImageResponse, LlmError> {
        let reply = {
            let mut state = self.lock();
            state.image_requests.push(request.clone());
            state.image_replies.pop_front()
        };

        let urls = reply.unwrap_or_else(|| {
            Err(LlmError::Provider {
                message: "no scripted image reply".to_string(),
            })
        })?;

        Ok(ImageResponse {
            urls,
            revised_prompt: None,
        })
    }
}
