//! Daily message endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use mbtigen_core::registry::TypeRegistry;
use mbtigen_types::generation::GeneratedMessage;
use mbtigen_types::personality::PersonalityType;
use mbtigen_types::theme::Theme;

use super::begin;
use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for generating a message.
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    /// Four-letter code, case-insensitive.
    #[serde(rename = "type")]
    pub personality: String,
    /// Korean label or English name.
    pub theme: String,
}

#[derive(Debug, Serialize)]
pub struct MessageView {
    pub title: String,
    #[serde(flatten)]
    pub message: GeneratedMessage,
}

/// POST /api/v1/messages - Generate one daily message.
pub async fn create_message(
    State(state): State<AppState>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<MessageView>>, AppError> {
    let (request_id, start) = begin();
    let Json(body) = payload?;

    let personality: PersonalityType = body.personality.parse()?;
    let theme: Theme = body.theme.parse()?;

    let message = state.message_service.generate(personality, theme).await?;

    let view = MessageView {
        title: TypeRegistry::message_title(personality, theme),
        message,
    };

    Ok(Json(
        ApiResponse::success(view, request_id, start.elapsed().as_millis() as u64)
            .with_link("self", "/api/v1/messages"),
    ))
}
