//! Character endpoint: description plus optional portrait.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use mbtigen_types::generation::GeneratedCharacter;
use mbtigen_types::personality::PersonalityType;

use super::begin;
use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for generating a character.
#[derive(Debug, Deserialize)]
pub struct CharacterRequest {
    #[serde(rename = "type")]
    pub personality: String,
    #[serde(default = "default_with_image")]
    pub with_image: bool,
}

fn default_with_image() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct CharacterView {
    pub emoji: &'static str,
    pub nickname: &'static str,
    #[serde(flatten)]
    pub character: GeneratedCharacter,
}

/// POST /api/v1/characters - Generate a character.
///
/// An image failure still returns 200; `image.status` is `"failed"`.
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<CharacterRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CharacterView>>, AppError> {
    let (request_id, start) = begin();
    let Json(body) = payload?;

    let personality: PersonalityType = body.personality.parse()?;
    let meta = personality.metadata();

    let character = state
        .character_service
        .generate(personality, body.with_image)
        .await?;

    let view = CharacterView {
        emoji: meta.emoji,
        nickname: meta.nickname,
        character,
    };

    Ok(Json(
        ApiResponse::success(view, request_id, start.elapsed().as_millis() as u64)
            .with_link("self", "/api/v1/characters"),
    ))
}
