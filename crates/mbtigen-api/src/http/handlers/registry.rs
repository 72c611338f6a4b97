//! Read-only registry endpoints: types and themes.

use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use mbtigen_core::registry::TypeRegistry;
use mbtigen_types::personality::{PersonalityType, TypeMetadata};
use mbtigen_types::theme::Theme;

use super::begin;
use crate::http::error::AppError;
use crate::http::response::ApiResponse;

/// Wire shape of one personality type.
#[derive(Debug, Serialize)]
pub struct TypeView {
    pub code: &'static str,
    pub emoji: &'static str,
    pub nickname: &'static str,
    pub accent_color: &'static str,
}

impl TypeView {
    pub fn new(personality: PersonalityType, meta: TypeMetadata) -> Self {
        Self {
            code: personality.code(),
            emoji: meta.emoji,
            nickname: meta.nickname,
            accent_color: meta.accent_color.hex(),
        }
    }
}

/// Wire shape of one theme.
#[derive(Debug, Serialize)]
pub struct ThemeView {
    pub label: &'static str,
    pub emoji: &'static str,
}

impl From<Theme> for ThemeView {
    fn from(theme: Theme) -> Self {
        Self {
            label: theme.label(),
            emoji: TypeRegistry::theme_emoji(theme),
        }
    }
}

/// GET /api/v1/types - All 16 types in display order.
pub async fn list_types() -> Json<ApiResponse<Vec<TypeView>>> {
    let (request_id, start) = begin();

    let types: Vec<TypeView> = TypeRegistry::all()
        .map(|(t, meta)| TypeView::new(t, meta))
        .collect();

    Json(
        ApiResponse::success(types, request_id, start.elapsed().as_millis() as u64)
            .with_link("self", "/api/v1/types"),
    )
}

/// GET /api/v1/types/{code} - One type by code (case-insensitive).
pub async fn get_type(Path(code): Path<String>) -> Result<Json<ApiResponse<TypeView>>, AppError> {
    let (request_id, start) = begin();

    let personality: PersonalityType = code.parse()?;
    let view = TypeView::new(personality, personality.metadata());

    let self_link = format!("/api/v1/types/{}", personality.code());
    Ok(Json(
        ApiResponse::success(view, request_id, start.elapsed().as_millis() as u64)
            .with_link("self", &self_link)
            .with_link("character", "/api/v1/characters"),
    ))
}

/// GET /api/v1/themes - The four message themes.
pub async fn list_themes() -> Json<ApiResponse<Vec<ThemeView>>> {
    let (request_id, start) = begin();

    let themes: Vec<ThemeView> = TypeRegistry::themes().map(ThemeView::from).collect();

    Json(
        ApiResponse::success(themes, request_id, start.elapsed().as_millis() as u64)
            .with_link("self", "/api/v1/themes"),
    )
}
