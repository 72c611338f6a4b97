//! Axum router configuration with middleware.
//!
//! All routes are under `/api/v1/` except `/health`.
//! Middleware: CORS, tracing.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Registry
        .route("/types", get(handlers::registry::list_types))
        .route("/types/{code}", get(handlers::registry::get_type))
        .route("/themes", get(handlers::registry::list_themes))
        // Generation
        .route("/messages", post(handlers::message::create_message))
        .route("/characters", post(handlers::character::create_character));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness plus the configured models.
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "chat_model": state.config.llm.chat_model,
        "image_model": state.config.llm.image_model,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use mbtigen_core::llm::box_provider::{BoxImageProvider, BoxLlmProvider};
    use mbtigen_core::llm::client::CompletionClient;
    use mbtigen_core::llm::provider::{ImageProvider, LlmProvider};
    use mbtigen_types::config::GlobalConfig;
    use mbtigen_types::llm::{
        CompletionRequest, CompletionResponse, ImageRequest, ImageResponse, LlmError,
        StopReason, Usage,
    };
    use mbtigen_types::secret::SecretSource;

    /// Fixed-output provider; `None` fields fail the corresponding call.
    #[derive(Clone)]
    struct Stub {
        text: Option<&'static str>,
        image: Option<&'static str>,
    }

    impl LlmProvider for Stub {
        fn name(&self) -> &str {
            "stub"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            let text = self
                .text
                .ok_or_else(|| LlmError::Network("connection refused".to_string()))?;
            Ok(CompletionResponse {
                id: "resp-1".to_string(),
                content: text.to_string(),
                model: request.model.clone(),
                stop_reason: StopReason::EndTurn,
                usage: Usage::default(),
            })
        }
    }

    impl ImageProvider for Stub {
        fn name(&self) -> &str {
            "stub"
        }

        async fn generate_image(&self, _request: &ImageRequest) -> Result<ImageResponse, LlmError> {
            let url = self.image.ok_or_else(|| LlmError::Provider {
                message: "image backend down".to_string(),
            })?;
            Ok(ImageResponse {
                urls: vec![url.to_string()],
                revised_prompt: None,
            })
        }
    }

    fn router(stub: Stub) -> Router {
        let config = GlobalConfig::default();
        let client = CompletionClient::new(
            BoxLlmProvider::new(stub.clone()),
            BoxImageProvider::new(stub),
            config.llm.clone(),
        );
        let state = AppState::from_client(
            client,
            config,
            SecretSource::Environment,
            PathBuf::from("/tmp/mbtigen-test"),
        );
        build_router(state)
    }

    fn healthy() -> Router {
        router(Stub {
            text: Some("1. 오늘의 조언\n2. 오늘의 대사\n3. 추천 행동"),
            image: Some("https://img.example/portrait.png"),
        })
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read(resp).await
    }

    async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        post_raw(app, uri, body.to_string()).await
    }

    async fn post_raw(app: Router, uri: &str, body: String) -> (StatusCode, serde_json::Value) {
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        read(resp).await
    }

    async fn read(resp: axum::response::Response) -> (StatusCode, serde_json::Value) {
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_models() {
        let (status, body) = get(healthy(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["chat_model"], "gpt-3.5-turbo");
    }

    #[tokio::test]
    async fn list_types_returns_all_sixteen() {
        let (status, body) = get(healthy(), "/api/v1/types").await;
        assert_eq!(status, StatusCode::OK);
        let types = body["data"].as_array().unwrap();
        assert_eq!(types.len(), 16);
        assert_eq!(types[0]["code"], "INTJ");
        assert_eq!(types[0]["nickname"], "건축가");
    }

    #[tokio::test]
    async fn get_type_is_case_insensitive() {
        let (status, body) = get(healthy(), "/api/v1/types/infp").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["code"], "INFP");
        assert_eq!(body["data"]["nickname"], "중재자");
    }

    #[tokio::test]
    async fn unknown_type_is_validation_error() {
        let (status, body) = get(healthy(), "/api/v1/types/ABCD").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn list_themes_returns_four() {
        let (status, body) = get(healthy(), "/api/v1/themes").await;
        assert_eq!(status, StatusCode::OK);
        let labels: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["label"].as_str().unwrap())
            .collect();
        assert_eq!(labels, vec!["감성", "유머", "연애", "철학"]);
    }

    #[tokio::test]
    async fn create_message_returns_content_and_title() {
        let (status, body) = post_json(
            healthy(),
            "/api/v1/messages",
            serde_json::json!({"type": "INFP", "theme": "철학"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["personality"], "INFP");
        assert_eq!(body["data"]["theme"], "철학");
        assert_eq!(
            body["data"]["content"],
            "1. 오늘의 조언\n2. 오늘의 대사\n3. 추천 행동"
        );
        assert!(body["data"]["title"].as_str().unwrap().contains("INFP"));
    }

    #[tokio::test]
    async fn create_message_rejects_unknown_theme() {
        let (status, body) = post_json(
            healthy(),
            "/api/v1/messages",
            serde_json::json!({"type": "INFP", "theme": "공포"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn create_message_malformed_body_uses_error_envelope() {
        let (status, body) =
            post_raw(healthy(), "/api/v1/messages", "{\"type\": ".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["code"], "VALIDATION_ERROR");
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn create_character_missing_type_is_validation_error() {
        let (status, body) = post_json(
            healthy(),
            "/api/v1/characters",
            serde_json::json!({"with_image": false}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["code"], "VALIDATION_ERROR");
        assert!(
            body["errors"][0]["message"]
                .as_str()
                .unwrap()
                .contains("type")
        );
    }

    #[tokio::test]
    async fn create_message_upstream_failure_is_bad_gateway() {
        let app = router(Stub {
            text: None,
            image: None,
        });
        let (status, body) = post_json(
            app,
            "/api/v1/messages",
            serde_json::json!({"type": "ENTP", "theme": "유머"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["errors"][0]["code"], "GENERATION_FAILED");
    }

    #[tokio::test]
    async fn create_character_with_image() {
        let (status, body) = post_json(
            healthy(),
            "/api/v1/characters",
            serde_json::json!({"type": "ISFP"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["personality"], "ISFP");
        assert_eq!(body["data"]["image"]["status"], "generated");
        assert_eq!(body["data"]["image"]["url"], "https://img.example/portrait.png");
    }

    #[tokio::test]
    async fn create_character_image_failure_keeps_description() {
        let app = router(Stub {
            text: Some("1. 캐릭터 이름: 루나"),
            image: None,
        });
        let (status, body) = post_json(
            app,
            "/api/v1/characters",
            serde_json::json!({"type": "INFJ", "with_image": true}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["description"], "1. 캐릭터 이름: 루나");
        assert_eq!(body["data"]["image"]["status"], "failed");
    }

    #[tokio::test]
    async fn create_character_without_image_is_skipped() {
        let (status, body) = post_json(
            healthy(),
            "/api/v1/characters",
            serde_json::json!({"type": "ESTJ", "with_image": false}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["image"]["status"], "skipped");
    }
}
