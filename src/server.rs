//! HTTP surface: routes, handlers, CORS and request tracing.

use crate::error::GatewayError;
use crate::gateway::{self, TranslationRequest, TranslationResult};
use crate::i18n::LanguageDescriptor;
use crate::translator::TranslatorClient;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

const TRANSLATION_FAILED: &str = "Translation failed";
const LANGUAGES_FAILED: &str = "Failed to fetch languages";
const INVALID_BODY: &str = "Invalid request body";

/// Every route, as listed by `GET /`.
pub const ENDPOINTS: [&str; 6] = [
    "GET /",
    "GET /api/health",
    "GET /api/languages",
    "GET /api/source-languages",
    "GET /api/target-languages",
    "POST /api/translate",
];

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<TranslatorClient>,
}

impl AppState {
    pub fn new(translator: TranslatorClient) -> Self {
        Self {
            translator: Arc::new(translator),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Vec<&'static str>>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Uniform failure reply: 400 `{error}` or 500 `{error, details}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn validation(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse {
                error: message.to_string(),
                details: None,
            },
        }
    }

    /// Map a gateway failure, using `summary` as the fixed upstream message.
    pub fn from_gateway(err: GatewayError, summary: &str) -> Self {
        if let GatewayError::Validation(message) = err {
            warn!("Rejected request: {}", message);
            return Self::validation(message);
        }

        error!("{}: {}", summary, err);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorResponse {
                error: summary.to_string(),
                details: Some(err.details()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        .route("/api/languages", get(languages))
        .route("/api/source-languages", get(source_languages))
        .route("/api/target-languages", get(target_languages))
        .route("/api/translate", post(translate))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        message: "Translation proxy is running",
        endpoints: Some(ENDPOINTS.to_vec()),
    })
}

async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        message: "Server is healthy",
        endpoints: None,
    })
}

async fn languages(
    State(state): State<AppState>,
) -> Result<Json<Vec<LanguageDescriptor>>, ApiError> {
    gateway::list_languages(&state.translator)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_gateway(e, LANGUAGES_FAILED))
}

async fn source_languages(
    State(state): State<AppState>,
) -> Result<Json<Vec<LanguageDescriptor>>, ApiError> {
    gateway::list_source_languages(&state.translator)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_gateway(e, LANGUAGES_FAILED))
}

async fn target_languages(
    State(state): State<AppState>,
) -> Result<Json<Vec<LanguageDescriptor>>, ApiError> {
    gateway::list_target_languages(&state.translator)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_gateway(e, LANGUAGES_FAILED))
}

async fn translate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TranslationResult>, ApiError> {
    let request = parse_translate_body(&body)?;

    gateway::translate(&state.translator, &request)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_gateway(e, TRANSLATION_FAILED))
}

/// Read a translate body regardless of `Content-Type`.
///
/// An empty body is an empty request, so the text check still decides the
/// reply. Only bytes that are not JSON at all are rejected here.
fn parse_translate_body(body: &[u8]) -> Result<TranslationRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(TranslationRequest::default());
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        warn!("Rejected translate body: {}", e);
        ApiError::validation(INVALID_BODY)
    })?;

    Ok(TranslationRequest::from_json(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn test_validation_error_shape() {
        let response = ApiError::validation("Text is required").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Text is required"}));
    }

    #[tokio::test]
    async fn test_upstream_error_shape() {
        let err = GatewayError::Status {
            status: 403,
            body: json!({"error": {"code": 403001, "message": "Quota exceeded"}}),
        };
        let response = ApiError::from_gateway(err, TRANSLATION_FAILED).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({
                "error": "Translation failed",
                "details": {"error": {"code": 403001, "message": "Quota exceeded"}}
            })
        );
    }

    #[tokio::test]
    async fn test_gateway_validation_maps_to_bad_request() {
        let err = GatewayError::Validation("Target language is required");
        let response = ApiError::from_gateway(err, TRANSLATION_FAILED).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Target language is required"})
        );
    }

    #[test]
    fn test_parse_translate_body_empty_is_default() {
        let request = parse_translate_body(b"").expect("Should parse");
        assert!(request.text.is_none());

        let request = parse_translate_body(b"  \n").expect("Should parse");
        assert!(request.target_lang.is_none());
    }

    #[test]
    fn test_parse_translate_body_wrong_types_are_missing() {
        let request =
            parse_translate_body(br#"{"text":"","targetLang":5}"#).expect("Should parse");

        assert_eq!(request.text.as_deref(), Some(""));
        assert!(request.target_lang.is_none());
    }

    #[test]
    fn test_parse_translate_body_rejects_non_json() {
        let err = parse_translate_body(b"{not json").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error, INVALID_BODY);
    }

    #[test]
    fn test_endpoints_list_every_route() {
        assert_eq!(ENDPOINTS.len(), 6);
        assert!(ENDPOINTS.contains(&"POST /api/translate"));
        assert!(ENDPOINTS.contains(&"GET /api/source-languages"));
    }
}
