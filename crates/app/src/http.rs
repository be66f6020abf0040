//! HTTP surface of the explanation function.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router, middleware};
use serde_json::json;

use services::explain::{ExplainPayload, ExplainService, Explanation};
use services::ExplainError;

pub const ALLOW_HEADERS: &str = "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
pub const ALLOW_METHODS: &str = "OPTIONS,POST";

#[derive(Clone)]
pub struct AppState {
    pub explain: Arc<ExplainService>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/explain", post(explain).options(preflight))
        .layer(middleware::map_response(with_cors_headers))
        .with_state(state)
}

async fn explain(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Explanation>, ApiError> {
    let payload: ExplainPayload = serde_json::from_slice(&body).map_err(|err| {
        tracing::warn!("rejecting malformed explain body: {err}");
        ApiError::BadRequest("Invalid JSON body")
    })?;
    let request = payload.into_request()?;
    let explanation = state.explain.explain(&request).await?;
    Ok(Json(explanation))
}

async fn preflight() -> Json<serde_json::Value> {
    Json(json!({ "message": "CORS preflight successful" }))
}

async fn with_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    response
}

/// Failures mapped onto the endpoint's JSON error bodies.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(&'static str),
    Upstream(ExplainError),
}

impl From<ExplainError> for ApiError {
    fn from(err: ExplainError) -> Self {
        match err {
            ExplainError::MissingParameters(_) => Self::BadRequest("Missing required parameters"),
            ExplainError::InvalidAnswerIndex { .. } => {
                Self::BadRequest("Correct answer index is out of range")
            }
            other => Self::Upstream(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            Self::Upstream(err) => {
                tracing::error!("error generating explanation: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Error generating explanation",
                        "message": err.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}
