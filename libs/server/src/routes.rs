//! Proxy routes.
//!
//! `/api/review` and `/api/auto-fix` are structurally identical pass-through
//! handlers: the JSON payload is forwarded verbatim to the backend and the
//! backend's reply (or a normalized connectivity error) is relayed to the
//! caller. No transformation happens beyond status and content-type
//! normalization, and no retries are performed.

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use revbot_api::{Endpoint, ReviewBackend};
use revbot_shared::models::review::{ApiErrorBody, SubmissionError, validate_submission};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

pub const APP_NAME: &str = "revbot review proxy";

pub struct ProxyState {
    pub backend: Arc<dyn ReviewBackend>,
}

#[derive(Debug, Serialize)]
struct ConnectivityError {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_name: &'static str,
}

pub fn router(state: Arc<ProxyState>) -> Router {
    Router::new()
        .route(
            "/api/review",
            post({
                let state = state.clone();
                move |Json(payload): Json<Value>| {
                    let state = state.clone();
                    async move { proxy_handler(state, Endpoint::Review, payload).await }
                }
            }),
        )
        .route(
            "/api/auto-fix",
            post({
                let state = state.clone();
                move |Json(payload): Json<Value>| {
                    let state = state.clone();
                    async move { proxy_handler(state, Endpoint::AutoFix, payload).await }
                }
            }),
        )
        .route("/health", get(health_handler))
}

async fn proxy_handler(
    state: Arc<ProxyState>,
    endpoint: Endpoint,
    payload: Value,
) -> axum::response::Response {
    // Enforce the shared size cap locally; everything else is the backend's
    // call. Empty submissions are already suppressed client-side, so the
    // backend keeps authority over that rule for other callers.
    if let Some(code) = payload.get("code").and_then(Value::as_str)
        && validate_submission(code) == Err(SubmissionError::TooLong)
    {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(ApiErrorBody {
                detail: SubmissionError::TooLong.to_string(),
            }),
        )
            .into_response();
    }

    match state.backend.forward(endpoint, &payload).await {
        Ok(reply) => {
            let status =
                StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(reply.body)).into_response()
        }
        Err(err) => {
            error!(endpoint = endpoint.name(), error = %err, "backend request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ConnectivityError {
                    error: format!("Failed to connect to {} service", endpoint.name()),
                }),
            )
                .into_response()
        }
    }
}

async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            app_name: APP_NAME,
        }),
    )
}
