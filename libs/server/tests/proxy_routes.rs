use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use revbot_api::{BackendError, BackendResponse, Endpoint, HttpBackend, ReviewBackend};
use revbot_server::{ProxyState, router};
use revbot_shared::models::review::MAX_CODE_CHARS;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Backend stand-in returning a fixed reply, so route relaying can be
/// asserted without a live backend.
struct StubBackend {
    status: u16,
    body: Value,
}

#[async_trait]
impl ReviewBackend for StubBackend {
    async fn forward(
        &self,
        _endpoint: Endpoint,
        _payload: &Value,
    ) -> Result<BackendResponse, BackendError> {
        Ok(BackendResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

fn app_with(backend: Arc<dyn ReviewBackend>) -> axum::Router {
    router(Arc::new(ProxyState { backend }))
}

fn json_request(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn review_relays_backend_success_body() {
    let issues = json!({"issues": [
        {"line": 2, "severity": "Warning", "explanation": "x", "suggested_fix": "y"}
    ]});
    let app = app_with(Arc::new(StubBackend {
        status: 200,
        body: issues.clone(),
    }));

    let response = app
        .oneshot(json_request(
            "/api/review",
            json!({"code": "print(1)", "language": "python"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, issues);
}

#[tokio::test]
async fn auto_fix_relays_backend_error_status_and_body() {
    let app = app_with(Arc::new(StubBackend {
        status: 422,
        body: json!({"detail": "bad input"}),
    }));

    let response = app
        .oneshot(json_request(
            "/api/auto-fix",
            json!({"code": "x", "language": "cpp"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await, json!({"detail": "bad input"}));
}

#[tokio::test]
async fn connectivity_failure_normalizes_to_500() {
    // Port 9 (discard) is reliably unreachable as an HTTP endpoint.
    let app = app_with(Arc::new(HttpBackend::new("http://127.0.0.1:9")));

    let response = app
        .oneshot(json_request(
            "/api/review",
            json!({"code": "x", "language": "java"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to connect to review service");
}

#[tokio::test]
async fn oversized_code_is_rejected_before_forwarding() {
    // A stub that would answer 200; the request must never reach it.
    let app = app_with(Arc::new(StubBackend {
        status: 200,
        body: json!({"issues": []}),
    }));

    let code = "x".repeat(MAX_CODE_CHARS + 1);
    let response = app
        .oneshot(json_request(
            "/api/review",
            json!({"code": code, "language": "python"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body = body_json(response).await;
    assert!(
        body["detail"]
            .as_str()
            .unwrap()
            .contains("maximum length")
    );
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app_with(Arc::new(StubBackend {
        status: 200,
        body: json!({}),
    }));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}
