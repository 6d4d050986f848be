//! Typed client for the proxy service, used by the TUI controller.

use revbot_shared::models::language::Language;
use revbot_shared::models::review::{
    ApiErrorBody, AutoFixRequest, AutoFixResponse, ReviewRequest, ReviewResponse,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a non-2xx status. `detail` carries the
    /// backend-supplied message when one was present.
    #[error("{detail}")]
    Status { code: u16, detail: String },
    #[error("failed to reach the review service: {0}")]
    Transport(#[from] reqwest::Error),
}

/// One request attempt per call; retrying is left to the user re-triggering
/// the action.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn review(
        &self,
        code: String,
        language: Language,
    ) -> Result<ReviewResponse, ApiError> {
        self.post(
            "review",
            &ReviewRequest { code, language },
            "Failed to review code",
        )
        .await
    }

    pub async fn auto_fix(
        &self,
        code: String,
        language: Language,
    ) -> Result<AutoFixResponse, ApiError> {
        self.post(
            "auto-fix",
            &AutoFixRequest { code, language },
            "Failed to auto-fix code",
        )
        .await
    }

    async fn post<Req, Resp>(
        &self,
        path: &str,
        request: &Req,
        generic_detail: &str,
    ) -> Result<Resp, ApiError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = format!("{}/api/{}", self.base_url, path);
        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let detail = response
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.detail)
                .unwrap_or_else(|_| generic_detail.to_string());
            return Err(ApiError::Status {
                code: status.as_u16(),
                detail,
            });
        }

        Ok(response.json::<Resp>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revbot_shared::models::review::Severity;

    #[tokio::test]
    async fn review_decodes_issue_list_in_order() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/review")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"issues":[
                    {"line":2,"severity":"Warning","explanation":"x","suggested_fix":"y"},
                    {"line":1,"severity":"Bug","explanation":"a","suggested_fix":""}
                ]}"#,
            )
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let response = client
            .review("print('hi')".to_string(), Language::Python)
            .await
            .unwrap();

        // Server order is preserved, never re-sorted client-side.
        assert_eq!(response.issues.len(), 2);
        assert_eq!(response.issues[0].line, Some(2));
        assert_eq!(response.issues[0].severity, Severity::Warning);
        assert_eq!(response.issues[1].severity, Severity::Bug);
    }

    #[tokio::test]
    async fn review_surfaces_backend_detail_on_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/review")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail":"bad input"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let error = client
            .review("x".to_string(), Language::Java)
            .await
            .unwrap_err();

        match error {
            ApiError::Status { code, detail } => {
                assert_eq!(code, 400);
                assert_eq!(detail, "bad input");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn auto_fix_falls_back_to_generic_detail() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/auto-fix")
            .with_status(502)
            .with_body("bad gateway")
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let error = client
            .auto_fix("x".to_string(), Language::Cpp)
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "Failed to auto-fix code");
    }

    #[tokio::test]
    async fn auto_fix_decodes_fixed_code_and_summary() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/auto-fix")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"fixed_code":"A","summary":"B","changes":[]}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let response = client
            .auto_fix("old".to_string(), Language::Javascript)
            .await
            .unwrap();

        assert_eq!(response.fixed_code, "A");
        assert_eq!(response.summary, "B");
        assert!(response.changes.is_empty());
    }
}
