//! Swappable review backend channel.
//!
//! The proxy service talks to the analysis backend through the
//! [`ReviewBackend`] trait so the real HTTP forwarder and the offline mock
//! fixture are selected by configuration, never by duplicating routes.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// The two analysis operations the backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Review,
    AutoFix,
}

impl Endpoint {
    /// Path segment under `/api` on both the proxy and the backend.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Review => "review",
            Endpoint::AutoFix => "auto-fix",
        }
    }

    /// Short name used in log lines and connectivity error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Review => "review",
            Endpoint::AutoFix => "auto-fix",
        }
    }
}

/// Raw backend reply: original status code plus the parsed JSON body.
///
/// Kept untyped so the proxy can relay it without transformation.
#[derive(Debug, Clone)]
pub struct BackendResponse {
    pub status: u16,
    pub body: Value,
}

impl BackendResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[async_trait]
pub trait ReviewBackend: Send + Sync {
    /// Forward a request payload verbatim and return the backend's reply.
    ///
    /// Non-2xx replies are not errors here: the body (empty object when the
    /// backend's error body is unparseable) and status are returned as-is so
    /// the caller can relay them. Only transport or success-body parse
    /// failures surface as [`BackendError`].
    async fn forward(&self, endpoint: Endpoint, payload: &Value)
    -> Result<BackendResponse, BackendError>;
}

/// Production backend: forwards over HTTP to `{base_url}/api/<endpoint>`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ReviewBackend for HttpBackend {
    async fn forward(
        &self,
        endpoint: Endpoint,
        payload: &Value,
    ) -> Result<BackendResponse, BackendError> {
        let url = format!("{}/api/{}", self.base_url, endpoint.path());
        debug!(endpoint = endpoint.name(), url = %url, "forwarding request");
        let response = self.http.post(&url).json(payload).send().await?;
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            let body = response.json::<Value>().await?;
            return Ok(BackendResponse { status, body });
        }

        // Relay backend errors with their original status; an unparseable
        // error body degrades to an empty object rather than a failure.
        let body = response
            .json::<Value>()
            .await
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Ok(BackendResponse { status, body })
    }
}
