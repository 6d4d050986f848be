//! Offline fixture backend.
//!
//! Returns canned review and auto-fix results after an artificial delay so
//! the TUI can be exercised without a running analysis backend. Test and
//! demo stand-in only; the HTTP forwarder is the production contract.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::backend::{BackendError, BackendResponse, Endpoint, ReviewBackend};

#[derive(Debug, Clone)]
pub struct MockBackend {
    delay: Duration,
}

impl Default for MockBackend {
    fn default() -> Self {
        // Roughly what a small model takes, so spinners are visible.
        Self::with_delay(Duration::from_millis(1200))
    }
}

impl MockBackend {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    fn canned_review() -> Value {
        json!({
            "issues": [
                {
                    "line": 2,
                    "severity": "Improvement",
                    "explanation": "Accumulating with `total = total + x` can be written with `+=`.",
                    "suggested_fix": "total += item['price']"
                },
                {
                    "line": 4,
                    "severity": "Warning",
                    "explanation": "Indexing into `item` without checking the key may raise at runtime.",
                    "suggested_fix": "total += item.get('price', 0)"
                }
            ]
        })
    }

    fn canned_auto_fix(payload: &Value) -> Value {
        let code = payload
            .get("code")
            .and_then(Value::as_str)
            .unwrap_or_default();
        json!({
            "fixed_code": code,
            "summary": "No fixable issues detected by the offline fixture.",
            "changes": []
        })
    }
}

#[async_trait]
impl ReviewBackend for MockBackend {
    async fn forward(
        &self,
        endpoint: Endpoint,
        payload: &Value,
    ) -> Result<BackendResponse, BackendError> {
        tokio::time::sleep(self.delay).await;
        let body = match endpoint {
            Endpoint::Review => Self::canned_review(),
            Endpoint::AutoFix => Self::canned_auto_fix(payload),
        };
        Ok(BackendResponse { status: 200, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revbot_shared::models::review::ReviewResponse;

    #[tokio::test]
    async fn canned_review_decodes_as_a_review_response() {
        let backend = MockBackend::with_delay(Duration::ZERO);
        let reply = backend
            .forward(Endpoint::Review, &json!({"code": "x", "language": "python"}))
            .await
            .unwrap();

        assert_eq!(reply.status, 200);
        let decoded: ReviewResponse = serde_json::from_value(reply.body).unwrap();
        assert_eq!(decoded.issues.len(), 2);
    }

    #[tokio::test]
    async fn canned_auto_fix_echoes_the_submitted_code() {
        let backend = MockBackend::with_delay(Duration::ZERO);
        let reply = backend
            .forward(
                Endpoint::AutoFix,
                &json!({"code": "print('hi')", "language": "python"}),
            )
            .await
            .unwrap();

        assert_eq!(reply.body["fixed_code"], "print('hi')");
        assert!(reply.body["summary"].as_str().unwrap().len() > 0);
    }
}
