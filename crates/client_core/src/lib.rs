use reqwest::{header, Client, StatusCode};
use shared::protocol::GenerateReplyRequest;
use thiserror::Error;
use tracing::debug;

/// Why a generation request did not produce a reply.
///
/// Callers surface a fixed user-facing message for every variant; the
/// variant itself only feeds diagnostics.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("transport failure talking to the generation service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generation service answered with status {0}")]
    Status(StatusCode),
}

/// HTTP client for the reply-generation endpoint.
///
/// Holds a single connection pool for the lifetime of the app. No request
/// timeout is configured: a service that never answers keeps the caller
/// waiting.
pub struct GenerationClient {
    http: Client,
    base_url: String,
}

impl GenerationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Sends one generation request and normalizes the response body into
    /// displayable text. Any non-2xx status or transport failure is an error;
    /// there is no per-status branching and no retry.
    pub async fn generate_reply(
        &self,
        request: &GenerateReplyRequest,
    ) -> Result<String, GenerationError> {
        debug!(tone = request.tone.wire_value(), "requesting generated reply");

        let response = self
            .http
            .post(format!("{}/api/email/generate", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Status(status));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await?;
        Ok(reply_text(content_type.as_deref(), &body))
    }
}

/// Normalizes a successful response body into text.
///
/// JSON string payloads are used verbatim, any other JSON value is
/// serialized back to text, and non-JSON bodies pass through unchanged.
fn reply_text(content_type: Option<&str>, body: &str) -> String {
    let is_json = content_type.is_some_and(|value| value.contains("application/json"));
    if !is_json {
        return body.to_string();
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(text)) => text,
        Ok(other) => other.to_string(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
