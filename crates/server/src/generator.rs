use reqwest::{Client, StatusCode};
use serde::Deserialize;
use shared::{domain::Tone, protocol::GenerateReplyRequest};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("upstream answered with status {0}")]
    UpstreamStatus(StatusCode),
    #[error("upstream response carried no candidate text")]
    MalformedResponse,
}

#[derive(Debug, Deserialize)]
struct UpstreamResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

/// Client for the upstream text-generation API. Builds the reply prompt,
/// forwards it, and extracts the first candidate's text.
pub struct ReplyGenerator {
    http: Client,
    api_url: String,
    api_key: String,
}

impl ReplyGenerator {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    pub async fn generate(&self, request: &GenerateReplyRequest) -> Result<String, GenerateError> {
        let prompt = build_prompt(request);
        debug!(prompt_len = prompt.len(), "forwarding prompt upstream");

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .http
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::UpstreamStatus(status));
        }

        let parsed: UpstreamResponse = response.json().await?;
        extract_reply_text(parsed)
    }
}

fn build_prompt(request: &GenerateReplyRequest) -> String {
    let mut prompt = String::from(
        "Write ONLY the body of the reply email. \
         Do not include any subject line, formatting instructions, or optional suggestions. \
         The reply should start directly with a greeting like 'Hi,' and end with a closing \
         like 'Best regards,'. Keep it simple and professional. ",
    );
    if request.tone != Tone::Unspecified {
        prompt.push_str(&format!("Use a {} tone. ", request.tone.wire_value()));
    }
    prompt.push_str("\nOriginal email:\n");
    prompt.push_str(&request.email_content);
    prompt
}

fn extract_reply_text(response: UpstreamResponse) -> Result<String, GenerateError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or(GenerateError::MalformedResponse)
}
