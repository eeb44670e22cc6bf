//! Pure state machine for the reply form. No I/O happens here: the UI feeds
//! it inputs and dispatches the command snapshots it returns.

use shared::{domain::Tone, protocol::GenerateReplyRequest};

use crate::controller::events::GENERATION_FAILURE_MESSAGE;

/// Lifecycle of the single in-flight generation request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded(String),
    Failed(String),
}

/// Draft input plus request lifecycle. The draft fields are mutated directly
/// by the form widgets; every state transition goes through a method here.
#[derive(Debug, Default)]
pub struct ReplyForm {
    pub email_content: String,
    pub tone: Tone,
    state: RequestState,
    last_reply: Option<String>,
}

impl ReplyForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == RequestState::Pending
    }

    /// Submission gate: non-empty draft and no request in flight. The submit
    /// button is disabled under the same condition.
    pub fn can_submit(&self) -> bool {
        !self.email_content.is_empty() && !self.is_pending()
    }

    /// Starts a submission. Returns the request snapshot to dispatch, or
    /// `None` when the gate fails (a no-op for the caller). Entering
    /// `Pending` clears a previous error; the last reply stays visible until
    /// the new result arrives.
    pub fn begin_submit(&mut self) -> Option<GenerateReplyRequest> {
        if !self.can_submit() {
            return None;
        }
        self.state = RequestState::Pending;
        Some(GenerateReplyRequest::new(
            self.email_content.clone(),
            self.tone,
        ))
    }

    pub fn complete_success(&mut self, reply: String) {
        self.last_reply = Some(reply.clone());
        self.state = RequestState::Succeeded(reply);
    }

    pub fn complete_failure(&mut self) {
        self.state = RequestState::Failed(GENERATION_FAILURE_MESSAGE.to_string());
    }

    /// Error message to render, if the latest attempt failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Reply text to render: the most recent successful reply. It survives a
    /// later failure; only the next success replaces it.
    pub fn displayed_reply(&self) -> Option<&str> {
        self.last_reply.as_deref()
    }

    /// Reply eligible for the clipboard. Only a fresh success qualifies.
    pub fn reply_to_copy(&self) -> Option<&str> {
        match &self.state {
            RequestState::Succeeded(reply) => Some(reply),
            _ => None,
        }
    }
}
