use serde::{Deserialize, Serialize};

use crate::domain::Tone;

/// Request body accepted by `POST /api/email/generate`.
///
/// Field names are camelCase on the wire. A missing `tone` is treated the
/// same as an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReplyRequest {
    pub email_content: String,
    #[serde(default)]
    pub tone: Tone,
}

impl GenerateReplyRequest {
    pub fn new(email_content: impl Into<String>, tone: Tone) -> Self {
        Self {
            email_content: email_content.into(),
            tone,
        }
    }
}
