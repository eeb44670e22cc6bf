//! Events flowing from the backend worker to the UI.

/// Shown for every failed generation attempt, regardless of cause. The
/// underlying error goes to the log, never to the screen.
pub const GENERATION_FAILURE_MESSAGE: &str = "Failed to generate email reply. Please try again";

pub enum UiEvent {
    /// Status-line text (worker lifecycle, clipboard confirmations).
    Info(String),
    /// A generation request completed with this reply text.
    ReplyGenerated(String),
    /// A generation request failed; detail is already logged.
    GenerationFailed,
}
