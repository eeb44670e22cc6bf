//! Backend commands queued from UI to the backend worker.

use shared::protocol::GenerateReplyRequest;

pub enum BackendCommand {
    GenerateReply { request: GenerateReplyRequest },
}
