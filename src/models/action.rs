use crate::backend::CompletionError;
use crate::models::Transcript;

/// Requests flowing from the UI into the action service. `SendFinished` is
/// internal: the worker task that ran the remote call feeds the outcome
/// back through the same queue.
#[derive(Debug)]
pub enum Action {
    NewConversation,
    SelectConversation(String),
    DeleteConversation(String),
    SendMessage(String),
    SendFinished {
        conversation_id: String,
        result: Result<Transcript, CompletionError>,
    },
}
