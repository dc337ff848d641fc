use std::sync::Arc;

use tokio::sync::mpsc;
use tui_textarea::Input;

use crate::models::{Conversation, SuggestionPrompt};

#[derive(Debug)]
pub enum Event {
    Notice(crate::models::NoticeMessage),

    /// Full snapshot of the registry after a mutation. The UI replaces its
    /// copy wholesale; at this scale cloning is cheaper than diffing.
    ConversationsRefreshed {
        conversations: Vec<Conversation>,
        current: Option<String>,
    },
    SuggestionsUpdated(Vec<SuggestionPrompt>),
    SendStarted,
    SendSettled,

    KeyboardCharInput(Input),
    KeyboardEsc,
    KeyboardEnter,
    KeyboardNewLine,
    KeyboardTab,
    KeyboardCtrlN,
    KeyboardCtrlX,
    KeyboardF(u8),
    KeyboardPaste(String),

    Quit,

    UiTick,
    UiScrollUp,
    UiScrollDown,
}

#[async_trait::async_trait]
pub trait EventTx {
    async fn send(&self, event: Event) -> Result<(), mpsc::error::SendError<Event>>;
}

#[async_trait::async_trait]
impl EventTx for mpsc::Sender<Event> {
    async fn send(&self, event: Event) -> Result<(), mpsc::error::SendError<Event>> {
        self.send(event).await
    }
}

#[async_trait::async_trait]
impl EventTx for mpsc::UnboundedSender<Event> {
    async fn send(&self, event: Event) -> Result<(), mpsc::error::SendError<Event>> {
        self.send(event)
    }
}

pub type ArcEventTx = Arc<dyn EventTx + Send + Sync>;
