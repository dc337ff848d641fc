#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::config::constants::DEFAULT_CONVERSATION_TITLE;
use crate::models::Message;

/// A named thread of user-visible messages. The raw transcript exchanged
/// with the remote endpoint lives elsewhere, keyed by this conversation's
/// id (see [`crate::session`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    id: String,
    title: String,
    messages: Vec<Message>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl Conversation {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_created_at(mut self, timestamp: chrono::DateTime<chrono::Utc>) -> Self {
        self.created_at = timestamp;
        self
    }

    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn append_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.created_at
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self {
            id: "".to_string(),
            title: DEFAULT_CONVERSATION_TITLE.to_string(),
            messages: vec![],
            created_at: chrono::Utc::now(),
        }
    }
}

/// Derive a conversation title from the first user message, cut down to at
/// most `max_chars` characters.
pub fn title_from_message(content: &str, max_chars: usize) -> String {
    content.chars().take(max_chars).collect()
}
