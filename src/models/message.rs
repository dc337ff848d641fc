use serde::{Deserialize, Serialize};

/// Who produced a visible message. Serialized as `"user"`/`"bot"` in the
/// stored conversation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A user-visible chat message. Immutable once created; conversations only
/// ever append these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    id: String,
    content: String,
    sender: Sender,
    timestamp: chrono::DateTime<chrono::Utc>,
}

impl Message {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            content: content.into(),
            sender,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn new_user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content)
    }

    pub fn new_bot(content: impl Into<String>) -> Self {
        Self::new(Sender::Bot, content)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::Utc> {
        self.timestamp
    }
}
