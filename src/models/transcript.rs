use serde::{Deserialize, Serialize};

pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";

/// One turn of the raw exchange with the remote endpoint. This is the wire
/// format the service expects back verbatim; it is persisted
/// per-conversation, independent of the visible message list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: String,
    pub content: EntryContent,
}

impl TranscriptEntry {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ROLE_USER.to_string(),
            content: EntryContent::Text(content.into()),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ROLE_ASSISTANT.to_string(),
            content: EntryContent::Text(content.into()),
        }
    }

    pub fn is_assistant(&self) -> bool {
        self.role == ROLE_ASSISTANT
    }
}

/// Entry content is either a bare string or the service's structured form
/// carrying tool output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryContent {
    Text(String),
    Structured(StructuredContent),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredContent {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
}

/// A transcript is the whole exchange for one conversation, oldest first.
pub type Transcript = Vec<TranscriptEntry>;
