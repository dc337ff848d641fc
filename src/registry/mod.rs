#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

use crate::config::constants::{CONVERSATIONS_KEY, CURRENT_CONVERSATION_KEY};
use crate::models::{ArcIdGenerator, Conversation};
use crate::storage::ArcStorage;

/// In-memory list of conversations, mirrored to storage on every mutation.
/// The stored list and the in-memory state converge eventually, not
/// atomically; the current pointer is revalidated on bootstrap and on every
/// read through [`ConversationRegistry::current`].
pub struct ConversationRegistry {
    storage: ArcStorage,
    id_gen: ArcIdGenerator,
    conversations: Vec<Conversation>,
    current_id: Option<String>,
}

impl ConversationRegistry {
    /// Load conversations and the current pointer from storage. Malformed
    /// stored state is logged and treated as empty; an empty registry gets
    /// a fresh conversation so there is always something to select.
    pub async fn bootstrap(storage: ArcStorage, id_gen: ArcIdGenerator) -> Self {
        let mut registry = Self {
            storage,
            id_gen,
            conversations: vec![],
            current_id: None,
        };

        match registry.read_key(CONVERSATIONS_KEY).await {
            Some(raw) => match serde_json::from_str::<Vec<Conversation>>(&raw) {
                Ok(conversations) => registry.conversations = conversations,
                Err(err) => {
                    log::warn!("Malformed stored conversations, starting empty: {}", err);
                }
            },
            None => {}
        }

        let stored_id = registry.read_key(CURRENT_CONVERSATION_KEY).await;
        registry.current_id = match stored_id {
            Some(id) if registry.conversations.iter().any(|c| c.id() == id) => Some(id),
            _ => registry.conversations.first().map(|c| c.id().to_string()),
        };

        if registry.conversations.is_empty() {
            registry.create().await;
        }

        registry
    }

    /// Append a fresh empty conversation and make it current. Also runs on
    /// the self-healing path when a delete empties the registry.
    pub async fn create(&mut self) -> Conversation {
        let conversation = Conversation::default().with_id(self.id_gen.next_id());
        self.conversations.push(conversation.clone());
        self.current_id = Some(conversation.id().to_string());
        self.save_conversations().await;
        self.save_current().await;
        conversation
    }

    /// Set the current pointer unconditionally. Existence is not checked
    /// here; the read side falls back to the first conversation when the
    /// pointer does not resolve.
    pub async fn select(&mut self, id: impl Into<String>) {
        self.current_id = Some(id.into());
        self.save_current().await;
    }

    /// Replace the entry with a matching id. Silent no-op when no entry
    /// matches.
    pub async fn update(&mut self, conversation: Conversation) {
        match self
            .conversations
            .iter_mut()
            .find(|c| c.id() == conversation.id())
        {
            Some(slot) => *slot = conversation,
            None => return,
        }
        self.save_conversations().await;
    }

    pub async fn delete(&mut self, id: &str) {
        self.conversations.retain(|c| c.id() != id);

        if self.current_id.as_deref() == Some(id) {
            self.current_id = self.conversations.first().map(|c| c.id().to_string());
            self.save_current().await;
        }

        if self.conversations.is_empty() {
            self.create().await;
        } else {
            self.save_conversations().await;
        }
    }

    /// Resolve the current conversation, falling back to the first entry
    /// when the pointer is unset or dangling.
    pub fn current(&self) -> Option<&Conversation> {
        self.current_id
            .as_deref()
            .and_then(|id| self.conversations.iter().find(|c| c.id() == id))
            .or_else(|| self.conversations.first())
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    async fn read_key(&self, key: &str) -> Option<String> {
        match self.storage.get(key).await {
            Ok(value) => value,
            Err(err) => {
                log::error!("Failed to read {} from storage: {}", key, err);
                None
            }
        }
    }

    /// Full rewrite of the stored list. An empty registry is never written
    /// out so a transient empty state cannot clobber a good stored list.
    async fn save_conversations(&self) {
        if self.conversations.is_empty() {
            return;
        }
        let raw = match serde_json::to_string(&self.conversations) {
            Ok(raw) => raw,
            Err(err) => {
                log::error!("Failed to serialize conversations: {}", err);
                return;
            }
        };
        if let Err(err) = self.storage.set(CONVERSATIONS_KEY, &raw).await {
            log::error!("Failed to persist conversations: {}", err);
        }
    }

    async fn save_current(&self) {
        let Some(id) = self.current_id.as_deref() else {
            return;
        };
        if let Err(err) = self.storage.set(CURRENT_CONVERSATION_KEY, id).await {
            log::error!("Failed to persist current conversation: {}", err);
        }
    }
}
