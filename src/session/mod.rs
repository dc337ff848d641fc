pub mod reconciler;

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

pub use reconciler::reconcile;

use std::collections::HashMap;

use crate::config::constants::TRANSCRIPTS_KEY;
use crate::models::Transcript;
use crate::storage::ArcStorage;

/// Per-conversation raw transcript store. Transcripts live in one storage
/// key as a map from conversation id to entry list, separate from the
/// visible message lists. Entries for deleted conversations are tolerated
/// and never pruned.
pub struct ChatSession {
    storage: ArcStorage,
}

impl ChatSession {
    pub fn new(storage: ArcStorage) -> Self {
        Self { storage }
    }

    /// Load the transcript for a conversation, defaulting to empty when the
    /// map is missing, unparsable, or has no entry for this id.
    pub async fn transcript(&self, conversation_id: &str) -> Transcript {
        let mut map = self.transcript_map().await;
        map.remove(conversation_id).unwrap_or_default()
    }

    /// Replace and persist the stored transcript for a conversation. The
    /// whole map is read then written back; concurrent writers to the same
    /// key race with last write winning.
    pub async fn store_transcript(&self, conversation_id: &str, transcript: &Transcript) {
        let mut map = self.transcript_map().await;
        map.insert(conversation_id.to_string(), transcript.clone());

        let raw = match serde_json::to_string(&map) {
            Ok(raw) => raw,
            Err(err) => {
                log::error!("Failed to serialize transcripts: {}", err);
                return;
            }
        };
        if let Err(err) = self.storage.set(TRANSCRIPTS_KEY, &raw).await {
            log::error!("Failed to persist transcripts: {}", err);
        }
    }

    async fn transcript_map(&self) -> HashMap<String, Transcript> {
        let raw = match self.storage.get(TRANSCRIPTS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return HashMap::new(),
            Err(err) => {
                log::error!("Failed to read transcripts from storage: {}", err);
                return HashMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(err) => {
                log::warn!("Malformed stored transcripts, treating as empty: {}", err);
                HashMap::new()
            }
        }
    }
}
