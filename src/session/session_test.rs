use std::sync::Arc;

use super::*;
use crate::config::constants::TRANSCRIPTS_KEY;
use crate::models::TranscriptEntry;
use crate::storage::Storage;
use crate::storage::memory::Memory;

#[tokio::test]
async fn test_transcript_defaults_to_empty() {
    let session = ChatSession::new(Arc::new(Memory::new()));
    assert!(session.transcript("convo-1").await.is_empty());
}

#[tokio::test]
async fn test_store_then_load_transcript() {
    let session = ChatSession::new(Arc::new(Memory::new()));
    let transcript = vec![
        TranscriptEntry::user("hi"),
        TranscriptEntry::assistant("hello"),
    ];

    session.store_transcript("convo-1", &transcript).await;

    assert_eq!(session.transcript("convo-1").await, transcript);
    assert!(session.transcript("convo-2").await.is_empty());
}

#[tokio::test]
async fn test_store_keeps_other_conversations() {
    let session = ChatSession::new(Arc::new(Memory::new()));
    let first = vec![TranscriptEntry::user("one")];
    let second = vec![TranscriptEntry::user("two")];

    session.store_transcript("a", &first).await;
    session.store_transcript("b", &second).await;

    assert_eq!(session.transcript("a").await, first);
    assert_eq!(session.transcript("b").await, second);
}

#[tokio::test]
async fn test_malformed_transcript_map_treated_as_empty() {
    let storage = Arc::new(Memory::new());
    storage.set(TRANSCRIPTS_KEY, "not json at all").await.unwrap();

    let session = ChatSession::new(storage.clone());
    assert!(session.transcript("convo-1").await.is_empty());

    // A subsequent write replaces the malformed blob wholesale.
    let transcript = vec![TranscriptEntry::user("hi")];
    session.store_transcript("convo-1", &transcript).await;
    assert_eq!(session.transcript("convo-1").await, transcript);
}
