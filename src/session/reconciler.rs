#[cfg(test)]
#[path = "reconciler_test.rs"]
mod tests;

use crate::models::{EntryContent, TranscriptEntry};

/// Derive the visible bot message from the latest turn of a transcript.
///
/// Returns `None` when the last entry is not an assistant turn; that is a
/// silent skip, not an error, and leaves the conversation untouched. String
/// content is tentatively parsed as JSON so tool-style replies carrying an
/// `output` field render as their output rather than the raw JSON.
pub fn reconcile(transcript: &[TranscriptEntry]) -> Option<String> {
    let last = transcript.last()?;
    if !last.is_assistant() {
        return None;
    }

    let text = match &last.content {
        EntryContent::Text(text) => match serde_json::from_str::<serde_json::Value>(text) {
            Ok(value) => value
                .get("output")
                .and_then(|output| output.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| text.clone()),
            Err(_) => text.clone(),
        },
        EntryContent::Structured(content) => content
            .output
            .clone()
            .unwrap_or_else(|| serde_json::to_string(content).unwrap_or_default()),
    };

    Some(text)
}
