#[cfg(test)]
#[path = "suggestion_test.rs"]
mod tests;

use once_cell::sync::Lazy;

/// A canned prompt offered below the input box. Never persisted; the
/// active set is recomputed after every completed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionPrompt {
    id: String,
    text: String,
}

impl SuggestionPrompt {
    fn new(id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

pub static DEFAULT_SUGGESTIONS: Lazy<Vec<SuggestionPrompt>> = Lazy::new(|| {
    vec![
        SuggestionPrompt::new("1", "How can I connect with Prashant Rewar"),
        SuggestionPrompt::new("2", "Tell me something about his top projects"),
        SuggestionPrompt::new("3", "Explain a Random Project"),
    ]
});

pub static FOLLOW_UP_SUGGESTIONS: Lazy<Vec<SuggestionPrompt>> = Lazy::new(|| {
    vec![
        SuggestionPrompt::new("1", "Can you explain that differently?"),
        SuggestionPrompt::new(
            "2",
            "Does Prashant Rewar have any prior experience in web-scraping?",
        ),
        SuggestionPrompt::new("3", "Tell me more details about it?"),
    ]
});

pub static OPINION_SUGGESTIONS: Lazy<Vec<SuggestionPrompt>> = Lazy::new(|| {
    vec![
        SuggestionPrompt::new("4", "Whats your opinion on this?"),
        SuggestionPrompt::new("5", "How does he made you?"),
        SuggestionPrompt::new("6", "What else can you tell me?"),
    ]
});

/// Pick the suggestion set for a conversation with `message_count` visible
/// messages. A fixed rotation on the count, nothing content-aware.
pub fn suggestions_for(message_count: usize) -> &'static [SuggestionPrompt] {
    match message_count % 3 {
        1 => &FOLLOW_UP_SUGGESTIONS,
        2 => &OPINION_SUGGESTIONS,
        _ => &DEFAULT_SUGGESTIONS,
    }
}
