use std::time::{Duration, Instant};

use crate::models::suggestion::DEFAULT_SUGGESTIONS;
use crate::models::{Conversation, NoticeMessage, SuggestionPrompt};

const NOTICE_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Sidebar,
}

/// The UI's copy of the world. Mutated only by events coming back from the
/// action service plus purely visual state (focus, scroll, notices).
pub struct AppState {
    pub conversations: Vec<Conversation>,
    pub current: Option<String>,
    pub suggestions: Vec<SuggestionPrompt>,
    pub waiting_for_backend: bool,
    pub focus: Focus,
    pub sidebar_index: usize,
    pub scroll_offset: usize,
    notice: Option<(NoticeMessage, Instant)>,
}

impl AppState {
    pub fn new(conversations: Vec<Conversation>, current: Option<String>) -> AppState {
        AppState {
            conversations,
            current,
            suggestions: DEFAULT_SUGGESTIONS.clone(),
            waiting_for_backend: false,
            focus: Focus::Input,
            sidebar_index: 0,
            scroll_offset: 0,
            notice: None,
        }
    }

    /// Same fallback as the registry read side: a dangling pointer resolves
    /// to the first conversation.
    pub fn current_conversation(&self) -> Option<&Conversation> {
        self.current
            .as_deref()
            .and_then(|id| self.conversations.iter().find(|c| c.id() == id))
            .or_else(|| self.conversations.first())
    }

    pub fn refresh(&mut self, conversations: Vec<Conversation>, current: Option<String>) {
        let switched = current != self.current;
        self.conversations = conversations;
        self.current = current;
        if self.sidebar_index >= self.conversations.len() {
            self.sidebar_index = self.conversations.len().saturating_sub(1);
        }
        if switched {
            self.scroll_offset = 0;
        }
    }

    pub fn selected_sidebar_id(&self) -> Option<&str> {
        self.conversations.get(self.sidebar_index).map(|c| c.id())
    }

    pub fn sidebar_up(&mut self) {
        self.sidebar_index = self.sidebar_index.saturating_sub(1);
    }

    pub fn sidebar_down(&mut self) {
        if self.sidebar_index + 1 < self.conversations.len() {
            self.sidebar_index += 1;
        }
    }

    pub fn set_notice(&mut self, notice: NoticeMessage) {
        self.notice = Some((notice, Instant::now()));
    }

    pub fn notice(&self) -> Option<&NoticeMessage> {
        self.notice.as_ref().map(|(notice, _)| notice)
    }

    /// Drop the notice once its duration has elapsed. Driven by UI ticks.
    pub fn tick_notice(&mut self) {
        if let Some((notice, shown_at)) = &self.notice {
            let duration = notice.duration().unwrap_or(NOTICE_DURATION);
            if shown_at.elapsed() >= duration {
                self.notice = None;
            }
        }
    }
}
