pub mod action;
pub mod conversation;
pub mod event;
pub mod id;
pub mod message;
pub mod notice;
pub mod suggestion;
pub mod transcript;

pub use action::Action;
pub use conversation::{Conversation, title_from_message};
pub use event::{ArcEventTx, Event, EventTx};
pub use id::{ArcIdGenerator, IdGenerator, UuidGenerator};
pub use message::{Message, Sender};
pub use notice::*;
pub use suggestion::{SuggestionPrompt, suggestions_for};
pub use transcript::{EntryContent, StructuredContent, Transcript, TranscriptEntry};
