/// Remote completion endpoint used when the configuration does not
/// override it.
pub const DEFAULT_ENDPOINT: &str = "https://server-next-alpha.vercel.app/api/chat";

/// Storage key holding the serialized conversation list.
pub const CONVERSATIONS_KEY: &str = "conversations";

/// Storage key holding the id of the currently selected conversation.
pub const CURRENT_CONVERSATION_KEY: &str = "current_conversation";

/// Storage key holding the per-conversation transcript map.
pub const TRANSCRIPTS_KEY: &str = "transcripts";

pub const DEFAULT_CONVERSATION_TITLE: &str = "New conversation";

/// A conversation title is the first user message cut down to this many
/// characters.
pub const TITLE_MAX_CHARS: usize = 30;

pub const LOG_FILE_PATH: &str = "/tmp/prattle.log";

pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(100);
