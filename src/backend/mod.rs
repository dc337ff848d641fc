pub mod remote;

pub use remote::Remote;

#[cfg(test)]
use mockall::automock;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use eyre::Result;
use thiserror::Error;

use crate::config::BackendConfig;
use crate::models::{Transcript, TranscriptEntry};

/// Failures surfaced from a completion attempt. The send flow treats all
/// variants the same way: log, notify, leave the optimistic user message in
/// place. There is no retry.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion endpoint returned {status}: {message}")]
    Network { status: u16, message: String },

    #[error("malformed completion response: {0}")]
    Parse(String),

    #[error("sending completion request: {0}")]
    Transport(#[from] reqwest::Error),
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompletionBackend {
    fn name(&self) -> &str;

    /// Send the transcript plus the new user turn; on success the service
    /// returns the full updated transcript, which replaces the stored one.
    async fn complete(
        &self,
        transcript: &[TranscriptEntry],
        user_turn: &str,
    ) -> Result<Transcript, CompletionError>;
}

pub type ArcBackend = Arc<dyn CompletionBackend + Send + Sync>;

pub fn new_backend(config: &BackendConfig) -> Result<ArcBackend> {
    if config.endpoint.is_empty() {
        eyre::bail!("No completion endpoint configured");
    }

    let mut remote = Remote::default().with_endpoint(&config.endpoint);
    if let Some(timeout_secs) = config.timeout_secs {
        remote = remote.with_timeout(Duration::from_secs(timeout_secs as u64));
    }

    Ok(Arc::new(remote))
}
