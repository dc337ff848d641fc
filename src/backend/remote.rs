#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;

use std::time;

use async_trait::async_trait;
use serde::Serialize;

use crate::backend::{CompletionBackend, CompletionError};
use crate::config::user_agent;
use crate::models::{Transcript, TranscriptEntry};

pub struct Remote {
    alias: String,
    endpoint: String,
    timeout: Option<time::Duration>,
}

#[derive(Serialize)]
struct CompletionRequest {
    msgss: Transcript,
}

#[async_trait]
impl CompletionBackend for Remote {
    fn name(&self) -> &str {
        &self.alias
    }

    async fn complete(
        &self,
        transcript: &[TranscriptEntry],
        user_turn: &str,
    ) -> Result<Transcript, CompletionError> {
        let mut msgss = transcript.to_vec();
        msgss.push(TranscriptEntry::user(user_turn));

        let mut req = reqwest::Client::new()
            .post(&self.endpoint)
            .header("User-Agent", user_agent())
            .json(&CompletionRequest { msgss });

        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let res = req.send().await?;

        if !res.status().is_success() {
            return Err(CompletionError::Network {
                status: res.status().as_u16(),
                message: res
                    .status()
                    .canonical_reason()
                    .unwrap_or("unknown")
                    .to_string(),
            });
        }

        let transcript = res
            .json::<Transcript>()
            .await
            .map_err(|err| CompletionError::Parse(err.to_string()))?;

        Ok(transcript)
    }
}

impl Remote {
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for Remote {
    fn default() -> Self {
        Self {
            alias: "remote".to_string(),
            endpoint: String::new(),
            timeout: None,
        }
    }
}
