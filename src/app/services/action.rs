#[cfg(test)]
#[path = "action_test.rs"]
mod tests;

use std::sync::Arc;

use eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::backend::{ArcBackend, CompletionError};
use crate::config::constants::TITLE_MAX_CHARS;
use crate::models::{
    Action, ArcEventTx, ArcIdGenerator, Event, Message, NoticeMessage, Transcript,
    suggestions_for, title_from_message,
};
use crate::registry::ConversationRegistry;
use crate::session::{ChatSession, reconcile};

/// Drives every mutation of the conversation registry and transcript store
/// off a single action queue. Remote calls run on worker tasks so the queue
/// keeps draining while a send is in flight; the worker feeds its outcome
/// back as [`Action::SendFinished`].
pub struct ActionService {
    event_tx: ArcEventTx,
    action_rx: mpsc::UnboundedReceiver<Action>,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel_token: CancellationToken,
    backend: ArcBackend,
    registry: ConversationRegistry,
    session: ChatSession,
    id_gen: ArcIdGenerator,
}

impl ActionService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        event_tx: ArcEventTx,
        action_rx: mpsc::UnboundedReceiver<Action>,
        action_tx: mpsc::UnboundedSender<Action>,
        backend: ArcBackend,
        registry: ConversationRegistry,
        session: ChatSession,
        id_gen: ArcIdGenerator,
        cancel_token: CancellationToken,
    ) -> ActionService {
        ActionService {
            event_tx,
            action_rx,
            action_tx,
            cancel_token,
            backend,
            registry,
            session,
            id_gen,
        }
    }

    pub async fn start(&mut self) -> Result<()> {
        loop {
            tokio::select! {
                _ = self.cancel_token.cancelled() => {
                    log::debug!("Action service cancelled");
                    return Ok(());
                }

                action = self.action_rx.recv() => {
                    let Some(action) = action else {
                        continue;
                    };
                    self.handle_action(action).await?;
                }
            }
        }
    }

    pub async fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::NewConversation => {
                self.registry.create().await;
                self.emit_state().await?;
            }

            Action::SelectConversation(id) => {
                self.registry.select(id).await;
                self.emit_state().await?;
            }

            Action::DeleteConversation(id) => {
                self.registry.delete(&id).await;
                self.emit_state().await?;
            }

            Action::SendMessage(text) => self.begin_send(text).await?,

            Action::SendFinished {
                conversation_id,
                result,
            } => self.finish_send(conversation_id, result).await?,
        }
        Ok(())
    }

    /// Pull the next queued action. Exposed for tests driving the service
    /// without the run loop.
    pub async fn next_action(&mut self) -> Option<Action> {
        self.action_rx.recv().await
    }

    pub fn registry(&self) -> &ConversationRegistry {
        &self.registry
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Optimistically append the user message to the visible conversation,
    /// then hand the transcript plus new turn to a worker task. The user's
    /// own text never waits on the remote call.
    async fn begin_send(&mut self, text: String) -> Result<()> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let Some(current) = self.registry.current() else {
            return Ok(());
        };

        let mut conversation = current.clone();
        let conversation_id = conversation.id().to_string();
        conversation.append_message(
            Message::new_user(text.clone()).with_id(self.id_gen.next_id()),
        );
        if conversation.len() == 1 {
            conversation.set_title(title_from_message(&text, TITLE_MAX_CHARS));
        }
        self.registry.update(conversation).await;
        self.emit_state().await?;
        self.event_tx.send(Event::SendStarted).await?;

        let transcript = self.session.transcript(&conversation_id).await;
        let backend = Arc::clone(&self.backend);
        let action_tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = backend.complete(&transcript, &text).await;
            if let Err(err) = action_tx.send(Action::SendFinished {
                conversation_id,
                result,
            }) {
                log::error!("Failed to deliver completion result: {}", err);
            }
        });
        Ok(())
    }

    /// Apply the outcome of a remote call. The transcript write happens for
    /// the originating conversation regardless of what is selected now; the
    /// staleness guard only covers the visible side, so a slow reply for one
    /// conversation never surfaces inside another.
    async fn finish_send(
        &mut self,
        conversation_id: String,
        result: Result<Transcript, CompletionError>,
    ) -> Result<()> {
        self.event_tx.send(Event::SendSettled).await?;

        let transcript = match result {
            Ok(transcript) => transcript,
            Err(err) => {
                log::error!("Completion request failed: {}", err);
                self.event_tx
                    .send(Event::Notice(NoticeMessage::error(format!(
                        "Failed to get a reply: {}",
                        err
                    ))))
                    .await?;
                return Ok(());
            }
        };

        self.session
            .store_transcript(&conversation_id, &transcript)
            .await;

        let still_current = self
            .registry
            .current()
            .map(|c| c.id() == conversation_id)
            .unwrap_or(false);
        if !still_current {
            log::debug!(
                "Dropping stale reply for conversation {}: no longer selected",
                conversation_id
            );
            return Ok(());
        }

        let Some(reply) = reconcile(&transcript) else {
            return Ok(());
        };

        let mut conversation = match self.registry.current() {
            Some(current) => current.clone(),
            None => return Ok(()),
        };
        conversation.append_message(Message::new_bot(reply).with_id(self.id_gen.next_id()));
        let count = conversation.len();
        self.registry.update(conversation).await;
        self.emit_state().await?;
        self.event_tx
            .send(Event::SuggestionsUpdated(suggestions_for(count).to_vec()))
            .await?;
        Ok(())
    }

    async fn emit_state(&self) -> Result<()> {
        self.event_tx
            .send(Event::ConversationsRefreshed {
                conversations: self.registry.conversations().to_vec(),
                current: self.registry.current().map(|c| c.id().to_string()),
            })
            .await?;
        Ok(())
    }
}
