use std::collections::VecDeque;

use futures::StreamExt;
use tokio::sync::mpsc;

use crate::common::{RelayCommand, RelayEvent};

use super::backend::CompletionBackend;
use super::error::RelayError;
use super::history::ChatHistory;
use super::protocol::{self, CompletionRequest};
use super::sse::{SseDecoder, SseEvent};

enum TurnEnd {
    Completed,
    Failed(RelayError),
}

/// Background task driving one completion request per user turn and
/// streaming the reply back to the UI. Owns the conversation history for
/// the lifetime of the session.
pub struct StreamRelay<B> {
    backend: B,
    model: String,
    history: ChatHistory,
    event_sender: mpsc::Sender<RelayEvent>,
    command_receiver: mpsc::Receiver<RelayCommand>,
    /// SendTurn commands that arrived while a stream was in flight.
    pending: VecDeque<RelayCommand>,
}

impl<B: CompletionBackend> StreamRelay<B> {
    pub fn new(
        backend: B,
        model: String,
        event_sender: mpsc::Sender<RelayEvent>,
        command_receiver: mpsc::Receiver<RelayCommand>,
    ) -> Self {
        Self {
            backend,
            model,
            history: ChatHistory::new(),
            event_sender,
            command_receiver,
            pending: VecDeque::new(),
        }
    }

    /// Command loop. Turns are serialized: SendTurn commands arriving
    /// mid-stream are queued and run in send order, so exactly one
    /// request is outstanding at any time.
    pub async fn run(mut self) {
        log::info!("Stream relay started (model: {})", self.model);

        loop {
            let command = match self.pending.pop_front() {
                Some(command) => command,
                None => match self.command_receiver.recv().await {
                    Some(command) => command,
                    None => break,
                },
            };

            match command {
                RelayCommand::SendTurn { prompt, target_id } => {
                    self.run_turn(prompt, target_id).await;
                }
                RelayCommand::CancelTurn { target_id } => {
                    // Nothing in flight; the turn already ended.
                    log::debug!("Ignoring cancel for finished turn {target_id}");
                }
            }
        }

        log::info!("Stream relay shut down");
    }

    async fn run_turn(&mut self, prompt: String, target_id: String) {
        self.history.push_user(prompt);

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: self.history.entries().to_vec(),
            stream: true,
        };

        let mut stream = match self.backend.open_stream(&request).await {
            Ok(stream) => stream,
            Err(error) => {
                // Connect-time failure: no assistant entry. The user
                // entry stays and remains context for later turns.
                log::warn!("Turn {target_id} failed to start: {error}");
                self.publish(RelayEvent::TurnFailed { target_id, error })
                    .await;
                return;
            }
        };

        let mut decoder = SseDecoder::default();
        let mut snapshot = String::new();

        let end = loop {
            tokio::select! {
                chunk = stream.next() => match chunk {
                    Some(Ok(bytes)) => {
                        let mut done = false;
                        for event in decoder.push(&bytes) {
                            match event {
                                SseEvent::Data(payload) => {
                                    self.apply_data(&payload, &mut snapshot, &target_id).await;
                                }
                                SseEvent::Done => done = true,
                            }
                        }
                        if done {
                            break TurnEnd::Completed;
                        }
                    }
                    Some(Err(error)) => break TurnEnd::Failed(error),
                    None => break TurnEnd::Completed,
                },
                command = self.command_receiver.recv() => match command {
                    Some(RelayCommand::CancelTurn { target_id: cancelled })
                        if cancelled == target_id =>
                    {
                        break TurnEnd::Failed(RelayError::Cancelled);
                    }
                    Some(RelayCommand::CancelTurn { target_id: stale }) => {
                        log::debug!("Ignoring cancel for finished turn {stale}");
                    }
                    Some(command) => self.pending.push_back(command),
                    // UI went away; abort the turn and let run() exit.
                    None => break TurnEnd::Failed(RelayError::Cancelled),
                },
            }
        };

        match end {
            TurnEnd::Completed => {
                // History keeps the raw accumulator; the display value is
                // trimmed.
                self.history.push_assistant(snapshot.as_str());
                log::debug!(
                    "Turn complete ({} history entries)",
                    self.history.len()
                );
                self.publish(RelayEvent::TurnCompleted {
                    target_id,
                    content: snapshot.trim().to_string(),
                })
                .await;
            }
            TurnEnd::Failed(error) => {
                log::warn!("Turn {target_id} ended early: {error}");
                if error.keeps_partial() {
                    // Keep what the model actually said as context.
                    self.history.push_assistant(snapshot.as_str());
                }
                self.publish(RelayEvent::TurnFailed { target_id, error })
                    .await;
            }
        }
    }

    /// Handles one `data:` payload: grow the accumulator and republish
    /// the whole snapshot (overwrite, not a delta patch). Malformed
    /// payloads are skipped without aborting the stream.
    async fn apply_data(&self, payload: &str, snapshot: &mut String, target_id: &str) {
        match protocol::delta_content(payload) {
            Ok(delta) => {
                if let Some(delta) = delta {
                    snapshot.push_str(&delta);
                }
                self.publish(RelayEvent::Fragment {
                    target_id: target_id.to_string(),
                    snapshot: snapshot.trim().to_string(),
                })
                .await;
            }
            Err(err) => log::warn!("Skipping malformed stream chunk: {err}"),
        }
    }

    async fn publish(&self, event: RelayEvent) {
        if let Err(err) = self.event_sender.send(event).await {
            log::warn!("Failed to notify UI: {err}");
        }
    }

    #[cfg(test)]
    fn history(&self) -> &ChatHistory {
        &self.history
    }
}
