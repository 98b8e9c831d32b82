use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::common::{ChatMessage, MessageStatus, RelayCommand, RelayEvent};

/// Local UI state: displayed bubbles plus input bookkeeping.
pub struct AppState {
    pub messages: Vec<ChatMessage>,
    pub input_text: String,
    /// "Assistant is typing" flag: set on send, cleared on the first
    /// fragment and on every terminal event.
    pub typing: bool,
    pub turns_completed: usize,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            input_text: String::new(),
            typing: false,
            turns_completed: 0,
            started_at: Utc::now(),
        }
    }

    /// Starts one turn: appends the user bubble and an empty assistant
    /// placeholder and returns the command for the relay. Whitespace-only
    /// input produces no message and no command.
    pub fn begin_turn(&mut self, raw_input: &str) -> Option<RelayCommand> {
        let prompt = raw_input.trim();
        if prompt.is_empty() {
            return None;
        }

        self.messages
            .push(ChatMessage::user(Uuid::new_v4().to_string(), prompt.to_string()));

        let target_id = Uuid::new_v4().to_string();
        self.messages
            .push(ChatMessage::assistant_placeholder(target_id.clone()));
        self.typing = true;

        Some(RelayCommand::SendTurn {
            prompt: prompt.to_string(),
            target_id,
        })
    }

    pub fn apply_relay_event(&mut self, event: RelayEvent) {
        match event {
            RelayEvent::Fragment { target_id, snapshot } => {
                self.typing = false;
                self.overwrite(&target_id, snapshot, MessageStatus::Streaming);
            }
            RelayEvent::TurnCompleted { target_id, content } => {
                self.typing = false;
                self.turns_completed += 1;
                self.overwrite(&target_id, content, MessageStatus::Complete);
            }
            RelayEvent::TurnFailed { target_id, error } => {
                self.typing = false;
                if error.keeps_partial() {
                    self.set_status(&target_id, MessageStatus::Interrupted);
                } else {
                    self.overwrite(&target_id, error.to_string(), MessageStatus::Failed);
                }
            }
        }
    }

    fn overwrite(&mut self, id: &str, content: String, status: MessageStatus) {
        match self.find_mut(id) {
            Some(message) => {
                message.content = content;
                message.status = status;
            }
            None => log::warn!("No bubble {id} to update"),
        }
    }

    fn set_status(&mut self, id: &str, status: MessageStatus) {
        match self.find_mut(id) {
            Some(message) => message.status = status,
            None => log::warn!("No bubble {id} to update"),
        }
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut ChatMessage> {
        self.messages.iter_mut().find(|message| message.id == id)
    }
}
