use crate::common::Role;

use super::protocol::ApiMessage;

/// Conversation store: every completed turn half in arrival order, sent
/// verbatim as context on each request. Append-only and deliberately
/// unbounded; nothing is truncated, reordered, or deduplicated.
#[derive(Debug, Default)]
pub struct ChatHistory {
    entries: Vec<ApiMessage>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Role::User, content);
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Role::Assistant, content);
    }

    fn push(&mut self, role: Role, content: impl Into<String>) {
        self.entries.push(ApiMessage {
            role,
            content: content.into(),
        });
    }

    pub fn entries(&self) -> &[ApiMessage] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
