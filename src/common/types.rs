use serde::{Deserialize, Serialize};

/// Who authored a message. Doubles as the wire role sent to the
/// completion endpoint, hence the lowercase serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Lifecycle of a displayed bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    /// Assistant placeholder still receiving fragments.
    Streaming,
    Complete,
    /// Stream ended early (network error or cancel); partial text kept.
    Interrupted,
    /// Request never produced output; content holds the error text.
    Failed,
}

/// Domain model for one chat bubble.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: i64,
    pub status: MessageStatus,
}

impl ChatMessage {
    pub fn user(id: String, content: String) -> Self {
        Self {
            id,
            role: Role::User,
            content,
            timestamp: chrono::Utc::now().timestamp(),
            status: MessageStatus::Complete,
        }
    }

    /// Empty assistant bubble that the relay fills fragment by fragment.
    pub fn assistant_placeholder(id: String) -> Self {
        Self {
            id,
            role: Role::Assistant,
            content: String::new(),
            timestamp: chrono::Utc::now().timestamp(),
            status: MessageStatus::Streaming,
        }
    }
}
