use thiserror::Error;

/// Why a turn ended without completing. Variants carry rendered strings
/// rather than source errors so relay events stay `Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// The request never reached the streaming phase.
    #[error("failed to reach completion endpoint: {0}")]
    Connect(String),
    /// The endpoint answered, but not with a stream.
    #[error("completion endpoint returned status {0}")]
    Status(u16),
    /// The body stream broke mid-reply.
    #[error("stream interrupted: {0}")]
    Interrupted(String),
    #[error("turn cancelled")]
    Cancelled,
}

impl RelayError {
    /// Whether fragments received before the failure are worth keeping
    /// (partial reply vs. no reply at all).
    pub fn keeps_partial(&self) -> bool {
        matches!(self, RelayError::Interrupted(_) | RelayError::Cancelled)
    }
}
