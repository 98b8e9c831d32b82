use crate::relay::RelayError;

/// Events the stream relay publishes up to the UI.
#[derive(Debug, Clone)]
pub enum RelayEvent {
    /// A fragment arrived; `snapshot` is the full accumulated reply so
    /// far (trimmed), not a delta. The UI overwrites the bubble with it.
    Fragment { target_id: String, snapshot: String },
    /// The stream ended normally; `content` is the final trimmed reply.
    TurnCompleted { target_id: String, content: String },
    /// The turn ended without completing; see `RelayError` for how far
    /// it got.
    TurnFailed { target_id: String, error: RelayError },
}
