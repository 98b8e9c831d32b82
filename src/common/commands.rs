/// Commands the UI sends down to the stream relay.
#[derive(Debug, Clone)]
pub enum RelayCommand {
    /// Run one completion turn: send `prompt` (with the full history as
    /// context) and stream the reply into the bubble `target_id`.
    SendTurn { prompt: String, target_id: String },
    /// Abort the in-flight turn for `target_id`; partial text is kept.
    CancelTurn { target_id: String },
}
