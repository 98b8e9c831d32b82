pub mod commands;
pub mod events;
pub mod types;

pub use commands::RelayCommand;
pub use events::RelayEvent;
pub use types::{ChatMessage, MessageStatus, Role};
