pub mod backend;
pub mod client;
pub mod error;
pub mod history;
pub mod protocol;
pub mod sse;

pub use backend::HttpBackend;
pub use client::StreamRelay;
pub use error::RelayError;
