pub mod form;
pub mod help;
pub mod lifecycle;
pub mod relay;
pub mod typewriter;

use form::Field;

/// Shown for any relay failure, whatever the cause.
pub static OFFLINE_MESSAGE: &str =
    "⚠️ System Offline: Backend connection failed. Please check the relay logs.";

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("idea must not be empty")]
    EmptyIdea,
    #[error("a request is already in flight")]
    InFlight,
    #[error("invalid {field}: {value}")]
    InvalidOption { field: Field, value: String },
}
