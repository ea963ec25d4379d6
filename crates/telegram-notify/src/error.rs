//! Error types for the notification step.

use thiserror::Error;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, NotifyError>;

/// Everything that can go wrong between reading inputs and a confirmed delivery.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Required credential or destination missing; detected before any network activity.
    #[error("{0}")]
    Config(String),

    /// The HTTP exchange could not complete (connect, TLS, read).
    #[error("{0}")]
    Transport(String),

    /// Telegram answered but did not acknowledge; carries the raw response body.
    #[error("Telegram API Error: {0}")]
    Rejected(String),
}

impl NotifyError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}
