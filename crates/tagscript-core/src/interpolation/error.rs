//! Placeholder handler errors

use thiserror::Error;

/// Failure reported by a placeholder handler
///
/// The interpreter never propagates these; a failed placeholder renders as
/// an empty string and rendering continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// A required argument was not supplied
    #[error("missing argument {index}")]
    MissingArgument {
        /// Zero-based argument position
        index: usize,
    },

    /// An argument could not be interpreted
    #[error("invalid argument {index}: {reason}")]
    InvalidArgument { index: usize, reason: String },

    /// The render result holds an extra the handler cannot work with
    #[error("unexpected extra: {reason}")]
    UnexpectedExtra { reason: String },

    /// Handler-specific failure
    #[error("{0}")]
    Failed(String),

    /// The handler panicked while running
    #[error("handler panicked")]
    Panicked,
}

impl HandlerError {
    pub fn failed(message: impl Into<String>) -> Self {
        HandlerError::Failed(message.into())
    }
}
