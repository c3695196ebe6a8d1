use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimspadError>;

/// Opaque failure reported by a [`crate::Transport`] implementation.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SimspadError {
    #[error("channel length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("malformed reply: {0}")]
    MalformedReply(String),

    #[error("truncated file: {0}")]
    TruncatedFile(String),

    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    #[error("{kind} model needs {expected} fields, got {got}")]
    FieldCount {
        kind: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{model}-channel model cannot take a {stimulus}-channel stimulus")]
    ChannelMismatch { model: usize, stimulus: usize },

    #[error("file format error: {0}")]
    Format(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
