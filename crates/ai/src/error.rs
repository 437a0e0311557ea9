use thiserror::Error;

/// Failure of an AI capability call.
///
/// `Backend` and `Timeout` are transport/auth/protocol failures and may be
/// transient; nothing in this crate retries them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AiError {
    #[error("invalid AI input: {0}")]
    InvalidInput(String),

    #[error("AI backend failure: {0}")]
    Backend(String),

    #[error("AI backend call timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

impl AiError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
