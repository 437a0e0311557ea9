use thiserror::Error;

use proptech_ai::AiError;
use proptech_core::DomainError;

/// Error taxonomy surfaced to callers of the manager and agent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Blank or malformed required input (caller's fault, not retryable as-is).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced id does not resolve in the domain store.
    #[error("not found: {0}")]
    NotFound(String),

    /// AI backend transport/auth/protocol failure; possibly transient.
    #[error("AI backend error: {0}")]
    Backend(String),
}

impl ServiceError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<DomainError> for ServiceError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => ServiceError::Validation(msg),
            DomainError::InvariantViolation(msg) => ServiceError::Validation(msg),
            DomainError::NotFound(msg) => ServiceError::NotFound(msg),
        }
    }
}

impl From<AiError> for ServiceError {
    fn from(value: AiError) -> Self {
        match value {
            AiError::InvalidInput(msg) => ServiceError::Validation(msg),
            AiError::Backend(msg) => ServiceError::Backend(msg),
            err @ AiError::Timeout { .. } => ServiceError::Backend(err.to_string()),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
