//! Domain-specific error types and error handling.

mod types;

pub use types::{provider_codes, ProviderError, TransportError, ValidationError};

use thiserror::Error;

/// Any failure of a send or verify operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl VerificationError {
    /// Stable category name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            VerificationError::Validation(_) => "validation_error",
            VerificationError::Provider(_) => "provider_error",
            VerificationError::Transport(_) => "transport_error",
        }
    }
}

pub type VerificationResult<T> = Result<T, VerificationError>;

/// Core domain errors for lead submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Repository error: {message}")]
    Repository { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
