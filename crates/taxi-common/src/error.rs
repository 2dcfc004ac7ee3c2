//! Error types for the shared domain primitives

use thiserror::Error;

/// Value object construction error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Email address missing
    #[error("email cannot be empty")]
    EmptyEmail,

    /// Email address does not have a `local@domain.tld` shape
    #[error("invalid email format: {0}")]
    InvalidEmail(String),

    /// Phone number missing
    #[error("phone number cannot be empty")]
    EmptyPhone,

    /// Too few digits once formatting characters are stripped
    #[error("phone number needs at least {min} digits, got {actual}")]
    PhoneTooShort {
        /// Required digit count
        min: usize,
        /// Digits found
        actual: usize,
    },
}

/// Result type for domain primitives
pub type DomainResult<T> = Result<T, DomainError>;
