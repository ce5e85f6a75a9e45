//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Every
/// workflow operation validates before it mutates, so a returned error
/// implies no state change was made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required input was missing or malformed (e.g. no owner resolved,
    /// empty tool selection, missing mandatory photo).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced report or tool record does not exist.
    #[error("not found")]
    NotFound,

    /// The operation is not legal in the entity's current state (e.g.
    /// deciding an already-decided report).
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Internal fault (lock poisoning). Not a business failure.
    #[error("internal fault: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
