//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing callers to use String or anyhow.

use thiserror::Error;

use crate::value_objects::{InvalidFaceCount, LadderError, StepError};

/// Unified error type for domain operations
#[derive(Debug, Error, Clone)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when domain invariants or constraints are violated:
    /// - Values are outside allowed ranges
    /// - Configuration data is malformed
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_state_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }
}

impl From<InvalidFaceCount> for DomainError {
    fn from(err: InvalidFaceCount) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<LadderError> for DomainError {
    fn from(err: LadderError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<StepError> for DomainError {
    fn from(err: StepError) -> Self {
        Self::InvalidStateTransition(err.to_string())
    }
}
