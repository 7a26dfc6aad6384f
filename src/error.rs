//! Error types for Rollbook
//!
//! Provides a unified error type for all Manager and Store operations.

use thiserror::Error;

use crate::record::StudentId;

/// Result type alias using RollbookError
pub type Result<T> = std::result::Result<T, RollbookError>;

/// Unified error type for Rollbook operations
///
/// Every variant is recoverable: the failed operation has no effect on the
/// store and the caller may carry on.
#[derive(Debug, Error)]
pub enum RollbookError {
    // -------------------------------------------------------------------------
    // Caller Input Errors
    // -------------------------------------------------------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Student with id {0} already exists")]
    DuplicateId(StudentId),

    #[error("Student with id {0} not found")]
    NotFound(StudentId),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RollbookError {
    /// Build a validation error from any message
    pub fn validation(message: impl Into<String>) -> Self {
        RollbookError::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, RollbookError::Validation(_))
    }

    pub fn is_duplicate_id(&self) -> bool {
        matches!(self, RollbookError::DuplicateId(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RollbookError::NotFound(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, RollbookError::Io(_))
    }
}
