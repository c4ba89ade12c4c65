//! Error types for AmogBook Core
//!
//! Two failure families exist:
//! - [`ValidationError`]: a required field is missing or a value is unusable
//! - [`NotFoundError`]: an operation referenced something the store does not hold
//!
//! Every store operation is all-or-nothing: when one of these is returned,
//! nothing was mutated.

use crate::case::CaseId;

/// Main notebook error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NotebookError {
    /// Input was rejected before any mutation
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Referenced item is absent
    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),
}

impl NotebookError {
    /// Check if error is a validation failure
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if error is a missing-item failure
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Rejected input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Case location was empty
    #[error("location is required")]
    MissingLocation,

    /// Case victim was unset while victims are required
    #[error("victim is required")]
    MissingVictim,

    /// Log entry text was empty
    #[error("log entry text is empty")]
    EmptyLogEntry,

    /// Suspicion score was NaN
    #[error("suspicion score is not a number")]
    ScoreNotANumber,

    /// Entity name is not part of the active palette
    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    /// Color literal could not be parsed
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Key binding literal could not be parsed
    #[error("invalid key binding: {0}")]
    InvalidKeyBinding(String),
}

/// Reference to an absent item
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    /// No case with this id
    #[error("case {0}")]
    Case(CaseId),

    /// No suspicion entry for this entity
    #[error("suspicion entry for {0}")]
    Suspicion(String),

    /// Slot index past the end of the suspect list
    #[error("suspect slot {index} (have {len})")]
    Slot {
        /// Requested index
        index: usize,
        /// Number of slots present
        len: usize,
    },
}

/// Result alias used throughout the crate
pub type Result<T, E = NotebookError> = std::result::Result<T, E>;
