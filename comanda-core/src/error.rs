//! Error types for the customization core

use crate::catalog::SelectionMode;
use thiserror::Error;

/// Engine error - the caller addressed a group or option that does not
/// exist, or used the wrong operation for a group's selection mode.
///
/// Capacity overflow on a multiple-selection group is NOT an error: the
/// engine silently ignores the add (see `SelectionSession::toggle_multiple`).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Group id not present in the session catalog
    #[error("combination group not found: {0}")]
    UnknownGroup(String),

    /// Option id not present in the group
    #[error("option {option} not found in group {group}")]
    UnknownOption { group: String, option: String },

    /// Operation does not match the group's selection mode
    #[error("group {group} uses {actual} selection, operation requires {expected}")]
    ModeMismatch {
        group: String,
        expected: SelectionMode,
        actual: SelectionMode,
    },
}

/// Result type for engine operations
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Validation failure blocking order submission
///
/// All variants are recoverable: the user completes or trims the
/// selection and submits again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required group has fewer selections than its minimum
    #[error("{group}: select at least {required}")]
    MissingRequired { group: String, required: u32 },

    /// A group holds more selections than its effective maximum
    #[error("{group}: at most {max} selections allowed, found {selected}")]
    TooManySelected {
        group: String,
        selected: u32,
        max: u32,
    },

    /// A submission payload field failed basic checks
    #[error("{field} {message}")]
    InvalidField { field: String, message: String },
}
