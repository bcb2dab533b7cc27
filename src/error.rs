//! Error types for the ETo engine
//!
//! Two failure kinds exist: a field that is missing or not numeric, and a
//! numeric field outside its physically valid domain. Both fail the whole
//! calculation; there is no partial result.

use thiserror::Error;

/// Input validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or not a finite number
    #[error("{0}")]
    TypeMismatch(String),

    /// A numeric field is outside its physically valid domain
    #[error("{0}")]
    RangeViolation(String),
}

/// Top-level calculation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EtoError {
    #[error("ETo calculation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type alias for the calculation entry points
pub type EtoCalcResult<T> = Result<T, EtoError>;
