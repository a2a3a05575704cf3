//! Error types for gradebook-state

use thiserror::Error;

/// Errors that can occur in the record store layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A student with this full name is already stored
    #[error("Student already exists: {name}")]
    AlreadyExists { name: String },

    /// Grade value outside the accepted range
    #[error("Grade out of range: {value} (expected {min}-{max})")]
    GradeOutOfRange { value: i64, min: u8, max: u8 },
}
