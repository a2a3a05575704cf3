//! Domain-level error taxonomy for the gradebook.
//!
//! Every variant except `Io` is reported to the user through its `Display`
//! text and the session carries on. `Io` means reading stdin or writing
//! stdout failed.

use gradebook_state::StorageError;

/// Gradebook domain errors.
#[derive(Debug, thiserror::Error)]
pub enum GradebookError {
    #[error("A student named '{name}' already exists.")]
    DuplicateName { name: String },

    #[error("Invalid grade '{token}'. Please enter whole numbers only.")]
    InvalidGradeToken { token: String },

    #[error("Grade {value} is outside the allowed range (1-5).")]
    GradeOutOfRange { value: i64 },

    #[error("No grades were entered. Enter at least one grade before finishing.")]
    EmptyGradeSubmission,

    #[error("Invalid average grade '{input}'. Please enter a number.")]
    InvalidThreshold { input: String },

    #[error("Unknown command '{input}'. Type 'help' to see the list of commands.")]
    UnknownCommand { input: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for GradebookError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::AlreadyExists { name } => GradebookError::DuplicateName { name },
            StorageError::GradeOutOfRange { value, .. } => GradebookError::GradeOutOfRange { value },
        }
    }
}

/// Result type for gradebook domain operations.
pub type Result<T> = std::result::Result<T, GradebookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_out_of_range_mentions_bounds() {
        let err = GradebookError::GradeOutOfRange { value: 9 };
        assert_eq!(err.to_string(), "Grade 9 is outside the allowed range (1-5).");
    }

    #[test]
    fn test_storage_error_maps_to_domain() {
        let err: GradebookError = StorageError::AlreadyExists {
            name: "Petrov Petr".to_string(),
        }
        .into();
        assert!(matches!(err, GradebookError::DuplicateName { ref name } if name == "Petrov Petr"));

        let err: GradebookError = StorageError::GradeOutOfRange {
            value: 0,
            min: 1,
            max: 5,
        }
        .into();
        assert!(matches!(err, GradebookError::GradeOutOfRange { value: 0 }));
    }

    #[test]
    fn test_messages_echo_user_input() {
        let err = GradebookError::InvalidGradeToken {
            token: "x".to_string(),
        };
        assert!(err.to_string().contains("'x'"));

        let err = GradebookError::InvalidThreshold {
            input: "abc".to_string(),
        };
        assert!(err.to_string().contains("'abc'"));
    }
}
