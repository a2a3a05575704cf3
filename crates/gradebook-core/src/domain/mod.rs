//! Domain model for the gradebook session.
//!
//! - `Command`: the five tokens accepted at the main prompt
//! - `GradeCollector`: grade entry state machine used by `add`
//! - `GradebookError`: user-facing error taxonomy

pub mod command;
pub mod error;
pub mod grades;

// Re-export main types and errors
pub use command::Command;
pub use error::{GradebookError, Result};
pub use grades::{parse_grade, parse_threshold, GradeCollector, LineOutcome};
