//! Storage trait definition for the gradebook
//!
//! `StudentStore` is the single storage abstraction: a mapping from a
//! student's full name to their `StudentRecord`. It is synchronous and owned
//! by exactly one session, so mutation goes through `&mut self`.

use crate::error::StorageError;
use crate::schema::{Grade, StudentRecord};

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Student record store.
///
/// Guarantees:
/// - Full names are unique; a rejected insert leaves the store unchanged.
/// - A stored record's average always matches its grades.
/// - `all` and `filter_below` return records in no particular order.
pub trait StudentStore {
    /// Store a new student, computing their average.
    /// Returns `StorageError::AlreadyExists` if `full_name` is taken.
    fn insert(&mut self, full_name: &str, grades: Vec<Grade>) -> StorageResult<StudentRecord>;

    /// Check whether a student with this full name exists.
    fn contains(&self, full_name: &str) -> bool;

    /// Look up a student by full name.
    fn get(&self, full_name: &str) -> Option<StudentRecord>;

    /// Every stored student.
    fn all(&self) -> Vec<StudentRecord>;

    /// Number of stored students.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Students whose average is strictly below `threshold`.
    fn filter_below(&self, threshold: f64) -> Vec<StudentRecord> {
        self.all()
            .into_iter()
            .filter(|student| student.average() < threshold)
            .collect()
    }
}
