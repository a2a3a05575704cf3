//! In-memory student store
//!
//! `MemoryStudentStore` keeps every record in a `HashMap` keyed by full name.
//! It is the only backend: the gradebook never persists anything.

use std::collections::HashMap;

use tracing::debug;

use crate::error::StorageError;
use crate::schema::{Grade, StudentRecord};
use crate::storage_traits::{StorageResult, StudentStore};

/// In-memory student store backed by a `HashMap<full_name, StudentRecord>`.
#[derive(Debug, Default)]
pub struct MemoryStudentStore {
    students: HashMap<String, StudentRecord>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StudentStore for MemoryStudentStore {
    fn insert(&mut self, full_name: &str, grades: Vec<Grade>) -> StorageResult<StudentRecord> {
        if self.students.contains_key(full_name) {
            return Err(StorageError::AlreadyExists {
                name: full_name.to_string(),
            });
        }
        let record = StudentRecord::new(full_name, grades);
        debug!(
            full_name = %record.full_name(),
            grades = record.grades().len(),
            average = record.average(),
            "student stored"
        );
        self.students.insert(full_name.to_string(), record.clone());
        Ok(record)
    }

    fn contains(&self, full_name: &str) -> bool {
        self.students.contains_key(full_name)
    }

    fn get(&self, full_name: &str) -> Option<StudentRecord> {
        self.students.get(full_name).cloned()
    }

    fn all(&self) -> Vec<StudentRecord> {
        self.students.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.students.len()
    }
}
