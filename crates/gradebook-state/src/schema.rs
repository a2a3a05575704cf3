//! Record definitions for the gradebook store
//!
//! - `Grade`: validated integer grade
//! - `StudentRecord`: one row of the journal

use std::fmt;

use crate::error::StorageError;

/// A single grade in the closed range [`Grade::MIN`, `Grade::MAX`].
///
/// The inner field is private so a `Grade` can only be obtained through
/// `TryFrom<i64>`, which enforces the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grade(u8);

impl Grade {
    /// Lowest accepted grade
    pub const MIN: u8 = 1;
    /// Highest accepted grade
    pub const MAX: u8 = 5;

    /// Numeric value of the grade.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Grade {
    type Error = StorageError;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(StorageError::GradeOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        // Range checked above, the cast cannot truncate.
        Ok(Grade(value as u8))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arithmetic mean of `grades`, or 0.0 for an empty slice.
pub fn average(grades: &[Grade]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    let sum: u64 = grades.iter().map(|g| u64::from(g.value())).sum();
    sum as f64 / grades.len() as f64
}

/// A student entry in the journal.
///
/// The average is computed once in [`StudentRecord::new`] from the final grade
/// sequence; fields are private so the two can never drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    full_name: String,
    grades: Vec<Grade>,
    average: f64,
}

impl StudentRecord {
    /// Build a record and compute its average.
    pub fn new(full_name: impl Into<String>, grades: Vec<Grade>) -> Self {
        let average = average(&grades);
        Self {
            full_name: full_name.into(),
            grades,
            average,
        }
    }

    /// Full name, the store key.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Grades in the order they were entered.
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn average(&self) -> f64 {
        self.average
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grades(values: &[i64]) -> Vec<Grade> {
        values
            .iter()
            .map(|v| Grade::try_from(*v).unwrap())
            .collect()
    }

    #[test]
    fn test_grade_accepts_bounds() {
        assert_eq!(Grade::try_from(1).unwrap().value(), 1);
        assert_eq!(Grade::try_from(5).unwrap().value(), 5);
    }

    #[test]
    fn test_grade_rejects_outside_range() {
        for value in [0, 6, -1, 9, i64::MAX, i64::MIN] {
            let err = Grade::try_from(value).unwrap_err();
            assert_eq!(
                err,
                StorageError::GradeOutOfRange {
                    value,
                    min: 1,
                    max: 5
                }
            );
        }
    }

    #[test]
    fn test_average_empty_is_zero() {
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn test_average_is_real_division() {
        assert_eq!(average(&grades(&[5, 4, 3])), 4.0);
        assert_eq!(average(&grades(&[5, 4])), 4.5);
        assert!((average(&grades(&[1, 2, 2])) - 5.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_record_computes_average_on_construction() {
        let record = StudentRecord::new("Ivanov Ivan", grades(&[5, 4, 3]));
        assert_eq!(record.full_name(), "Ivanov Ivan");
        assert_eq!(record.grades(), grades(&[5, 4, 3]).as_slice());
        assert_eq!(record.average(), 4.0);
    }

    #[test]
    fn test_record_without_grades_has_zero_average() {
        let record = StudentRecord::new("Nobody", Vec::new());
        assert!(record.grades().is_empty());
        assert_eq!(record.average(), 0.0);
    }
}
