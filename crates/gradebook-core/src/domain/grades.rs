//! Parsing of grade lines and filter thresholds.
//!
//! Grade entry is a small state machine: each input line is trimmed, split on
//! whitespace, and every token is parsed and range-checked on its own. A bad
//! token is reported and skipped without discarding the rest of the line.
//! An empty line finishes entry once at least one grade has been accepted.

use gradebook_state::Grade;

use super::error::{GradebookError, Result};

/// Parse a single whitespace-free token into a `Grade`.
pub fn parse_grade(token: &str) -> Result<Grade> {
    let value: i64 = token
        .parse()
        .map_err(|_| GradebookError::InvalidGradeToken {
            token: token.to_string(),
        })?;
    Ok(Grade::try_from(value)?)
}

/// Parse a filter threshold. Surrounding whitespace is ignored.
pub fn parse_threshold(input: &str) -> Result<f64> {
    let input = input.trim();
    input
        .parse::<f64>()
        .map_err(|_| GradebookError::InvalidThreshold {
            input: input.to_string(),
        })
}

/// What happened to one line fed into a [`GradeCollector`].
#[derive(Debug)]
pub enum LineOutcome {
    /// Empty line after at least one accepted grade; entry is over.
    Finished,
    /// Keep prompting. Holds one error per rejected token, or a single
    /// `EmptyGradeSubmission` when an empty line arrived too early.
    Continue(Vec<GradebookError>),
}

/// Accumulates grades across the lines of one `add` flow.
#[derive(Debug, Default)]
pub struct GradeCollector {
    grades: Vec<Grade>,
}

impl GradeCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw input line.
    pub fn feed(&mut self, line: &str) -> LineOutcome {
        let line = line.trim();
        if line.is_empty() {
            if self.grades.is_empty() {
                return LineOutcome::Continue(vec![GradebookError::EmptyGradeSubmission]);
            }
            return LineOutcome::Finished;
        }

        let mut rejected = Vec::new();
        for token in line.split_whitespace() {
            match parse_grade(token) {
                Ok(grade) => self.grades.push(grade),
                Err(err) => rejected.push(err),
            }
        }
        LineOutcome::Continue(rejected)
    }

    /// Grades accepted so far, in entry order.
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    pub fn finish(self) -> Vec<Grade> {
        self.grades
    }
}
