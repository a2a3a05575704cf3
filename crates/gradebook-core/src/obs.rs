//! Structured observability hooks for the gradebook session.
//!
//! This module provides:
//! - A session-scoped tracing span via the `SessionSpan` RAII guard
//! - Emission functions for key events: command dispatch, student added,
//!   duplicate rejected, grade token rejected, filter applied, session end
//!
//! Everything here logs through `tracing`; nothing is written to stdout.

use tracing::{debug, info, warn};

use crate::domain::{Command, GradebookError};

/// RAII guard that enters a session-scoped tracing span for the lifetime of
/// a command loop.
///
/// # Example
///
/// ```ignore
/// let _span = SessionSpan::enter();
/// // every event emitted until drop is nested under `gradebook.session`
/// ```
pub struct SessionSpan {
    _span: tracing::span::EnteredSpan,
}

impl SessionSpan {
    pub fn enter() -> Self {
        let span = tracing::info_span!("gradebook.session", pid = std::process::id());
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: a recognised command is about to run.
pub fn emit_command_dispatched(command: Command) {
    debug!(event = "command.dispatched", command = %command);
}

/// Emit event: input at the main prompt matched no command.
pub fn emit_command_unknown(input: &str) {
    debug!(event = "command.unknown", input = %input);
}

/// Emit event: a student record was stored.
pub fn emit_student_added(full_name: &str, grade_count: usize, average: f64) {
    info!(
        event = "student.added",
        full_name = %full_name,
        grade_count = grade_count,
        average = average,
    );
}

/// Emit event: `add` aborted because the name is taken.
pub fn emit_duplicate_rejected(full_name: &str) {
    info!(event = "student.duplicate_rejected", full_name = %full_name);
}

/// Emit event: a grade token was skipped.
pub fn emit_grade_rejected(error: &GradebookError) {
    debug!(event = "grade.rejected", error = %error);
}

/// Emit event: `add` was cancelled because input closed mid-flow.
pub fn emit_add_cancelled(full_name: Option<&str>) {
    warn!(event = "student.add_cancelled", full_name = ?full_name);
}

/// Emit event: filter evaluated with the number of matching students.
pub fn emit_filter_applied(threshold: f64, matched: usize, total: usize) {
    info!(
        event = "filter.applied",
        threshold = threshold,
        matched = matched,
        total = total,
    );
}

/// Emit event: the command loop ended. `reason` is `"exit"` or `"eof"`.
pub fn emit_session_finished(reason: &str, students: usize) {
    info!(event = "session.finished", reason = %reason, students = students);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_span_create() {
        // Just ensure SessionSpan::enter doesn't panic
        let _span = SessionSpan::enter();
    }
}
