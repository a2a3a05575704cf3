//! Gradebook Core Library
//!
//! Command tokens, grade and threshold parsing, the domain error taxonomy,
//! and the tracing/metrics plumbing shared by the gradebook binary.

pub mod domain;
pub mod metrics;
pub mod obs;
pub mod telemetry;

pub use domain::{parse_threshold, Command, GradeCollector, GradebookError, LineOutcome, Result};

pub use gradebook_state::{Grade, MemoryStudentStore, StudentRecord, StudentStore};

pub use metrics::METRICS;
pub use obs::{
    emit_add_cancelled, emit_command_dispatched, emit_command_unknown, emit_duplicate_rejected,
    emit_filter_applied, emit_grade_rejected, emit_session_finished, emit_student_added,
    SessionSpan,
};
pub use telemetry::init_tracing;
