//! Global atomic counters for gradebook observability.
//!
//! Counters are incremented silently at the call site. Call
//! [`Metrics::flush`] to emit current values as a single
//! `tracing::info!` event (the session does this when it ends).

use std::sync::atomic::{AtomicU64, Ordering};

/// Global metrics singleton.
pub static METRICS: Metrics = Metrics::new();

/// Lightweight atomic counters, no allocations and no locking.
pub struct Metrics {
    commands_processed: AtomicU64,
    students_added: AtomicU64,
    duplicates_rejected: AtomicU64,
    grades_rejected: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub const fn new() -> Self {
        Self {
            commands_processed: AtomicU64::new(0),
            students_added: AtomicU64::new(0),
            duplicates_rejected: AtomicU64::new(0),
            grades_rejected: AtomicU64::new(0),
        }
    }

    /// Count one line read at the main prompt, recognised or not.
    pub fn inc_commands(&self) {
        self.commands_processed.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "commands_processed", "counter incremented");
    }

    pub fn inc_students_added(&self) {
        self.students_added.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "students_added", "counter incremented");
    }

    pub fn inc_duplicates_rejected(&self) {
        self.duplicates_rejected.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "duplicates_rejected", "counter incremented");
    }

    /// Count one skipped grade token (non-numeric or out of range).
    pub fn inc_grades_rejected(&self) {
        self.grades_rejected.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "grades_rejected", "counter incremented");
    }

    /// Emit all current counter values as a single `info!` event.
    pub fn flush(&self) {
        tracing::info!(
            metric = "flush",
            commands_processed = self.commands_processed(),
            students_added = self.students_added(),
            duplicates_rejected = self.duplicates_rejected(),
            grades_rejected = self.grades_rejected(),
        );
    }

    pub fn commands_processed(&self) -> u64 {
        self.commands_processed.load(Ordering::Relaxed)
    }

    pub fn students_added(&self) -> u64 {
        self.students_added.load(Ordering::Relaxed)
    }

    pub fn duplicates_rejected(&self) -> u64 {
        self.duplicates_rejected.load(Ordering::Relaxed)
    }

    pub fn grades_rejected(&self) -> u64 {
        self.grades_rejected.load(Ordering::Relaxed)
    }
}
