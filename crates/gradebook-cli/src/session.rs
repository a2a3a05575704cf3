//! Interactive command loop.
//!
//! A `Session` owns the student store together with the input and output
//! handles, so the whole dialogue can be driven from any `BufRead`/`Write`
//! pair. The binary wires it to stdin/stdout; tests use in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use gradebook_core::{
    emit_add_cancelled, emit_command_dispatched, emit_command_unknown, emit_duplicate_rejected,
    emit_filter_applied, emit_grade_rejected, emit_session_finished, emit_student_added,
    parse_threshold, Command, GradeCollector, GradebookError, LineOutcome, SessionSpan,
    StudentRecord, StudentStore, METRICS,
};
use tracing::debug;

const WELCOME: &str = "Welcome to the gradebook!";
const COMMAND_PROMPT: &str = "\nEnter a command (help - list all commands): ";
const NAME_PROMPT: &str = "Enter the student's last and first name: ";
const GRADES_INSTRUCTIONS: &str =
    "Enter the student's grades separated by spaces. Press Enter on an empty line to finish.";
const GRADE_PROMPT: &str = "> ";
const THRESHOLD_PROMPT: &str = "Enter the maximum average grade: ";
const FAREWELL: &str = "Exiting the program. Goodbye!";

/// Whether the main loop keeps reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One run of the interactive gradebook.
pub struct Session<S, R, W> {
    store: S,
    input: R,
    output: W,
}

impl<S, R, W> Session<S, R, W>
where
    S: StudentStore,
    R: BufRead,
    W: Write,
{
    pub fn new(store: S, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Tear the session down, returning the store and the output handle.
    pub fn into_parts(self) -> (S, W) {
        (self.store, self.output)
    }

    /// Run the command loop until `exit` or end of input.
    ///
    /// Only I/O failures on the input or output handle are returned as
    /// errors; every user mistake is reported inline and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        let _span = SessionSpan::enter();
        writeln!(self.output, "{WELCOME}")?;

        loop {
            self.prompt(COMMAND_PROMPT)?;
            let Some(line) = self.read_line()? else {
                // Closed input is an implicit `exit`.
                writeln!(self.output)?;
                return self.finish("eof");
            };
            METRICS.inc_commands();

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    emit_command_unknown(&line);
                    self.report(&err)?;
                    continue;
                }
            };
            emit_command_dispatched(command);
            if self.dispatch(command)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Execute a single command.
    pub fn dispatch(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Add => self.cmd_add()?,
            Command::List => self.cmd_list()?,
            Command::Filter => self.cmd_filter()?,
            Command::Help => self.cmd_help()?,
            Command::Exit => {
                self.finish("exit")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Add a new student: read a name, then grade lines until an empty one.
    fn cmd_add(&mut self) -> Result<()> {
        self.prompt(NAME_PROMPT)?;
        let Some(full_name) = self.read_line()? else {
            emit_add_cancelled(None);
            return Ok(());
        };

        if self.store.contains(&full_name) {
            METRICS.inc_duplicates_rejected();
            emit_duplicate_rejected(&full_name);
            return self.report(&GradebookError::DuplicateName { name: full_name });
        }

        writeln!(self.output, "{GRADES_INSTRUCTIONS}")?;
        let mut collector = GradeCollector::new();
        loop {
            self.prompt(GRADE_PROMPT)?;
            let Some(line) = self.read_line()? else {
                emit_add_cancelled(Some(&full_name));
                return Ok(());
            };
            match collector.feed(&line) {
                LineOutcome::Finished => break,
                LineOutcome::Continue(rejected) => {
                    for err in rejected {
                        if !matches!(err, GradebookError::EmptyGradeSubmission) {
                            METRICS.inc_grades_rejected();
                            emit_grade_rejected(&err);
                        }
                        self.report(&err)?;
                    }
                }
            }
        }

        // Availability was checked before grade entry; a conflict here is
        // still reported rather than dropped.
        match self.store.insert(&full_name, collector.finish()) {
            Ok(record) => {
                METRICS.inc_students_added();
                emit_student_added(record.full_name(), record.grades().len(), record.average());
                writeln!(self.output, "Student {} added successfully!", record.full_name())?;
                Ok(())
            }
            Err(err) => self.report(&GradebookError::from(err)),
        }
    }

    fn cmd_list(&mut self) -> Result<()> {
        let mut students = self.store.all();
        if students.is_empty() {
            writeln!(self.output, "There are no students in the gradebook yet.")?;
            return Ok(());
        }

        sort_by_name(&mut students);
        writeln!(self.output, "All students:")?;
        self.write_students(&students)
    }

    /// List students whose average is strictly below a threshold.
    fn cmd_filter(&mut self) -> Result<()> {
        self.prompt(THRESHOLD_PROMPT)?;
        let Some(input) = self.read_line()? else {
            return Ok(());
        };
        let threshold = match parse_threshold(&input) {
            Ok(threshold) => threshold,
            Err(err) => return self.report(&err),
        };

        let mut matched = self.store.filter_below(threshold);
        emit_filter_applied(threshold, matched.len(), self.store.len());
        if matched.is_empty() {
            writeln!(self.output, "No students have an average below {threshold:.2}.")?;
            return Ok(());
        }

        sort_by_name(&mut matched);
        writeln!(self.output, "Students with an average below {threshold:.2}:")?;
        self.write_students(&matched)
    }

    fn cmd_help(&mut self) -> Result<()> {
        writeln!(self.output, "Available commands:")?;
        for command in Command::ALL {
            writeln!(
                self.output,
                "  {:<6} - {}",
                command.name(),
                command.description()
            )?;
        }
        Ok(())
    }

    fn finish(&mut self, reason: &str) -> Result<()> {
        writeln!(self.output, "{FAREWELL}")?;
        self.output.flush().context("failed to flush output")?;
        METRICS.flush();
        emit_session_finished(reason, self.store.len());
        Ok(())
    }

    fn write_students(&mut self, students: &[StudentRecord]) -> Result<()> {
        for student in students {
            writeln!(self.output, "{}", format_student(student))?;
        }
        Ok(())
    }

    fn report(&mut self, err: &GradebookError) -> Result<()> {
        writeln!(self.output, "{err}")?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush().context("failed to flush output")
    }

    /// Read one line with surrounding whitespace removed.
    /// Returns `None` once the input is exhausted.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// failing the read, so a mistyped line never ends the session.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut bytes)
            .context("failed to read from input")?;
        if read == 0 {
            debug!("input closed");
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&bytes).trim().to_string()))
    }
}

/// One student as printed by `list` and `filter`.
pub fn format_student(student: &StudentRecord) -> String {
    let grades = student
        .grades()
        .iter()
        .map(|grade| grade.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "  Name: {}, Grades: [{}], Average: {:.2}",
        student.full_name(),
        grades,
        student.average()
    )
}

fn sort_by_name(students: &mut [StudentRecord]) {
    students.sort_by(|a, b| a.full_name().cmp(b.full_name()));
}
