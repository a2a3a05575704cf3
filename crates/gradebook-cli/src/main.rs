//! Gradebook - interactive student grade journal
//!
//! The `gradebook` binary reads commands from stdin and keeps every student
//! in memory until it exits.
//!
//! ## Commands
//!
//! - `add`: Add a student and their grades
//! - `list`: Show all students with their averages
//! - `filter`: Show students whose average is below a threshold
//! - `help`: Show the command list
//! - `exit`: Leave the program

mod session;

use std::io;

use anyhow::Result;
use clap::Parser;
use gradebook_core::MemoryStudentStore;
use tracing::Level;

use session::Session;

#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive in-memory student gradebook", long_about = None)]
struct Cli {
    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    gradebook_core::init_tracing(cli.json, level);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(MemoryStudentStore::new(), stdin.lock(), stdout.lock());
    session.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults_to_quiet_text_logs() {
        let cli = Cli::parse_from(["gradebook"]);
        assert!(!cli.verbose);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_log_flags() {
        let cli = Cli::parse_from(["gradebook", "-v", "--json"]);
        assert!(cli.verbose);
        assert!(cli.json);
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["gradebook", "students.txt"]).is_err());
    }
}
