//! Top-level command tokens accepted at the main prompt.

use std::fmt;
use std::str::FromStr;

use super::error::GradebookError;

/// One of the five commands the session understands.
///
/// Matching is exact and case-sensitive after trimming surrounding
/// whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Add,
    List,
    Filter,
    Help,
    Exit,
}

impl Command {
    /// All commands in the order `help` prints them.
    pub const ALL: [Command; 5] = [
        Command::Add,
        Command::List,
        Command::Filter,
        Command::Help,
        Command::Exit,
    ];

    /// The token typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::List => "list",
            Command::Filter => "filter",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    /// One-line description shown by `help`.
    pub fn description(self) -> &'static str {
        match self {
            Command::Add => "Add a new student.",
            Command::List => "Show information about all students.",
            Command::Filter => "Filter students by average grade (below a given threshold).",
            Command::Help => "Show the list of available commands.",
            Command::Exit => "Exit the program.",
        }
    }
}

impl FromStr for Command {
    type Err = GradebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Command::ALL
            .into_iter()
            .find(|command| command.name() == token)
            .ok_or_else(|| GradebookError::UnknownCommand {
                input: token.to_string(),
            })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_every_command_name() {
        for command in Command::ALL {
            assert_eq!(command.name().parse::<Command>().unwrap(), command);
        }
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!("  list \t".parse::<Command>().unwrap(), Command::List);
    }

    #[test]
    fn test_is_case_sensitive() {
        let err = "ADD".parse::<Command>().unwrap_err();
        assert!(matches!(err, GradebookError::UnknownCommand { ref input } if input == "ADD"));
    }

    #[test]
    fn test_empty_input_is_unknown() {
        let err = "".parse::<Command>().unwrap_err();
        assert!(matches!(err, GradebookError::UnknownCommand { ref input } if input.is_empty()));
    }

    #[test]
    fn test_rejects_command_with_arguments() {
        assert!("add Ivanov".parse::<Command>().is_err());
    }
}
