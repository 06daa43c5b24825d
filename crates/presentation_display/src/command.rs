//! Interactive commands read from stdin

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Expected a note number, got: {0}")]
    InvalidNumber(String),

    #[error("Missing argument for `{0}`")]
    MissingArgument(&'static str),
}

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <text>`
    Add(String),
    /// `done <n>`: complete the nth active note
    Done(usize),
    /// `undo <n>`: reopen the nth completed note
    Undo(usize),
    /// `owner <id>`: switch whose notes are shown
    Owner(String),
    /// `quit`
    Quit,
}

fn number(arg: &str) -> Result<usize, CommandError> {
    arg.parse()
        .map_err(|_| CommandError::InvalidNumber(arg.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match verb.to_lowercase().as_str() {
            "add" => Ok(Self::Add(rest.to_string())),
            "done" if rest.is_empty() => Err(CommandError::MissingArgument("done")),
            "done" => number(rest).map(Self::Done),
            "undo" if rest.is_empty() => Err(CommandError::MissingArgument("undo")),
            "undo" => number(rest).map(Self::Undo),
            "owner" if rest.is_empty() => Err(CommandError::MissingArgument("owner")),
            "owner" => Ok(Self::Owner(rest.to_string())),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
