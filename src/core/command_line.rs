//! Command Line
//!
//! A directive line inside a script: a command name followed by arguments.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parser::{self, ParseError};

/// A tokenized command line such as `Set, Player.Speed, 100`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandLine {
    command: String,
    arguments: Vec<String>,
    original_text: String,
    argument_separator: String,
}

impl CommandLine {
    pub(crate) fn new(
        command: String,
        arguments: Vec<String>,
        original_text: String,
        argument_separator: String,
    ) -> Self {
        Self {
            command,
            arguments,
            original_text,
            argument_separator,
        }
    }

    /// Tokenize a command line
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        parser::parse_command(line)
    }

    /// The command name
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Arguments following the command, in order
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// The line exactly as it was given
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// The separator text the line was split on (empty for a bare command)
    pub fn argument_separator(&self) -> &str {
        &self.argument_separator
    }

    /// Case-insensitive command name comparison
    pub fn is_command(&self, name: &str) -> bool {
        self.command.eq_ignore_ascii_case(name)
    }
}

/// Re-joins the tokens with the recorded separator
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)?;
        for argument in &self.arguments {
            write!(f, "{}{}", self.argument_separator, argument)?;
        }
        Ok(())
    }
}
