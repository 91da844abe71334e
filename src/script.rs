//! Script line classification
//!
//! Splits script text into blank lines, comments, action lines and command
//! lines, and renders them back in canonical form. Works on strings only.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::app::Config;
use crate::core::{ActionLine, CommandLine};
use crate::parser;

/// One line of a script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ScriptLine {
    Empty,
    Comment(String),
    Action(ActionLine),
    Command(CommandLine),
}

impl ScriptLine {
    /// Classify a single line
    pub fn classify(line: &str, config: &Config) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return ScriptLine::Empty;
        }
        if config.is_comment(trimmed) {
            return ScriptLine::Comment(trimmed.to_string());
        }
        if let Some(action_line) = config.parse_action(line) {
            return ScriptLine::Action(action_line);
        }

        match parser::parse_command(trimmed) {
            Ok(command_line) => ScriptLine::Command(command_line),
            Err(_) => ScriptLine::Empty,
        }
    }

    /// Check if this is an action line
    pub fn is_action(&self) -> bool {
        matches!(self, ScriptLine::Action(_))
    }

    /// Check if this is a command line
    pub fn is_command(&self) -> bool {
        matches!(self, ScriptLine::Command(_))
    }
}

impl fmt::Display for ScriptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptLine::Empty => Ok(()),
            ScriptLine::Comment(text) => f.write_str(text),
            ScriptLine::Action(action_line) => write!(f, "{}", action_line),
            ScriptLine::Command(command_line) => f.write_str(command_line.original_text()),
        }
    }
}

/// Classify every line of a script
pub fn parse_script(text: &str, config: &Config) -> Vec<ScriptLine> {
    text.lines()
        .map(|line| ScriptLine::classify(line, config))
        .collect()
}

/// Rewrite a script with every action line in canonical form
pub fn format_script(text: &str, config: &Config) -> String {
    let mut output = String::with_capacity(text.len());
    for line in parse_script(text, config) {
        output.push_str(&line.to_string());
        output.push('\n');
    }
    output
}
