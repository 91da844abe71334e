//! Command line tokenizer
//!
//! Commands may separate their arguments with whitespace or with commas
//! (optionally padded by whitespace). The first separator found decides the
//! style for the whole line, so the original spacing can be reproduced.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ParseError;
use crate::core::CommandLine;

/// Whitespace, or a comma with optional surrounding whitespace
static SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\s+)|(?:\s*,\s*)").expect("separator pattern is valid"));

/// Split a command line into command name and arguments
pub fn parse_command(line: &str) -> Result<CommandLine, ParseError> {
    if line.trim().is_empty() {
        return Err(ParseError::EmptyCommand);
    }

    let Some(separator) = SEPARATOR.find(line).map(|m| m.as_str()) else {
        return Ok(CommandLine::new(
            line.to_string(),
            Vec::new(),
            line.to_string(),
            String::new(),
        ));
    };

    let mut tokens = line.split(separator).map(str::to_string);
    let command = tokens.next().unwrap_or_default();
    let arguments = tokens.collect();

    Ok(CommandLine::new(
        command,
        arguments,
        line.to_string(),
        separator.to_string(),
    ))
}
