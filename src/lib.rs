//! TAS Script Library
//!
//! Text front-end for tool-assisted playthrough scripts. Each script line is
//! either an action line (a frame count plus held inputs, e.g. `  15,R,J`) or
//! a command line (a directive such as `Read file.tas 3`).
//!
//! - `core`: Action vocabulary, action lines and command lines
//! - `parser`: Strict and lenient action line parsers, command tokenizer
//! - `script`: Whole-script classification and canonical formatting
//! - `app`: Parse policy configuration
//!
//! Everything here is pure text processing; parse calls share no state and
//! may run concurrently.

pub mod app;
pub mod core;
pub mod parser;
pub mod script;

pub use crate::core::{ActionLine, Actions, CommandLine};
pub use crate::parser::{
    parse, parse_command, parse_loose, parse_strict, serialize, FeatherField, ParseError,
};
pub use crate::script::{format_script, parse_script, ScriptLine};
