//! Script Data Model
//!
//! Value types produced by the parsers:
//! - Action vocabulary (bit-flag set of inputs)
//! - Action lines and their canonical text form
//! - Command lines
//!
//! Every value is built fresh per parse call and compared structurally.

mod action_line;
mod actions;
mod command_line;

pub use action_line::ActionLine;
pub use actions::Actions;
pub use command_line::CommandLine;
