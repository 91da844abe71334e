//! Application glue module
//!
//! Parse policy configuration shared by the library helpers and the formatter.

mod config;

pub use config::{Config, ConfigError};
