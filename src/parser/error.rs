//! Parse errors

use std::fmt;

/// Which feather field a numeric error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatherField {
    Angle,
    Magnitude,
}

impl fmt::Display for FeatherField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatherField::Angle => f.write_str("angle"),
            FeatherField::Magnitude => f.write_str("magnitude"),
        }
    }
}

/// Error type for action and command line parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid frame count: {0:?}")]
    InvalidFrameCount(String),

    #[error("Invalid feather {field}: {value:?}")]
    InvalidFloat { field: FeatherField, value: String },

    #[error("No actions follow the frame count")]
    MissingActions,

    #[error("Empty command line")]
    EmptyCommand,
}
